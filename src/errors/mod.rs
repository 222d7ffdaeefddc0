mod guard;
mod login;

pub use guard::*;
pub use login::*;
