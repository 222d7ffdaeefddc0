pub(crate) mod balance;
pub(crate) mod guard;
pub(crate) mod login;

// re-export items from sub-modules
pub use balance::*;
pub use guard::*;
pub use login::*;
