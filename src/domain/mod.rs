pub mod claims;
pub mod credential_verifier;
pub mod identity;
pub mod login_request;
pub mod login_response;
mod user;

pub use claims::*;
pub use credential_verifier::*;
pub use identity::*;
pub use login_request::*;
pub use login_response::*;
pub use user::*;
