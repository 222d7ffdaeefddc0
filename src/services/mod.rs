pub mod issuer;
pub mod mock_credential_verifier;
pub mod token_codec;

pub use issuer::*;
pub use mock_credential_verifier::*;
pub use token_codec::*;
