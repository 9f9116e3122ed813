pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::TokenClaims;
pub use claims::TokenPair;
pub use codec::TokenCodec;
pub use codec::ACCESS_TOKEN_LIFETIME_SECS;
pub use codec::REFRESH_TOKEN_LIFETIME_SECS;
pub use errors::TokenError;
