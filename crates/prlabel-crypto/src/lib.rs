//! Crypto module.
//!
//! Webhook signature checks and GitHub App tokens.

mod errors;
mod jwt;
#[cfg(any(test, feature = "testkit"))]
mod rsa;
mod sig;

pub use jwt::JwtUtils;

#[cfg(any(test, feature = "testkit"))]
pub use self::rsa::{PrivateRsaKey, PublicRsaKey, RsaUtils};
pub use self::{
    errors::{CryptoError, Result},
    sig::Signature,
};
