//! Opaque identifier generation.
//!
//! Identifiers are random bytes from the OS, URL-safe base64 encoded and cut
//! to a fixed length. Uniqueness is not guaranteed here; the owning table
//! checks for collisions before inserting.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::{rngs::OsRng, TryRngCore};
use tracing::error;

pub const ID_LENGTH: usize = 10;
pub const SECRET_CODE_LENGTH: usize = 8;

/// Returns a 10 character identifier for users and complaints.
pub fn generate_id() -> String {
    generate_token(ID_LENGTH)
}

/// Returns an 8 character secret code. Secret codes are bearer credentials.
pub fn generate_secret_code() -> String {
    generate_token(SECRET_CODE_LENGTH)
}

/// Produces `len` URL-safe base64 characters from `len` random bytes.
///
/// An empty string is returned when the randomness source fails.
pub fn generate_token(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
        error!(error = %e, "Randomness source failed, returning empty token");
        return String::new();
    }

    let mut token = URL_SAFE.encode(&bytes);
    token.truncate(len);
    token
}

/// Maps the generator's empty-string failure onto `None`.
pub fn non_empty(token: String) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
