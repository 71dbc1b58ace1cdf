use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::error::{AppError, AppResult};

/// Hash `plaintext` with a fresh random salt. The result is a PHC string.
pub fn hash_password(plaintext: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

/// `Ok(false)` on mismatch; only an unparseable stored hash is an error.
pub fn verify_password(hash: &str, candidate: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_never_the_plaintext() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, "secret");
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
    }

    #[test]
    fn verify_matches_only_the_hashed_password() {
        let hash = hash_password("secret").unwrap();
        assert!(verify_password(&hash, "secret").unwrap());
        assert!(!verify_password(&hash, "wrong").unwrap());
        assert!(!verify_password(&hash, "").unwrap());
    }

    #[test]
    fn corrupt_hash_is_an_error() {
        let err = verify_password("not-a-phc-string", "secret").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
