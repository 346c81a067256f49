use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use tracing::error;

const DUMMY_PASSWORD: &str = "dummypassword";

lazy_static! {
    /// Hash of a throwaway password, verified against when a login names no account.
    pub static ref DUMMY_HASH: String =
        hash_password(DUMMY_PASSWORD).expect("argon2 must hash a constant password");
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "stored password hash is not a PHC string");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Verify and fold every error into a plain `false`.
pub fn password_matches(plain: &str, hash: &str) -> bool {
    verify_password(plain, hash).unwrap_or(false)
}

/// Spend one verification on the dummy hash; the outcome is irrelevant.
pub fn burn_dummy_verify(plain: &str) {
    let _ = verify_password(plain, &DUMMY_HASH);
}

// Argon2 is CPU bound; these keep it off the async worker threads.

pub async fn spawn_hash_password(plain: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain)).await?
}

pub async fn spawn_password_matches(plain: String, hash: String) -> bool {
    tokio::task::spawn_blocking(move || password_matches(&plain, &hash))
        .await
        .unwrap_or(false)
}

pub async fn spawn_dummy_verify(plain: String) {
    tokio::task::spawn_blocking(move || burn_dummy_verify(&plain))
        .await
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_password_verifies_at_login() {
        let stored = hash_password("hunter2hunter2").expect("registration hash");
        assert!(verify_password("hunter2hunter2", &stored).expect("well-formed hash"));
    }

    #[test]
    fn mistyped_password_does_not_verify() {
        let stored = hash_password("hunter2hunter2").expect("registration hash");
        assert!(!verify_password("hunter2hunter3", &stored).expect("well-formed hash"));
    }

    #[test]
    fn corrupt_stored_hash_is_an_error_but_never_a_match() {
        assert!(verify_password("hunter2hunter2", "plaintext-in-db").is_err());
        assert!(!password_matches("hunter2hunter2", "plaintext-in-db"));
        assert!(!password_matches("hunter2hunter2", "$md5$whatever"));
    }

    #[test]
    fn two_users_with_one_password_get_different_hashes() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn dummy_hash_is_a_real_argon2_hash() {
        assert!(PasswordHash::new(&DUMMY_HASH).is_ok());
        assert!(password_matches(DUMMY_PASSWORD, &DUMMY_HASH));
        burn_dummy_verify("whatever-you-type");
    }

    #[tokio::test]
    async fn blocking_pool_helpers_agree_with_sync_versions() {
        let stored = spawn_hash_password("hunter2hunter2".into())
            .await
            .expect("registration hash");
        assert!(spawn_password_matches("hunter2hunter2".into(), stored.clone()).await);
        assert!(!spawn_password_matches("wrong-password".into(), stored).await);
        assert!(!spawn_password_matches("hunter2hunter2".into(), "garbage".into()).await);
        spawn_dummy_verify("nobody-knows".into()).await;
    }
}
