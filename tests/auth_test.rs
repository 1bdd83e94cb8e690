///! Integration test for auth token issuance and validation.
///!
///! Mints a token with the same HS256 path the `/api/auth/token` endpoint
///! uses, then validates it through `validate_token`. No running server or
///! database is needed.
///!
///! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use jobsphere_backend::auth::jwt::{Claims, Identity, mint_token, validate_token};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn test_identity() -> Identity {
    Identity {
        email: "alice@example.com".to_string(),
        name: Some("Alice Smith".to_string()),
        photo: Some("https://example.com/avatar.png".to_string()),
    }
}

#[test]
fn test_minted_token_round_trips() {
    let token = mint_token(&test_identity(), TEST_SECRET).expect("minting should succeed");

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, "alice@example.com");
    assert_eq!(claims.name.as_deref(), Some("Alice Smith"));
    assert_eq!(
        claims.photo.as_deref(),
        Some("https://example.com/avatar.png")
    );

    let identity = claims.identity();
    assert_eq!(identity.email, "alice@example.com");
    assert_eq!(identity.name.as_deref(), Some("Alice Smith"));
}

#[test]
fn test_token_carries_one_hour_expiry() {
    let before = Utc::now().timestamp() as usize;
    let token = mint_token(&test_identity(), TEST_SECRET).unwrap();
    let claims = validate_token(&token, TEST_SECRET).unwrap();

    assert!(claims.exp >= before + 3600);
    assert!(claims.exp <= Utc::now().timestamp() as usize + 3600);
    assert!(claims.iat.is_some());
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: "expired@example.com".to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: Some(now - 3600),
        name: None,
        photo: None,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_token(&test_identity(), TEST_SECRET).unwrap();

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_identity_without_profile_fields() {
    let identity = Identity {
        email: "bare@example.com".to_string(),
        name: None,
        photo: None,
    };

    let token = mint_token(&identity, TEST_SECRET).unwrap();
    let claims = validate_token(&token, TEST_SECRET).unwrap();

    assert_eq!(claims.sub, "bare@example.com");
    assert!(claims.name.is_none());
    assert!(claims.photo.is_none());
}
