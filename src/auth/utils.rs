use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sha2::Sha256;
use std::env;
use uuid::Uuid;

use crate::users::models::User;

use super::models::Claims;

type HmacSha256 = Hmac<Sha256>;

pub const TOKEN_LIFETIME_DAYS: i64 = 7;

pub fn new_salt() -> String {
    BASE64.encode(Uuid::new_v4().as_bytes())
}

/// Salted HMAC-SHA256 of the password, base64 encoded for storage.
/// A salt that fails to decode just produces a hash that can never verify.
pub fn hash_password(password: &str, salt: &str) -> String {
    let key = BASE64.decode(salt).unwrap_or_default();
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());

    BASE64.encode(mac.finalize().into_bytes())
}

pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt) == expected_hash
}

pub fn generate_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: user.id.to_string(),
        name: user.username.clone(),
        email: user.email.clone(),
        iat: now,
        exp: now + (TOKEN_LIFETIME_DAYS as usize) * 24 * 60 * 60,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "defaultSecretKey12345678901234567890".to_string())
}
