use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::shared::config::AuthConfig;

/// Generate a signed access token for `user_id`
pub fn generate_access_token(config: &AuthConfig, user_id: &str) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(config.token_lifetime_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Validate JWT token and extract claims
pub fn validate_token(config: &AuthConfig, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, hours: i64) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.into(),
            token_lifetime_hours: hours,
        }
    }

    #[test]
    fn test_token_carries_subject() {
        let cfg = config("secret", 1);
        let token = generate_access_token(&cfg, "u-1").unwrap();
        let claims = validate_token(&cfg, &token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_access_token(&config("secret", 1), "u-1").unwrap();
        assert!(validate_token(&config("other", 1), &token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let cfg = config("secret", -2);
        let token = generate_access_token(&cfg, "u-1").unwrap();
        assert!(validate_token(&cfg, &token).is_err());
    }
}
