use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    config::AppConfig,
    dto::auth::{Claims, TokenKind, TokenPair},
    entity::new_id,
    error::{AppError, AppResult},
};

/// Signs and checks HS256 session tokens. Access and refresh tokens share
/// the secret but carry their own expiry window and `type` claim.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            config.access_token_ttl,
            config.refresh_token_ttl,
        )
    }

    pub fn issue(&self, subject: &str, kind: TokenKind) -> AppResult<String> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: expiration.timestamp().max(0) as usize,
            jti: new_id(),
            kind,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }

    pub fn issue_pair(&self, subject: &str) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue(subject, TokenKind::Access)?,
            refresh_token: self.issue(subject, TokenKind::Refresh)?,
        })
    }

    /// Rejects bad signatures, expired tokens and tokens of the other kind.
    pub fn verify(&self, token: &str, expected: TokenKind) -> AppResult<Claims> {
        let decoded = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|err| {
                tracing::debug!(error = %err, "token rejected");
                AppError::Unauthorized
            })?;

        if decoded.claims.kind != expected {
            return Err(AppError::Unauthorized);
        }
        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", Duration::minutes(15), Duration::days(30))
    }

    #[test]
    fn pair_carries_subject_and_distinct_kinds() {
        let issuer = issuer();
        let pair = issuer.issue_pair("u1").unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_ne!(pair.access_token, pair.refresh_token);

        let access = issuer.verify(&pair.access_token, TokenKind::Access).unwrap();
        let refresh = issuer.verify(&pair.refresh_token, TokenKind::Refresh).unwrap();
        assert_eq!(access.sub, "u1");
        assert_eq!(refresh.sub, "u1");
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let issuer = issuer();
        let pair = issuer.issue_pair("u1").unwrap();
        assert!(matches!(
            issuer.verify(&pair.refresh_token, TokenKind::Access),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            issuer.verify(&pair.access_token, TokenKind::Refresh),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = issuer().issue("u1", TokenKind::Access).unwrap();
        let other = TokenIssuer::new("other-secret", Duration::minutes(15), Duration::days(30));
        assert!(matches!(
            other.verify(&token, TokenKind::Access),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("test-secret", Duration::minutes(-10), Duration::days(30));
        let token = issuer.issue("u1", TokenKind::Access).unwrap();
        assert!(matches!(
            issuer.verify(&token, TokenKind::Access),
            Err(AppError::Unauthorized)
        ));
    }
}
