// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

/// Stateless bearer tokens: `base64url(claims).base64url(hmac-sha256)`.
/// The signing key is shared with the upstream identity provider, which is
/// the actual issuer in a deployment; this crate only ever verifies.
#[derive(Clone)]
pub struct HmacTokenManager {
    key: Arc<Vec<u8>>,
    ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    uid: i64,
    iat: i64,
    exp: i64,
}

impl HmacTokenManager {
    pub fn new(signing_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let key = hex::decode(signing_key_hex)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid signing key: {err}")))?;
        if key.len() < 32 {
            return Err(ApplicationError::infrastructure(
                "signing key must be at least 32 bytes",
            ));
        }

        Ok(Self {
            key: Arc::new(key),
            ttl,
        })
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.key).expect("hmac accepts any key length")
    }

    fn sign(&self, payload_b64: &str) -> String {
        let mut mac = self.mac();
        mac.update(payload_b64.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    fn encode(&self, claims: &TokenClaims) -> ApplicationResult<String> {
        let payload = serde_json::to_vec(claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);
        let signature_b64 = self.sign(&payload_b64);
        Ok(format!("{payload_b64}.{signature_b64}"))
    }
}

fn malformed() -> ApplicationError {
    ApplicationError::unauthorized("malformed token")
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let ttl = ChronoDuration::from_std(self.ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let expires_at = issued_at + ttl;

        let claims = TokenClaims {
            uid: subject.user_id.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(AuthTokenDto {
            token: self.encode(&claims)?,
            issued_at,
            expires_at,
            expires_in: ttl.num_seconds().max(0),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload_b64, signature_b64) = token.split_once('.').ok_or_else(malformed)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| malformed())?;
        let mut mac = self.mac();
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| malformed())?;
        let claims: TokenClaims = serde_json::from_slice(&payload).map_err(|_| malformed())?;

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or_else(malformed)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or_else(malformed)?;

        if Utc::now() > expires_at {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        let id = crate::domain::user::UserId::new(claims.uid)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(AuthenticatedUser {
            id,
            issued_at,
            expires_at,
        })
    }
}
