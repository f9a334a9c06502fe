use crate::config::SessionConfig;
use crate::services::conversation::SessionToken;
use crate::utils::error::ApiError;
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies the signed session cookie.
/// Cookie value format: `<token>.<hex HMAC-SHA256(secret, token)>`
#[derive(Debug, Clone)]
pub struct SessionSigner {
    secret: String,
    cookie_name: String,
    secure: bool,
}

impl SessionSigner {
    pub fn new(secret: String, cookie_name: String, secure: bool) -> Self {
        Self {
            secret,
            cookie_name,
            secure,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.secret_key.clone(),
            config.cookie_name.clone(),
            config.cookie_secure,
        )
    }

    fn mac(&self) -> Result<HmacSha256, ApiError> {
        HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| ApiError::InternalError(format!("HMAC error: {}", e)))
    }

    /// Signed cookie value for `token`
    pub fn sign(&self, token: &SessionToken) -> Result<String, ApiError> {
        let mut mac = self.mac()?;
        mac.update(token.as_str().as_bytes());
        Ok(format!(
            "{}.{}",
            token.as_str(),
            hex::encode(mac.finalize().into_bytes())
        ))
    }

    /// Token carried by a cookie value, if its signature checks out
    pub fn verify(&self, value: &str) -> Option<SessionToken> {
        let (token, signature) = value.rsplit_once('.')?;
        if token.is_empty() {
            return None;
        }
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(token.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            warn!("Rejected session cookie with invalid signature");
            return None;
        }

        Some(SessionToken::new(token))
    }

    /// Session token from the request's Cookie headers
    pub fn from_headers(&self, headers: &HeaderMap) -> Option<SessionToken> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .and_then(|(_, value)| self.verify(value))
    }

    /// `Set-Cookie` value issuing `token` to the browser
    pub fn set_cookie(&self, token: &SessionToken) -> Result<HeaderValue, ApiError> {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            self.cookie_name,
            self.sign(token)?
        );
        if self.secure {
            cookie.push_str("; Secure");
        }

        debug!("Issuing session cookie for {}", token);

        HeaderValue::from_str(&cookie)
            .map_err(|e| ApiError::InternalError(format!("Invalid cookie header: {}", e)))
    }
}
