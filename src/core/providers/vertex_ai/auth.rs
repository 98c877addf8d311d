//! Vertex AI Authentication
//!
//! Credentials are discovered in this order:
//! - `GOOGLE_APPLICATION_CREDENTIALS` (path to a JSON key file)
//! - `VERTEX_AI_CREDENTIALS` (inline JSON key)
//! - `VERTEX_ACCESS_TOKEN` (pre-minted bearer token)
//! - the gcloud well-known file (`application_default_credentials.json`)
//! - the GCE/Cloud Run metadata server

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Vertex AI Authentication credentials
#[derive(Debug, Clone)]
pub enum VertexCredentials {
    /// Service Account JSON key
    ServiceAccount(ServiceAccountKey),

    /// Authorized User (from `gcloud auth application-default login`)
    AuthorizedUser(AuthorizedUserCredentials),

    /// Metadata server of the hosting environment
    ApplicationDefault,

    /// Direct access token
    AccessToken(String),
}

/// Service Account key structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    OAUTH_TOKEN_URL.to_string()
}

/// Authorized User credentials (from gcloud)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorizedUserCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(rename = "type")]
    pub cred_type: String,
}

/// OAuth2 Token with expiration
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at - Duration::minutes(5) // 5 min buffer
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

impl From<TokenResponse> for AccessToken {
    fn from(response: TokenResponse) -> Self {
        Self {
            token: response.access_token,
            expires_at: Utc::now() + Duration::seconds(response.expires_in),
        }
    }
}

/// Vertex AI Authentication handler
#[derive(Debug, Clone)]
pub struct VertexAuth {
    credentials: VertexCredentials,
    token_cache: Arc<RwLock<Option<AccessToken>>>,
    http_client: reqwest::Client,
}

impl VertexAuth {
    /// Create new authentication handler
    pub fn new(credentials: VertexCredentials) -> Self {
        Self {
            credentials,
            token_cache: Arc::new(RwLock::new(None)),
            http_client: reqwest::Client::new(),
        }
    }

    /// Load credentials from the process environment
    pub async fn from_env() -> Result<Self> {
        let credentials = Self::discover(|key| std::env::var(key).ok()).await?;
        Ok(Self::new(credentials))
    }

    /// Resolve credentials using `lookup` for environment variables
    pub async fn discover<F>(lookup: F) -> Result<VertexCredentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("GOOGLE_APPLICATION_CREDENTIALS").filter(|p| !p.is_empty()) {
            debug!("Using credentials file from GOOGLE_APPLICATION_CREDENTIALS");
            return Self::load_credentials_from_file(&path).await;
        }

        if let Some(json_str) = lookup("VERTEX_AI_CREDENTIALS").filter(|s| !s.is_empty()) {
            debug!("Using inline credentials from VERTEX_AI_CREDENTIALS");
            return Self::parse_credentials(&json_str);
        }

        if let Some(token) = lookup("VERTEX_ACCESS_TOKEN").filter(|t| !t.is_empty()) {
            debug!("Using static access token from VERTEX_ACCESS_TOKEN");
            return Ok(VertexCredentials::AccessToken(token));
        }

        if let Some(path) = well_known_file(&lookup) {
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                debug!("Using gcloud credentials from {}", path.display());
                return Self::load_credentials_from_file(&path.to_string_lossy()).await;
            }
        }

        debug!("Falling back to metadata server credentials");
        Ok(VertexCredentials::ApplicationDefault)
    }

    /// Load credentials from a JSON file
    pub async fn load_credentials_from_file(path: &str) -> Result<VertexCredentials> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read credentials file {}", path))?;
        Self::parse_credentials(&contents)
    }

    /// Parse credentials from JSON string
    pub fn parse_credentials(json_str: &str) -> Result<VertexCredentials> {
        let json_obj: serde_json::Value =
            serde_json::from_str(json_str).context("Credentials are not valid JSON")?;

        match json_obj.get("type").and_then(|t| t.as_str()) {
            Some("service_account") => {
                let key: ServiceAccountKey = serde_json::from_value(json_obj)?;
                Ok(VertexCredentials::ServiceAccount(key))
            }
            Some("authorized_user") => {
                let creds: AuthorizedUserCredentials = serde_json::from_value(json_obj)?;
                Ok(VertexCredentials::AuthorizedUser(creds))
            }
            Some(other) => Err(anyhow::anyhow!("Unsupported credential type: {}", other)),
            None => Err(anyhow::anyhow!("Credentials JSON has no \"type\" field")),
        }
    }

    /// Short description of the credential source, safe to log
    pub fn describe(&self) -> &'static str {
        match &self.credentials {
            VertexCredentials::ServiceAccount(_) => "service account",
            VertexCredentials::AuthorizedUser(_) => "authorized user",
            VertexCredentials::ApplicationDefault => "metadata server",
            VertexCredentials::AccessToken(_) => "static access token",
        }
    }

    /// Get a valid access token
    pub async fn get_access_token(&self) -> Result<String> {
        if let VertexCredentials::AccessToken(token) = &self.credentials {
            return Ok(token.clone());
        }

        // Check cache first
        {
            let cache = self.token_cache.read().await;
            if let Some(ref token) = *cache {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let new_token = match &self.credentials {
            VertexCredentials::ServiceAccount(key) => self.get_service_account_token(key).await?,
            VertexCredentials::AuthorizedUser(creds) => {
                self.get_authorized_user_token(creds).await?
            }
            VertexCredentials::ApplicationDefault => self.get_metadata_token().await?,
            VertexCredentials::AccessToken(token) => return Ok(token.clone()),
        };
        debug!("Refreshed access token, expires at {}", new_token.expires_at);

        let token_string = new_token.token.clone();
        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(new_token);
        }

        Ok(token_string)
    }

    /// Sign a JWT with the service account key and exchange it
    async fn get_service_account_token(&self, key: &ServiceAccountKey) -> Result<AccessToken> {
        use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

        #[derive(Debug, Serialize)]
        struct Claims<'a> {
            iss: &'a str,
            scope: &'a str,
            aud: &'a str,
            exp: i64,
            iat: i64,
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            iss: &key.client_email,
            scope: CLOUD_PLATFORM_SCOPE,
            aud: &key.token_uri,
            exp: now + 3600,
            iat: now,
        };

        let mut header = Header::new(Algorithm::RS256);
        if !key.private_key_id.is_empty() {
            header.kid = Some(key.private_key_id.clone());
        }
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .context("Invalid service account private key")?;
        let jwt = encode(&header, &claims, &encoding_key)?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", jwt.as_str()),
        ];

        let response: TokenResponse = self
            .http_client
            .post(&key.token_uri)
            .form(&params)
            .send()
            .await?
            .error_for_status()
            .context("Service account token exchange rejected")?
            .json()
            .await?;

        Ok(response.into())
    }

    /// Exchange a gcloud refresh token
    async fn get_authorized_user_token(
        &self,
        creds: &AuthorizedUserCredentials,
    ) -> Result<AccessToken> {
        let params = [
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("refresh_token", creds.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response: TokenResponse = self
            .http_client
            .post(OAUTH_TOKEN_URL)
            .form(&params)
            .send()
            .await?
            .error_for_status()
            .context("Refresh token exchange rejected")?
            .json()
            .await?;

        Ok(response.into())
    }

    /// Fetch a token from the metadata server (GCE, Cloud Run, GKE)
    async fn get_metadata_token(&self) -> Result<AccessToken> {
        let response = self
            .http_client
            .get(METADATA_TOKEN_URL)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context(
                "Unable to get ADC token. Set GOOGLE_APPLICATION_CREDENTIALS or run \
                 'gcloud auth application-default login'",
            )?;

        let token: TokenResponse = response.json().await?;
        Ok(token.into())
    }
}

/// Location of gcloud's application default credentials
fn well_known_file<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let config_dir = if cfg!(windows) {
        PathBuf::from(lookup("APPDATA")?).join("gcloud")
    } else {
        PathBuf::from(lookup("HOME")?).join(".config").join("gcloud")
    };
    Some(config_dir.join("application_default_credentials.json"))
}
