//! The caller-supplied credential triple.

/// AWS-style credentials for request signing.
///
/// Supplied per invocation and never persisted by the runtime.
#[derive(Clone, Default)]
pub struct Credentials {
    /// The access key ID.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Create credentials from an access key / secret key pair.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Build credentials from an STS-style response object carrying
    /// `AccessKeyId`, `SecretAccessKey`, and `SessionToken` fields.
    ///
    /// Returns `None` when the key pair is absent.
    #[must_use]
    pub fn from_sts_response(response: &serde_json::Value) -> Option<Self> {
        let access_key_id = response.get("AccessKeyId")?.as_str()?;
        let secret_access_key = response.get("SecretAccessKey")?.as_str()?;
        let mut credentials = Self::new(access_key_id, secret_access_key);
        if let Some(token) = response.get("SessionToken").and_then(|t| t.as_str()) {
            credentials = credentials.with_session_token(token);
        }
        Some(credentials)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
