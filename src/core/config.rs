use std::env;

/// Process-level configuration, read from the environment at handler start.
///
/// The Slack channel token is deliberately not part of this struct: it is
/// supplied by the caller on every request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error naming the missing variable if `OPENAI_API_KEY` is not
    /// set.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {e}"))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
        })
    }
}
