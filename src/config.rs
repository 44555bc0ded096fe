use anyhow::Result;
use config::{Config, File};
use serde::Deserialize;

// Service literals the remote API expects verbatim.
const DEFAULT_BASE_URL: &str = "https://sp-odyssey-api.playnation.app/api";
const DEFAULT_ORIGIN: &str = "https://story-protocol-odyssey-tele.playnation.app";
const DEFAULT_REFERER: &str = "https://story-protocol-odyssey-tele.playnation.app/";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";
const DEFAULT_REFERRAL_CODE: &str = "3iILL6YnL";

/// Remote service parameters handed to [`crate::ApiClient`] at construction.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub origin: String,
    pub referer: String,
    pub user_agent: String,
    pub referral_code: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OdysseyConfig {
    pub api: ApiConfig,
    pub query_file: String,
    pub accounts_dir: String,
    pub account_delay_secs: u64,
}

impl OdysseyConfig {
    /// Loads configuration from a TOML file layered over built-in defaults.
    /// The file is optional; with no file present the defaults reproduce the
    /// original service constants.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.origin", DEFAULT_ORIGIN)?
            .set_default("api.referer", DEFAULT_REFERER)?
            .set_default("api.user_agent", DEFAULT_USER_AGENT)?
            .set_default("api.referral_code", DEFAULT_REFERRAL_CODE)?
            .set_default("query_file", "query.txt")?
            .set_default("accounts_dir", "accounts")?
            .set_default("account_delay_secs", 5i64)?
            .add_source(File::with_name(path).required(false))
            .build()?;

        settings.try_deserialize().map_err(|e| anyhow::anyhow!(e))
    }
}
