use serde::Deserialize;

use super::models::upstream_config::UpstreamConfig;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub openai_api_key: Option<String>,
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    pub cutout_pro_api_key: Option<String>,
    #[serde(default = "default_cutout_pro_api_url")]
    pub cutout_pro_api_url: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    pub generate_cooldown_secs: Option<u64>,
    #[serde(default = "default_upload_limit_bytes")]
    pub upload_limit_bytes: usize,
}

impl Envy {
    pub fn openai(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.openai_api_url, self.openai_api_key.as_deref())
    }

    pub fn cutout_pro(&self) -> UpstreamConfig {
        UpstreamConfig::new(
            &self.cutout_pro_api_url,
            self.cutout_pro_api_key.as_deref(),
        )
    }
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            openai_api_key: None,
            openai_api_url: default_openai_api_url(),
            cutout_pro_api_key: None,
            cutout_pro_api_url: default_cutout_pro_api_url(),
            static_dir: default_static_dir(),
            generate_cooldown_secs: None,
            upload_limit_bytes: default_upload_limit_bytes(),
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_cutout_pro_api_url() -> String {
    "https://www.cutout.pro/api/v1".to_string()
}

fn default_static_dir() -> String {
    "build".to_string()
}

fn default_upload_limit_bytes() -> usize {
    10 * 1024 * 1024
}
