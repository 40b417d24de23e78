const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Settings handed to the proxy at startup.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    /// Credential for the completion provider. `None` is allowed: each request
    /// then fails with a configuration error instead of the server refusing to start.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ProxyConfig {
    pub fn new(api_key: Option<String>) -> Self {
        ProxyConfig {
            //An empty key is as good as no key.
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig::new(None)
    }
}
