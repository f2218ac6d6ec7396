use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    /// Per-branch fetch deadline; a branch past it is reported as failed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub aws: ProviderConfig,
    pub azure: ProviderConfig,
    pub gcp: ProviderConfig,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Path to the snapshot document the fixture client serves.
    pub fixture: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.providers.timeout_secs > 0,
            "providers.timeout_secs must be > 0, got {}",
            self.providers.timeout_secs
        );
        for (name, provider) in [
            ("aws", &self.providers.aws),
            ("azure", &self.providers.azure),
            ("gcp", &self.providers.gcp),
        ] {
            anyhow::ensure!(
                !provider.fixture.is_empty(),
                "providers.{}.fixture must be non-empty",
                name
            );
        }
        Ok(())
    }
}
