use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
}

/// Apenas o modelo é configurável; temperatura e limite de tokens são
/// fixos por chamada (classificação 0.1/150, resposta 0.7/200)
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    pub model: String,
}

impl Config {
    /// OpenAI API key, environment only (never from config.toml)
    pub fn openai_api_key(&self) -> Option<String> {
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
bind = "0.0.0.0:3000"

[llm]
model = "gpt-4o-mini"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        tracing::error!("Falha ao carregar config, usando padrão embutido: {e}");
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
    })
});

pub fn get() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn test_unknown_llm_keys_are_rejected() {
        // Temperatura não é configurável; um config.toml com a chave deve
        // falhar em vez de ser ignorado em silêncio
        let result: Result<Config, _> = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:3000"

            [llm]
            model = "gpt-4o-mini"
            temperature = 0.5
            "#,
        );
        assert!(result.is_err());
    }
}
