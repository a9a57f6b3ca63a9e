use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub ai: AiSettings
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16,
    // Only origin allowed through CORS
    pub allowed_origin: String
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings{
    pub url: String,
    pub max_connections: u32
}

#[derive(Deserialize, Debug)]
pub struct AiSettings{
    // When false the model client is never built and every request is simulated
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub timeout_milliseconds: u64,
    #[serde(default)]
    pub api_key: Option<SecretString>
}

impl Settings{
    // base.yaml, then APP_ env overrides (APP_APPLICATION__PORT=9000); key from GEMINI_API_KEY
    pub fn get() -> Self{
        let config = Config::builder()
            .add_source(File::with_name("configuration/base.yaml"))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
            )
            .set_override_option("ai.api_key", std::env::var("GEMINI_API_KEY").ok())
            .expect("Failed to read GEMINI_API_KEY")
            .build()
            .expect("Failed to get configuration")
            .try_deserialize::<Settings>()
            .expect("Failed to deserialize to Settings struct");

        config
    }
}

impl AiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}
