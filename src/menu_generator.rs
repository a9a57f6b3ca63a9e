use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::{configuration::AiSettings, domain::{simulated_menu, GeneratedMenuItem}, gemini_client::GeminiClient};

// Whether the generative model can be reached at all, resolved once at start-up
#[derive(Debug)]
pub enum AiCapability {
    Available(GeminiClient),
    Unavailable
}

impl AiCapability {
    pub fn resolve(settings: &AiSettings) -> AiCapability {
        if !settings.enabled {
            tracing::info!("AI integration disabled, menus will be simulated");
            return AiCapability::Unavailable;
        }

        match GeminiClient::new(settings.base_url.clone(), settings.model.clone(), settings.timeout()) {
            Ok(client) => AiCapability::Available(client),
            Err(e) => {
                tracing::warn!(error = ?e, "Gemini client could not be built, menus will be simulated");
                AiCapability::Unavailable
            }
        }
    }
}

// The only menu generation failure a caller ever sees
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Clave GEMINI_API_KEY no configurada en el entorno.")]
    MissingApiKey
}

pub struct MenuGenerator {
    capability: AiCapability,
    api_key: Option<SecretString>
}

impl MenuGenerator {
    pub fn new(capability: AiCapability, api_key: Option<SecretString>) -> Self {
        // an empty key counts as no key
        let api_key = api_key.filter(|key| !key.expose_secret().trim().is_empty());
        Self { capability, api_key }
    }

    pub fn from_settings(settings: AiSettings) -> Self {
        let capability = AiCapability::resolve(&settings);
        MenuGenerator::new(capability, settings.api_key)
    }

    // Falls back to the simulated menu unless the credential is missing
    #[tracing::instrument(
        "Generating menu",
        skip(self)
    )]
    pub async fn generate(&self, concept: &str) -> Result<Vec<GeneratedMenuItem>, ConfigurationError> {
        tracing::info!("AI menu request received");

        let client = match &self.capability {
            AiCapability::Available(client) => client,
            AiCapability::Unavailable => {
                tracing::warn!("Gemini client unavailable, using simulated menu");
                return Ok(simulated_menu());
            }
        };

        let api_key = self.api_key.as_ref().ok_or(ConfigurationError::MissingApiKey)?;

        match client.generate_menu(concept, api_key).await {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::error!(error = ?e, "Gemini request failed, using simulated menu");
                Ok(simulated_menu())
            }
        }
    }
}
