use std::{error::Error, fmt::Debug, time::Duration};

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::GeneratedMenuItem, utils::error_fmt_chain};

// Client to interact with the Gemini generative language API
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    // create new gemini client, fails only if the http client cannot be built
    pub fn new(
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<GeminiClient, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            model,
        })
    }

    #[tracing::instrument(
        "Requesting menu from gemini",
        skip(self, api_key)
    )]
    pub async fn generate_menu(
        &self,
        concept: &str,
        api_key: &SecretString,
    ) -> Result<Vec<GeneratedMenuItem>, DelegationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let prompt = menu_prompt(concept);
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .header("x-goog-api-key", api_key.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(DelegationError::EmptyResponse)?;

        let items: Vec<GeneratedMenuItem> = serde_json::from_str(&text)?;
        if items.is_empty() {
            return Err(DelegationError::EmptyResponse);
        }

        Ok(items)
    }
}

pub fn menu_prompt(concept: &str) -> String {
    format!(
        "Eres el chef de un restaurante mexicano. Propón platillos para el concepto: \"{}\". \
         Responde solo con un arreglo JSON de objetos con los campos \
         \"id\" (texto), \"name\" (texto), \"price\" (número), \"category\" (texto) y \"description\" (texto).",
        concept
    )
}

// Everything that can go wrong while delegating to the model
#[derive(Error)]
pub enum DelegationError {
    #[error("Request to the model failed")]
    RequestError(#[from] reqwest::Error),
    #[error("Model returned no menu items")]
    EmptyResponse,
    #[error("Model returned a malformed menu")]
    MalformedMenu(#[from] serde_json::Error),
}

impl Debug for DelegationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}
