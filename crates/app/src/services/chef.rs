//! Chef assistant client over the Gemini text-generation API.
//!
//! The assistant is an opaque external capability: callers hand it a user
//! question plus a context summary and always get text back. API failures
//! never propagate; they map to a fixed fallback string at the
//! [`ChefAssistant`] boundary. Unlike the original demo's fire-and-forget
//! call, requests carry a timeout and one retry on transport failure.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use url::Url;

use crate::config::ChefConfig;

/// Reply used when the API answers but contains no usable text.
pub const FALLBACK_NO_ANSWER: &str =
    "Uzr, hozirda javob bera olmayman. Iltimos, birozdan so'ng urinib ko'ring.";

/// Reply used when the API call fails outright.
pub const FALLBACK_ERROR: &str =
    "Xatolik yuz berdi. Iltimos, internet aloqangizni tekshirib ko'ring.";

const GENERATION_TEMPERATURE: f64 = 0.7;

/// Errors that can occur when calling the text-generation API.
#[derive(Debug, thiserror::Error)]
pub enum ChefError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Error message from the API, if it sent one.
        message: String,
    },

    /// The endpoint URL could not be built.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl ChefError {
    /// Transport failures and server-side errors are worth one retry;
    /// client errors (bad key, bad request) are not.
    fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => status.is_server_error(),
            Self::Endpoint(_) => false,
        }
    }
}

/// An assistant that always answers with text.
pub trait ChefAssistant {
    /// Answer a customer question given a context summary. Infallible by
    /// contract: implementations return fallback text on failure.
    fn ask(
        &self,
        question: &str,
        context: &str,
    ) -> impl Future<Output = String> + Send;
}

/// Chef assistant client for the Gemini `generateContent` API.
#[derive(Clone)]
pub struct ChefClient {
    inner: Arc<ChefClientInner>,
}

struct ChefClientInner {
    client: reqwest::Client,
    model: String,
    base_url: Url,
    api_key: SecretString,
}

impl ChefClient {
    /// Create a new chef client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ChefConfig) -> Result<Self, ChefError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ChefClientInner {
                client,
                model: config.model.clone(),
                base_url: config.base_url.clone(),
                api_key: config.api_key.clone(),
            }),
        })
    }

    /// One `generateContent` round trip.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ChefError> {
        let url = self.inner.base_url.join(&format!(
            "v1beta/models/{}:generateContent",
            self.inner.model
        ))?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
            },
        };

        let response = self
            .inner
            .client
            .post(url)
            .query(&[("key", self.inner.api_key.expose_secret())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorResponse>()
                .await
                .map_or_else(|_| "unknown error".to_string(), |body| body.error.message);
            return Err(ChefError::Api { status, message });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.first_text())
    }

    async fn generate_with_retry(&self, prompt: &str) -> Result<Option<String>, ChefError> {
        match self.generate(prompt).await {
            Err(err) if err.is_retryable() => {
                warn!(error = %err, "Chef API call failed, retrying once");
                self.generate(prompt).await
            }
            result => result,
        }
    }
}

impl ChefAssistant for ChefClient {
    #[instrument(skip(self, question, context), fields(model = %self.inner.model))]
    async fn ask(&self, question: &str, context: &str) -> String {
        let prompt = build_prompt(question, context);
        match self.generate_with_retry(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => FALLBACK_NO_ANSWER.to_string(),
            Err(err) => {
                warn!(error = %err, "Chef API call failed");
                FALLBACK_ERROR.to_string()
            }
        }
    }
}

/// Combine the customer question and session context into one prompt.
fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "Siz \"Och Qolma\" platformasining professional oshpazi va mijozlarga \
         yordam beruvchi hamrohisiz. Javobni faqat o'zbek tilida, do'stona va \
         professional tarzda bering.\n\
         Foydalanuvchi ma'lumoti: {context}\n\
         Mijoz so'rovi: {question}"
    )
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first candidate's first non-empty part, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .map(|part| part.text)
            .find(|text| !text.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// API error response body.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}
