use crate::{AnalysisError, Result as AnalysisErrorResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;

/// Conclusion phrase the prompt mandates for flagged images. Its presence in
/// a result is what the caller keys the nearby-care lookup on.
pub const HIGH_RISK_PHRASE: &str = "warrant a consultation";

/// Fixed two-part instruction prompt. The conclusion wording is a hard-coded
/// false-positive-suppression policy: unless an abnormality is unambiguous,
/// the model must default to the "no clear visual signs" conclusion.
const ANALYSIS_PROMPT: &str = "You are an expert AI assistant specializing in the visual analysis \
of foot imagery for informational purposes. Your task is to analyze the provided image and give \
a two-part response.\n\n\
1. **Visual Description:** Provide a neutral, factual description of the foot. Mention skin \
texture (e.g., smooth, dry, cracked), coloration, and any visible marks. Do not use medical \
terminology.\n\n\
2. **Conclusion:** Based strictly on the visual evidence, provide one of the following two \
conclusions:\n\
    * If there is a CLEAR and UNAMBIGUOUS open sore, wound, or significant area of dark \
discoloration indicative of tissue damage, state: \"Conclusion: The image shows visual signs \
that may warrant a consultation with a healthcare professional.\"\n\
    * If the skin appears intact and there are no clear open wounds or severe discoloration, \
state: \"Conclusion: The image does not show clear visual signs of a diabetic foot ulcer.\"\n\n\
Your primary directive is to avoid false positives. If you are not highly confident about an \
abnormality, you must default to the \"no clear visual signs\" conclusion. This is not a \
diagnostic tool.";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
enum Part {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "inlineData")]
    InlineData {
        #[serde(rename = "mimeType")]
        mime_type: String,
        data: String,
    },
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Free-text assessment returned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub text: String,
}

impl AnalysisResult {
    /// Whether the result carries the flagged conclusion, which obliges the
    /// caller to offer a nearby-care lookup.
    pub fn requires_consultation(&self) -> bool {
        self.text.to_lowercase().contains(HIGH_RISK_PHRASE)
    }
}

/// HTTP client for the vision-language inference endpoint
pub struct AnalysisClient {
    pub base_url: String,
    api_key: String,
    model: String,
    client: ReqwestClient,
}

impl AnalysisClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Inference URL (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - Key appended to every call
    /// * `model` - Model name (e.g., "gemini-2.0-flash")
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Analyze one image. One POST per call, no retries; every failure mode
    /// is surfaced verbatim to the caller.
    pub async fn analyze(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> AnalysisErrorResult<AnalysisResult> {
        let payload = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text(ANALYSIS_PROMPT.to_string()),
                    Part::InlineData {
                        mime_type: mime_type.to_string(),
                        data: BASE64.encode(image_bytes),
                    },
                ],
            }],
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!("Submitting {} byte image for analysis", image_bytes.len());

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(AnalysisError::AuthFailure {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: Value = response.json().await?;

        if let Some(reason) = body
            .pointer("/promptFeedback/blockReason")
            .and_then(|v| v.as_str())
        {
            return Err(AnalysisError::Blocked {
                reason: reason.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AnalysisError::MalformedResponse {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(AnalysisResult {
            text: text.to_string(),
        })
    }
}
