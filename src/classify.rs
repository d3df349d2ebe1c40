use anyhow::{anyhow, bail, Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::report::Activity;

/// Capability seam for turning page text into activities, mockable in tests.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<Activity>>;
}

/// Classifier backed by an OpenAI chat-completion endpoint.
pub struct OpenAiClassifier {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClassifier {
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenAiClassifier {
            client: Client::with_config(config),
            model,
        }
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Extract main activities from the following text and categorize them as \
         'sports', 'leisure', or 'culture'. Format the output as a JSON list of \
         objects with 'name' and 'type'.\n\nText: {}\n\nJSON:",
        text
    )
}

/// Parse the model payload into activity records.
///
/// JSON mode forces an object at the top level, so the list usually arrives
/// wrapped, e.g. `{"activities": [...]}`. A bare list is accepted too.
fn parse_activities(payload: &str) -> Result<Vec<Activity>> {
    let value: Value =
        serde_json::from_str(payload).context("Model response is not valid JSON")?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(map) => map
            .into_iter()
            .map(|(_, v)| v)
            .find(Value::is_array)
            .ok_or_else(|| anyhow!("No activity list in model response"))?,
        other => bail!("Unexpected JSON payload: {}", other),
    };

    serde_json::from_value(list).context("Activity records have an unexpected shape")
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Activity>> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .response_format(ResponseFormat::JsonObject)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(build_prompt(text))
                .build()?
                .into()])
            .build()?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .context("Chat completion request failed")?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow!("No content in model response"))?;
        debug!("Model response: {}", content);

        parse_activities(&content)
    }
}

// ── Tests ──
