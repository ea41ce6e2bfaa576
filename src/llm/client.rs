use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Chat-completions client. Constructed once per run; `generate` is invoked
/// once with a fixed cap on generated tokens.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

impl GroqClient {
    /// Available models on Groq
    pub const MODELS: &'static [(&'static str, &'static str)] = &[
        ("openai/gpt-oss-120b", "GPT-OSS 120B - Most powerful"),
        ("llama-3.3-70b-versatile", "Llama 3.3 70B - Best for complex tasks"),
        ("llama-3.1-8b-instant", "Llama 3.1 8B - Fast and efficient"),
        ("gemma2-9b-it", "Gemma 2 9B - Google's model"),
    ];

    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "llama-3.3-70b-versatile".to_string()),
        }
    }

    /// One bounded completion for the given prompt. The prompt already
    /// carries its own instructions, so it goes out as a single user message.
    pub async fn generate(&self, prompt: &str, max_new_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.2,
            max_tokens: max_new_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Groq")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Groq API error ({}): {}", status, text);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Groq response")?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("No response from Groq")
    }
}
