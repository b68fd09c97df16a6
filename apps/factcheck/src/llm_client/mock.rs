//! Recording `TextGenerator` stand-in for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator, SERVICE_NAME};

/// What the mock answers with on every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Api { status: u16, message: String },
    Timeout(String),
    RateLimited(u64),
    Empty,
}

pub struct MockGenerator {
    reply: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn service_name(&self) -> &str {
        SERVICE_NAME
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Api { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            MockReply::Timeout(message) => Err(LlmError::Timeout(message.clone())),
            MockReply::RateLimited(secs) => Err(LlmError::RateLimited {
                retry_after_secs: *secs,
            }),
            MockReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}
