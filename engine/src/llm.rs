use std::pin::Pin;

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::LLMBox;

pub trait LLM {
    fn send_request<'a>(
        &'a self,
        req: Request,
    ) -> Pin<Box<dyn Future<Output = Result<OutputMessage>> + Send + 'a>>;

    fn clone(&self) -> LLMBox;
}

/// A single-turn request, sent as user messages
pub struct Request {
    pub messages: Vec<InputMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    pub content: String,
}

impl InputMessage {
    pub fn user(user_message: impl Into<String>) -> InputMessage {
        Self {
            content: user_message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputMessage {
    pub input_tokens: usize,
    pub output_tokens: usize,
    /// `None` when the model answered without a text part
    pub text: Option<String>,
}

mod gemini;
pub use gemini::Gemini;
