use color_eyre::Result;
use log::{debug, info};

use crate::{
    LLMBox,
    llm::{InputMessage, Request},
};

/// Asks a language model to rewrite an image prompt more descriptively.
pub struct PromptEnhancer {
    llm: LLMBox,
}

impl Clone for PromptEnhancer {
    fn clone(&self) -> Self {
        Self {
            llm: self.llm.clone(),
        }
    }
}

impl PromptEnhancer {
    pub fn new(llm: LLMBox) -> Self {
        Self { llm }
    }

    /// Returns the trimmed suggestion, or `None` if the model answered without
    /// text or with blank text. An empty prompt is never sent.
    pub async fn enhance(&self, prompt: &str) -> Result<Option<String>> {
        if prompt.is_empty() {
            return Ok(None);
        }

        let output = self.llm.send_request(enhancement_request(prompt)).await?;
        info!(
            "Enhancement done, tokens: input {}, output {}",
            output.input_tokens, output.output_tokens
        );

        let suggestion = output
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        if suggestion.is_none() {
            debug!("Enhancement response carried no text");
        }
        Ok(suggestion)
    }
}

pub fn enhancement_instruction(prompt: &str) -> String {
    format!(
        "Improve this image generation prompt to be more detailed and artistic: \"{prompt}\". \
         Return only the improved prompt text."
    )
}

fn enhancement_request(prompt: &str) -> Request {
    Request {
        messages: vec![InputMessage::user(enhancement_instruction(prompt))],
    }
}
