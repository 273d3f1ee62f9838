use serde::{Deserialize, Serialize};

use crate::llm::{InputMessage, OutputMessage, Request};

#[derive(Debug, Serialize)]
pub struct RequestBody {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: usize,

    #[serde(default)]
    pub candidates_token_count: usize,
}

impl From<InputMessage> for Content {
    fn from(msg: InputMessage) -> Self {
        // the api assumes "user" when the role is omitted
        Self {
            role: None,
            parts: vec![Part {
                text: Some(msg.content),
            }],
        }
    }
}

impl From<Request> for RequestBody {
    fn from(req: Request) -> Self {
        RequestBody {
            contents: req.messages.into_iter().map(Content::from).collect(),
        }
    }
}

impl ResponseBody {
    /// `candidates[0].content.parts[0].text`, unless it is empty
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    pub fn into_output(self) -> OutputMessage {
        let usage = self.usage_metadata.as_ref();
        OutputMessage {
            input_tokens: usage.map(|u| u.prompt_token_count).unwrap_or_default(),
            output_tokens: usage.map(|u| u.candidates_token_count).unwrap_or_default(),
            text: self.first_text().map(str::to_string),
        }
    }
}
