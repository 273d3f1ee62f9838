use std::pin::Pin;

use color_eyre::Result;
use log::debug;

use crate::{
    LLMBox,
    google_api::{self, BASE_URL},
};

use super::{LLM, OutputMessage, Request};

pub mod gemini_api;

#[derive(Clone)]
pub struct Gemini {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl Gemini {
    pub fn new(api_key: String, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            base_url: BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl LLM for Gemini {
    fn send_request<'a>(
        &'a self,
        req: Request,
    ) -> Pin<Box<dyn Future<Output = Result<OutputMessage>> + Send + 'a>> {
        let body = gemini_api::RequestBody::from(req);

        Box::pin(async move {
            let request = google_api::model_request(
                &self.client,
                &self.base_url,
                &self.model,
                "generateContent",
                &self.api_key,
            );
            let response: gemini_api::ResponseBody = google_api::post_json(request, &body).await?;
            debug!("generateContent response: {response:#?}");
            Ok(response.into_output())
        })
    }

    fn clone(&self) -> LLMBox {
        Box::new(Clone::clone(self))
    }
}
