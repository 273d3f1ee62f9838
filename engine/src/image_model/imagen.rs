use std::pin::Pin;

use color_eyre::Result;
use log::info;

use crate::{
    ImgModBox,
    google_api::{self, BASE_URL},
    image_model::{Image, ImageModel, Model},
};

pub mod imagen_api;

#[derive(Clone)]
pub struct Imagen {
    model: Model,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl Imagen {
    pub fn new(model: Model, api_key: String) -> Self {
        Self {
            model,
            api_key,
            base_url: BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl ImageModel for Imagen {
    fn get_image<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Image>> + Send + 'a>> {
        Box::pin(async move {
            let request = google_api::model_request(
                &self.client,
                &self.base_url,
                self.model.api_name(),
                "predict",
                &self.api_key,
            );
            let response: imagen_api::ResponseBody =
                google_api::post_json(request, &imagen_api::RequestBody::single(prompt)).await?;

            let image = response.into_image()?;
            info!(
                "{} returned {} bytes of {}",
                self.model,
                image.data.len(),
                image.mime_type
            );
            Ok(image)
        })
    }

    fn clone(&self) -> ImgModBox {
        Box::new(Clone::clone(self))
    }

    fn model(&self) -> Model {
        self.model
    }
}
