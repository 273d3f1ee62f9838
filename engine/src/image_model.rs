use std::pin::Pin;

use base64::{Engine as _, prelude::BASE64_STANDARD};
use color_eyre::{Result, eyre::WrapErr as _};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub mod imagen;
pub use imagen::Imagen;

use crate::ImgModBox;

pub const DEFAULT_MIME_TYPE: &str = "image/png";

#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    Default,
)]
pub enum Model {
    #[default]
    #[strum(to_string = "Imagen 4")]
    Imagen4,
    #[strum(to_string = "Imagen 4 Fast")]
    Imagen4Fast,
    #[strum(to_string = "Imagen 4 Ultra")]
    Imagen4Ultra,
}

impl Model {
    pub fn make(&self, key: String) -> ImgModBox {
        Box::new(Imagen::new(*self, key))
    }

    /// The model name as used in the endpoint path
    pub fn api_name(&self) -> &'static str {
        match self {
            Model::Imagen4 => "imagen-4.0-generate-001",
            Model::Imagen4Fast => "imagen-4.0-fast-generate-001",
            Model::Imagen4Ultra => "imagen-4.0-ultra-generate-001",
        }
    }
}

/// A decoded image as returned by an image model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl Image {
    pub fn from_base64(encoded: &str, mime_type: Option<&str>) -> Result<Self> {
        let data = BASE64_STANDARD
            .decode(encoded.trim())
            .wrap_err("image payload is not valid base64")?;

        Ok(Self {
            data,
            mime_type: mime_type.unwrap_or(DEFAULT_MIME_TYPE).to_string(),
        })
    }

    /// `data:<mime>;base64,<payload>`, directly usable as an image source
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64_STANDARD.encode(&self.data)
        )
    }
}

pub trait ImageModel {
    fn get_image<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Image>> + Send + 'a>>;

    fn clone(&self) -> ImgModBox;
    fn model(&self) -> Model;
}
