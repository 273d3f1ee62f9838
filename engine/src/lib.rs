use crate::{image_model::ImageModel, llm::LLM};

pub mod download;
pub mod enhancer;
pub mod google_api;
pub mod image_model;
pub mod llm;
pub mod locale;
pub mod session;

pub type LLMBox = Box<dyn LLM + Send + Sync>;
pub type ImgModBox = Box<dyn ImageModel + Send + Sync>;

pub const PRODUCT_NAME: &str = "ThurGPT";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
