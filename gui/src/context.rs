use std::path::PathBuf;

use color_eyre::Result;
use engine::{GEMINI_MODEL, download, image_model::Model, locale::Language};
use iced::Task;
use serde::{Deserialize, Serialize};

use crate::message::{ContextMessage, Message};

pub mod studio_context;
use studio_context::StudioContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default)]
    pub image_model: Model,

    #[serde(default)]
    pub language: Language,

    /// Falls back to the platform download dir
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_text_model() -> String {
    GEMINI_MODEL.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            text_model: default_text_model(),
            image_model: Model::default(),
            language: Language::default(),
            download_dir: None,
        }
    }
}

impl Config {
    pub fn download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => download::default_dir(),
        }
    }
}

pub struct Context {
    pub studio: Option<StudioContext>,
    pub config: Config,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Self {
            studio: None,
            config,
        }
    }

    /// (Re)builds the clients from the config. A running session keeps its prompt and image.
    pub fn apply_config(&mut self) {
        match &mut self.studio {
            Some(studio) => studio.reconfigure(&self.config),
            None => self.studio = Some(StudioContext::from_config(&self.config)),
        }
    }

    pub fn update(&mut self, message: ContextMessage) -> Result<Task<Message>> {
        if let Some(studio) = &mut self.studio {
            studio.update(message)
        } else {
            Ok(Task::none())
        }
    }
}
