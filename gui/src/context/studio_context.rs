use std::path::{Path, PathBuf};

use color_eyre::{Report, Result};
use engine::{
    ImgModBox, enhancer::PromptEnhancer, image_model::Image, llm::Gemini, locale::Language,
    session::Session,
};
use iced::{
    Task,
    widget::{image::Handle as ImgHandle, text_editor},
};

use crate::{
    StringError,
    context::Config,
    message::{ContextMessage, Message},
};

/// Connects the session to the editor widget, the clients and the rendered image
pub struct StudioContext {
    pub session: Session,
    pub prompt_editor: text_editor::Content,
    pub image_handle: Option<ImgHandle>,
    enhancer: PromptEnhancer,
    imgmod: ImgModBox,
}

impl StudioContext {
    pub fn new(enhancer: PromptEnhancer, imgmod: ImgModBox, language: Language) -> Self {
        Self {
            session: Session::new(language),
            prompt_editor: text_editor::Content::default(),
            image_handle: None,
            enhancer,
            imgmod,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let (enhancer, imgmod) = clients(cfg);
        Self::new(enhancer, imgmod, cfg.language)
    }

    pub fn reconfigure(&mut self, cfg: &Config) {
        (self.enhancer, self.imgmod) = clients(cfg);
        self.session.set_language(cfg.language);
    }

    pub fn edit_prompt(&mut self, action: text_editor::Action) {
        self.prompt_editor.perform(action);
        self.session.edit_prompt(editor_text(&self.prompt_editor));
    }

    pub fn enhance(&mut self) -> Task<Message> {
        let Some((attempt, prompt)) = self.session.begin_enhance() else {
            return Task::none();
        };
        let enhancer = self.enhancer.clone();

        Task::perform(
            async move { enhancer.enhance(&prompt).await.map_err(StringError::from) },
            move |res| ContextMessage::EnhancementFinished(attempt, res).into(),
        )
    }

    pub fn generate(&mut self) -> Task<Message> {
        let Some((attempt, prompt)) = self.session.begin_generate() else {
            return Task::none();
        };
        self.image_handle = None;
        let imgmod = self.imgmod.clone();

        Task::perform(
            async move { imgmod.get_image(&prompt).await.map_err(StringError::from) },
            move |res| ContextMessage::GenerationFinished(attempt, res).into(),
        )
    }

    pub fn download(&self, dir: &Path) -> Result<Option<PathBuf>> {
        self.session.download(dir)
    }

    pub fn update(&mut self, message: ContextMessage) -> Result<Task<Message>> {
        use ContextMessage::*;
        match message {
            EnhancementFinished(attempt, res) => {
                if self.session.finish_enhance(attempt, res.map_err(Report::new)) {
                    self.prompt_editor = text_editor::Content::with_text(self.session.prompt());
                }
            }
            GenerationFinished(attempt, res) => {
                if self.session.finish_generate(attempt, res.map_err(Report::new)) {
                    self.image_handle = self.session.result().map(image_handle);
                }
            }
        }
        Ok(Task::none())
    }
}

fn clients(cfg: &Config) -> (PromptEnhancer, ImgModBox) {
    let llm = Gemini::new(cfg.api_key.clone(), cfg.text_model.clone());
    (
        PromptEnhancer::new(Box::new(llm)),
        cfg.image_model.make(cfg.api_key.clone()),
    )
}

fn image_handle(image: &Image) -> ImgHandle {
    ImgHandle::from_bytes(image.data.clone())
}

/// The editor may end its text with a terminator of its own, which an empty
/// editor reveals. Only that is dropped, line breaks the user typed are kept.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    let terminator = text_editor::Content::<iced::Renderer>::new().text();
    if !terminator.is_empty() && text.ends_with(&terminator) {
        text.truncate(text.len() - terminator.len());
    }
    text
}
