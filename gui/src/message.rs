use derive_more::{From, TryInto};
use engine::{image_model::Image, session::Attempt};

use crate::StringError;

#[derive(Debug, Clone, From)]
pub enum Message {
    Ui(UiMessage),
    Context(ContextMessage),
}

#[derive(Debug, Clone, From, TryInto)]
pub enum UiMessage {
    Studio(ui_messages::Studio),
    OptionsMenu(ui_messages::OptionsMenu),
    MessageDialog(ui_messages::MessageDialog),
}

/// Outcomes of the requests started by the studio
#[derive(Debug, Clone)]
pub enum ContextMessage {
    EnhancementFinished(Attempt, Result<Option<String>, StringError>),
    GenerationFinished(Attempt, Result<Image, StringError>),
}

pub mod ui_messages {
    use engine::{image_model::Model, locale::Language};
    use iced::widget::text_editor;

    #[derive(Debug, Clone)]
    pub enum Studio {
        EditPrompt(text_editor::Action),
        Enhance,
        Generate,
        Download,
        OpenOptions,
    }

    #[derive(Debug, Clone)]
    pub enum OptionsMenu {
        ApiKeyChanged(String),
        TextModelChanged(String),
        SelectImageModel(Model),
        SelectLanguage(Language),
        Ok,
    }

    #[derive(Debug, Clone)]
    pub enum MessageDialog {
        Confirm,
        EditAction(text_editor::Action),
    }
}
