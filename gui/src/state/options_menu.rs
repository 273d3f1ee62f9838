use color_eyre::{Result, eyre::ensure};
use iced::{
    Length,
    widget::{button, column, radio, row, space, text, text_input},
};
use strum::IntoEnumIterator;

use crate::{
    TryIntoExt, bold_text,
    context::Context,
    elem_list,
    message::{UiMessage, ui_messages::OptionsMenu as MyMessage},
    save_config,
    state::{State, StateCommand, Studio, cmd},
    top_level_container,
};
use engine::{image_model, locale::Language};

#[derive(Debug, Clone)]
pub struct OptionsMenu;

impl State for OptionsMenu {
    fn update(&mut self, event: UiMessage, ctx: &mut Context) -> Result<StateCommand> {
        let msg: MyMessage = event.try_into_ex()?;

        use MyMessage::*;
        match msg {
            ApiKeyChanged(val) => {
                ctx.config.api_key = val;
                cmd::none()
            }

            TextModelChanged(val) => {
                ctx.config.text_model = val;
                cmd::none()
            }

            SelectImageModel(model) => {
                ctx.config.image_model = model;
                cmd::none()
            }

            SelectLanguage(language) => {
                ctx.config.language = language;
                cmd::none()
            }

            Ok => {
                ensure!(!ctx.config.api_key.is_empty(), "Please enter an API key");
                ensure!(
                    !ctx.config.text_model.is_empty(),
                    "Please enter a text model"
                );
                save_config(&ctx.config)?;
                ctx.apply_config();
                cmd::transition(Studio)
            }
        }
    }

    fn view<'a>(&'a self, ctx: &'a Context) -> iced::Element<'a, UiMessage> {
        let items = elem_list![
            bold_text("Options").width(Length::Fill).center(),
            space().height(20),
            text("Google AI API Key"),
            text_input("AIza...", &ctx.config.api_key)
                .on_input(|s| MyMessage::ApiKeyChanged(s).into())
                .secure(true)
                .width(Length::Fill),
            space().height(20),
            text("Prompt enhancement model"),
            text_input(engine::GEMINI_MODEL, &ctx.config.text_model)
                .on_input(|s| MyMessage::TextModelChanged(s).into())
                .width(Length::Fill),
            space().height(20),
            text("Image Model"),
            column(image_model::Model::iter().map(|m| {
                radio(
                    format!("{m} ({})", m.api_name()),
                    m,
                    Some(ctx.config.image_model),
                    |m| MyMessage::SelectImageModel(m).into(),
                )
                .into()
            }))
            .spacing(10),
            space().height(20),
            text("Language"),
            column(Language::iter().map(|l| {
                radio(
                    l.to_string(),
                    l,
                    Some(ctx.config.language),
                    |l| MyMessage::SelectLanguage(l).into(),
                )
                .into()
            }))
            .spacing(10),
            space().height(30),
            row![button("Ok").on_press(MyMessage::Ok.into())],
        ];

        top_level_container(
            column(items)
                .spacing(12)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
    }

    fn clone(&self) -> Box<dyn State> {
        Box::new(Clone::clone(self))
    }
}
