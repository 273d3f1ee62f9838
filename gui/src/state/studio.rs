use color_eyre::{Result, eyre::eyre};
use engine::session::OperationStatus;
use iced::{
    Color, Element, Length,
    alignment::{Horizontal, Vertical},
    padding,
    widget::{self, Column, button, column, container, row, space, text_editor},
};
use log::info;

use crate::{
    ElemHelper, TryIntoExt, bold_text,
    context::{Context, studio_context::StudioContext},
    message::{UiMessage, ui_messages::Studio as MyMessage},
    state::{State, StateCommand, cmd, options_menu::OptionsMenu},
};

/// The single page: prompt on the left, result on the right
#[derive(Debug, Clone)]
pub struct Studio;

impl State for Studio {
    fn update(&mut self, message: UiMessage, ctx: &mut Context) -> Result<StateCommand> {
        let studio = ctx
            .studio
            .as_mut()
            .ok_or(eyre!("No studio in context while being in studio state"))?;

        use MyMessage::*;
        match message.try_into_ex()? {
            EditPrompt(action) => {
                studio.edit_prompt(action);
                cmd::none()
            }
            Enhance => cmd::task(studio.enhance()),
            Generate => cmd::task(studio.generate()),
            Download => {
                if studio.session.result().is_some() {
                    let dir = ctx.config.download_dir()?;
                    if let Some(path) = studio.download(&dir)? {
                        info!("Downloaded {}", path.display());
                    }
                }
                cmd::none()
            }
            OpenOptions => cmd::transition(OptionsMenu),
        }
    }

    fn view<'a>(&'a self, ctx: &'a Context) -> Element<'a, UiMessage> {
        let studio = ctx
            .studio
            .as_ref()
            .expect("No studio in context while being in studio state");
        let texts = studio.session.language().texts();

        let body = row![
            mk_input_portion(studio).width(Length::FillPortion(1)),
            mk_result_portion(studio).width(Length::FillPortion(1)),
        ]
        .spacing(40);

        let main_col = column![
            mk_header(),
            widget::text(texts.tagline).size(18),
            widget::rule::horizontal(2),
            body,
        ]
        .align_x(Horizontal::Center)
        .max_width(1200)
        .spacing(20);

        container(main_col)
            .center_x(Length::Fill)
            .padding(padding::all(20).top(30))
            .into()
    }

    fn clone(&self) -> Box<dyn State> {
        Box::new(Clone::clone(self))
    }
}

fn mk_header() -> Element<'static, UiMessage> {
    row![
        widget::Space::new().width(Length::FillPortion(1)),
        bold_text(crate::APP_NAME).size(56),
        row![
            space::horizontal(),
            button("⚙").on_press(MyMessage::OpenOptions.into())
        ]
        .width(Length::FillPortion(1)),
    ]
    .align_y(Vertical::Center)
    .into()
}

fn mk_input_portion(studio: &StudioContext) -> Column<'_, UiMessage> {
    let session = &studio.session;
    let texts = session.language().texts();
    let status = session.status();
    let can_act = session.can_act();

    let enhance_label = if status == OperationStatus::Enhancing {
        format!("{}...", texts.enhance_button)
    } else {
        texts.enhance_button.to_string()
    };
    let generate_label = if status == OperationStatus::Generating {
        format!("{}...", texts.generate_button)
    } else {
        texts.generate_button.to_string()
    };

    let mut col = column![
        bold_text(texts.prompt_label),
        text_editor(&studio.prompt_editor)
            .placeholder(texts.prompt_placeholder)
            .on_action(|a| MyMessage::EditPrompt(a).into())
            .height(160),
        row![
            button(widget::text(enhance_label))
                .on_press_maybe(can_act.then(|| MyMessage::Enhance.into()))
                .width(Length::FillPortion(1)),
            button(widget::text(generate_label))
                .on_press_maybe(can_act.then(|| MyMessage::Generate.into()))
                .width(Length::FillPortion(2)),
        ]
        .spacing(10),
    ]
    .spacing(12);

    if let Some(err) = session.error() {
        col = col.push(
            container(widget::text(err).color(Color::from_rgb(0.75, 0.1, 0.1)))
                .padding(12)
                .style(|_theme| container::background(Color::from_rgba(0.9, 0.2, 0.2, 0.1))),
        );
    }

    col
}

fn mk_result_portion(studio: &StudioContext) -> Column<'_, UiMessage> {
    let texts = studio.session.language().texts();

    let content = match (&studio.image_handle, studio.session.status()) {
        (_, OperationStatus::Generating) => placeholder(texts.generating),
        (Some(handle), _) => column![
            container(widget::image(handle).height(Length::Fill).expand(true)).max_width(1024),
            row![
                space::horizontal(),
                button(texts.download_button).on_press(MyMessage::Download.into())
            ]
        ]
        .spacing(10)
        .into_elem(),
        (None, _) => placeholder(texts.result_placeholder),
    };

    column![content].align_x(Horizontal::Center)
}

fn placeholder(label: &str) -> Element<'_, UiMessage> {
    container(widget::text(label).color(Color::from_rgb(0.5, 0.5, 0.55)))
        .center(Length::Fill)
        .height(400)
        .style(|_theme| container::background(Color::from_rgb(0.95, 0.95, 0.95)))
        .into()
}
