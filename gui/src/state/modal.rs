use color_eyre::Result;
use iced::{
    Border, Color, Element, Length,
    widget::{
        button, column, container, scrollable, space, stack, text_editor, text_editor::Action,
    },
};

use crate::{
    State, TryIntoExt, bold_text,
    context::Context,
    message::{UiMessage, ui_messages::MessageDialog as MyMessage},
    state::{StateCommand, cmd},
};

/// A titled, read-only message shown on top of the state it was opened from.
/// The text stays selectable so errors can be copied.
#[derive(Debug)]
pub struct Modal {
    parent: Box<dyn State>,
    title: String,
    editor_content: text_editor::Content,
}

impl Modal {
    pub fn message(
        parent: Box<dyn State>,
        title: impl Into<String>,
        message: impl AsRef<str>,
    ) -> Self {
        Self {
            parent,
            title: title.into(),
            editor_content: text_editor::Content::with_text(message.as_ref()),
        }
    }
}

impl State for Modal {
    fn update(&mut self, event: UiMessage, _ctx: &mut Context) -> Result<StateCommand> {
        use MyMessage::*;

        match event.try_into_ex()? {
            Confirm => Ok(StateCommand {
                task: None,
                transition: Some(self.parent.clone()),
            }),
            EditAction(a) => {
                if !matches!(a, Action::Edit(_)) {
                    self.editor_content.perform(a);
                }
                cmd::none()
            }
        }
    }

    fn view<'a>(&'a self, ctx: &'a Context) -> Element<'a, UiMessage> {
        let dialog = container(
            column![
                bold_text(&self.title).size(20),
                container(
                    scrollable(
                        text_editor(&self.editor_content)
                            .on_action(|a| MyMessage::EditAction(a).into())
                    )
                    .height(Length::Shrink)
                )
                .style(|_theme| container::background(Color::from_rgb(0.95, 0.95, 0.95)))
                .padding(20),
                container(button("Ok").on_press(MyMessage::Confirm.into()))
                    .align_right(Length::Fill)
            ]
            .spacing(10),
        )
        .height(Length::Shrink)
        .padding(20)
        .max_width(700)
        .max_height(700)
        .style(|_theme| container::background(Color::WHITE).border(Border::default().rounded(10)));

        stack![
            self.parent.view(ctx),
            dim_layer(),
            container(dialog).center(Length::Fill)
        ]
        .into()
    }

    fn clone(&self) -> Box<dyn State> {
        Box::new(Self {
            parent: self.parent.clone(),
            title: self.title.clone(),
            editor_content: self.editor_content.clone(),
        })
    }
}

fn dim_layer() -> Element<'static, UiMessage> {
    container(space())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| container::Style::default().background(Color::from_rgba(0., 0., 0., 0.1)))
        .into()
}

#[cfg(test)]
mod tests {
    use iced::widget::text_editor::Edit;

    use super::*;
    use crate::{
        context::Config,
        state::{StateExt, options_menu::OptionsMenu},
    };

    #[test]
    fn confirm_returns_to_parent() -> Result<()> {
        let mut ctx = Context::from_config(Config::default());
        let mut modal = Modal::message(OptionsMenu.boxed(), "Error", "boom");

        let cmd = modal.update(MyMessage::Confirm.into(), &mut ctx)?;

        let next = cmd.transition.expect("confirm should close the dialog");
        assert_eq!(format!("{next:?}"), "OptionsMenu");
        Ok(())
    }

    #[test]
    fn message_text_is_read_only() -> Result<()> {
        let mut ctx = Context::from_config(Config::default());
        let mut modal = Modal::message(OptionsMenu.boxed(), "Error", "boom");

        let cmd = modal.update(
            MyMessage::EditAction(Action::Edit(Edit::Insert('x'))).into(),
            &mut ctx,
        )?;

        assert!(cmd.transition.is_none());
        assert_eq!(modal.editor_content.text().trim_end(), "boom");
        Ok(())
    }
}
