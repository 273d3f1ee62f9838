use clap::Parser;
use color_eyre::Result;
use thurgpt::{APP_NAME, Gui, cli::Cli, load_config};

pub fn main() -> Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;
    let cfg = Cli::parse().apply(load_config()?);
    iced::application(move || Gui::new(cfg.clone()), Gui::update, Gui::view)
        .title(APP_NAME)
        .run()?;
    Ok(())
}
