use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use color_eyre::Result;
use engine::{download, image_model::Model};

#[derive(clap::Parser)]
struct Arg {
    model: Model,
    key: String,
    prompt: String,

    /// Where to put the image, defaults to the working directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;
    let Arg {
        model,
        key,
        prompt,
        out_dir,
    } = Arg::parse();
    let imgmod = model.make(key);

    let image = imgmod.get_image(&prompt).await?;
    let path = download::save(&image, &out_dir, Utc::now())?;
    println!("Saved {} bytes to {}", image.data.len(), path.display());

    Ok(())
}
