use clap::Parser;
use color_eyre::Result;
use engine::{GEMINI_MODEL, enhancer::PromptEnhancer, llm::Gemini};

#[derive(clap::Parser)]
pub struct Cli {
    api_key: String,
    prompt: String,

    #[arg(short, long, default_value = GEMINI_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    pretty_env_logger::init();
    color_eyre::install()?;

    let enhancer = PromptEnhancer::new(Box::new(Gemini::new(args.api_key, args.model)));
    match enhancer.enhance(&args.prompt).await? {
        Some(suggestion) => println!("{suggestion}"),
        None => println!("(no suggestion, prompt stays as it is)"),
    }
    Ok(())
}
