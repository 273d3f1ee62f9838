use engine::image_model::Model;

use crate::context::Config;

/// Launch options, they override the saved config for this run only
#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// Google AI api key
    #[arg(short = 'k', long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    #[arg(short, long)]
    pub image_model: Option<Model>,
}

impl Cli {
    /// Without a saved config, an api key is enough to skip the welcome screen
    pub fn apply(self, config: Option<Config>) -> Option<Config> {
        let mut config = match (config, self.api_key) {
            (Some(mut cfg), Some(key)) => {
                cfg.api_key = key;
                cfg
            }
            (Some(cfg), None) => cfg,
            (None, Some(api_key)) => Config {
                api_key,
                ..Config::default()
            },
            (None, None) => return None,
        };

        if let Some(model) = self.image_model {
            config.image_model = model;
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(api_key: Option<&str>, image_model: Option<Model>) -> Cli {
        Cli {
            api_key: api_key.map(Into::into),
            image_model,
        }
    }

    #[test]
    fn nothing_to_apply() {
        assert!(cli(None, Some(Model::Imagen4Fast)).apply(None).is_none());
    }

    #[test]
    fn overrides_saved_config() {
        let saved = Config {
            api_key: "saved".into(),
            ..Config::default()
        };

        let cfg = cli(Some("flag"), Some(Model::Imagen4Ultra))
            .apply(Some(saved.clone()))
            .unwrap();
        assert_eq!(cfg.api_key, "flag");
        assert_eq!(cfg.image_model, Model::Imagen4Ultra);

        let cfg = cli(None, None).apply(Some(saved)).unwrap();
        assert_eq!(cfg.api_key, "saved");
        assert_eq!(cfg.image_model, Model::Imagen4);
    }

    #[test]
    fn key_alone_makes_a_config() {
        let cfg = cli(Some("flag"), None).apply(None).unwrap();
        assert_eq!(cfg.api_key, "flag");
        assert_eq!(cfg.text_model, engine::GEMINI_MODEL);
    }
}
