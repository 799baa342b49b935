//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use language_detect::ClassifierKind;

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "translate-bot")]
#[command(about = "English ⇄ Russian translation bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; --token overrides TELEGRAM_API_KEY).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Language classifier: script or statistical (overrides LANGUAGE_CLASSIFIER).
        #[arg(short, long)]
        classifier: Option<ClassifierKind>,
    },
    /// Print the detected language of TEXT (en, ru or unknown).
    Detect {
        text: String,
        #[arg(short, long)]
        classifier: Option<ClassifierKind>,
    },
    /// Translate TEXT once and print the reply the bot would send (needs DEEPL_API_KEY).
    Translate {
        text: String,
        #[arg(short, long)]
        classifier: Option<ClassifierKind>,
    },
}

/// Loads BotConfig from the environment; `token` overrides TELEGRAM_API_KEY, `classifier` overrides LANGUAGE_CLASSIFIER.
pub fn load_config(token: Option<String>, classifier: Option<ClassifierKind>) -> Result<BotConfig> {
    let mut config = BotConfig::load(token)?;
    if let Some(kind) = classifier {
        config.translation.classifier = kind;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "translate-bot",
            "run",
            "--token",
            "123:abc",
            "--classifier",
            "statistical",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { token, classifier } => {
                assert_eq!(token.as_deref(), Some("123:abc"));
                assert_eq!(classifier, Some(ClassifierKind::Statistical));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from(["translate-bot", "detect", "Привет мир"]).unwrap();
        match cli.command {
            Commands::Detect { text, classifier } => {
                assert_eq!(text, "Привет мир");
                assert!(classifier.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_classifier() {
        assert!(Cli::try_parse_from(["translate-bot", "run", "-c", "bayes"]).is_err());
    }
}
