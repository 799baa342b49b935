//! translate-bot binary: run the Telegram bot, or classify/translate a single text from the shell.

use anyhow::Result;
use clap::Parser;
use translate_bot::{detect_once, load_config, run_bot, translate_once, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, classifier } => {
            let config = load_config(token, classifier)?;
            run_bot(config).await
        }
        Commands::Detect { text, classifier } => {
            let tag = detect_once(&text, classifier).await?;
            println!("{}", tag);
            Ok(())
        }
        Commands::Translate { text, classifier } => {
            let reply = translate_once(&text, classifier).await?;
            println!("{}", reply);
            Ok(())
        }
    }
}
