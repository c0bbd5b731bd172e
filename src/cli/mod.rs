use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::ai::chat::DEFAULT_USER_KEY;

pub mod chat;
pub mod prompt;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5001")]
        port: String,
    },
    /// Chat with the bot from the terminal
    Chat {
        /// Conversation to talk in
        #[arg(long, default_value = DEFAULT_USER_KEY)]
        user_id: String,
    },
    /// Print the system prompt generated from the business profile
    Prompt {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat { user_id }) => {
            chat::run(&user_id).await?;
        }
        Some(Command::Prompt {}) => {
            prompt::run()?;
        }
        None => {}
    }

    Ok(())
}
