use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::{ChatError, ChatService};
use crate::ai::gateway::gateway_from_config;
use crate::core::{AppConfig, BusinessCatalog, init_tracing};

const RESET_COMMAND: &str = "/reset";

pub async fn run(user_id: &str) -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let catalog = BusinessCatalog::load(config.business_profile_path.as_deref())?;
    let gateway = gateway_from_config(&config);
    let chat = ChatService::for_profile(&catalog.profile, gateway, config.chat_timeout)?;

    let mut rl = DefaultEditor::new()?;
    println!(
        "Chatting with {} as {}. Type {} to start over.",
        chat.business_name(),
        user_id,
        RESET_COMMAND
    );

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) if line.trim() == RESET_COMMAND => {
                chat.reset(Some(user_id)).await;
                println!("Chat reset successfully");
            }
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match chat.handle_chat(Some(user_id), &line).await {
                    Ok(reply) => println!("{}", reply.response),
                    // Blank lines are simply skipped
                    Err(ChatError::Validation(_)) => {}
                    Err(err) => println!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
