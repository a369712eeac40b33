//! Bot command definitions
//!
//! Slash commands registered with Telegram and recognized in text messages.

use teloxide::utils::command::BotCommands;
use crate::dialogue::Event;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "KomekBot commands:")]
pub enum BotCommand {
    #[command(description = "Start the bot and show the main menu")]
    Start(String),
    #[command(description = "Show the main menu")]
    Menu,
    #[command(description = "Show the main menu")]
    Help,
    #[command(description = "Cancel the current form")]
    Cancel,
    #[command(description = "Reset the conversation")]
    Reset,
}

impl BotCommand {
    /// Dialogue event the command stands for
    pub fn event(&self) -> Event {
        match self {
            BotCommand::Start(_) => Event::StartCommand,
            BotCommand::Menu | BotCommand::Help => Event::MenuCommand,
            BotCommand::Cancel | BotCommand::Reset => Event::ResetCommand,
        }
    }
}
