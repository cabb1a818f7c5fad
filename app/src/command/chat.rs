//! Interactive chat command.
//!
//! Builds the engine from configuration and either answers a single
//! message or runs the blocking prompt/response loop.

use parley_config::Config;
use parley_core::session::FAREWELL;
use parley_core::{ChatEngine, ChatSession};
use parley_nlp::HeuristicPipeline;
use tracing::info;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to respond to (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let rules = config.rule_set()?;

        let mut engine = ChatEngine::new(HeuristicPipeline::new(), rules);

        if let Some(message) = input.message {
            let reply = engine.respond(&message)?;
            println!("{reply}");
            return Ok(());
        }

        // An interrupt is a graceful exit, same farewell as an exit word.
        let bot_name = config.bot.name.clone();
        ctrlc::set_handler(move || {
            println!("\n{bot_name}: {FAREWELL}");
            std::process::exit(0);
        })?;

        let mut session = ChatSession::new(engine).with_name(config.bot.name);
        info!(session = %session.id(), "starting interactive chat");
        session.run_interactive()?;

        if let Some(entities) = session.engine().context().last_entities() {
            info!(remembered = entities.len(), "entities left in context");
        }
        info!(turns = session.turns(), "chat finished");
        Ok(())
    }
}
