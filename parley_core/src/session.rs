//! Interactive chat session over stdin/stdout.
//!
//! One blocking read per turn. Exit words and end-of-input terminate with
//! a farewell; any error raised while producing a response is reported and
//! the loop continues with the next prompt.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::TextPipeline;
use crate::engine::ChatEngine;

/// Display name used in all printed responses.
pub const BOT_NAME: &str = "NLP ChatBot";

/// Opening line printed when an interactive session starts.
pub const GREETING: &str = "Hello! I'm a chatbot with some NLP capabilities. Type 'bye' to exit.";

/// Farewell printed on any graceful termination.
pub const FAREWELL: &str = "Goodbye! Have a great day!";

const APOLOGY: &str = "Sorry, I encountered an error. Let's try again.";

/// Words that end the session, compared case-insensitively.
pub const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

/// Whether an input line is an exit word.
#[must_use]
pub fn is_exit_word(line: &str) -> bool {
    let trimmed = line.trim();
    EXIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w))
}

/// Outcome of feeding one input line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// An exit word was entered; the session is over.
    Farewell,
    /// A normal response.
    Reply(String),
    /// The turn failed; the session continues. Carries the error text.
    Recovered(String),
}

/// An interactive conversation bound to a chat engine.
pub struct ChatSession<P> {
    engine: ChatEngine<P>,
    name: String,
    id: Uuid,
    started_at: DateTime<Utc>,
    turns: usize,
}

impl<P: TextPipeline> ChatSession<P> {
    #[must_use]
    pub fn new(engine: ChatEngine<P>) -> Self {
        Self {
            engine,
            name: BOT_NAME.to_string(),
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            turns: 0,
        }
    }

    /// Override the display name used in printed responses.
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Turns completed so far, including recovered ones.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    #[must_use]
    pub const fn engine(&self) -> &ChatEngine<P> {
        &self.engine
    }

    /// Process one line of user input.
    ///
    /// Exit words end the session; everything else produces either a
    /// reply or a recovered error. Errors never escape a turn.
    pub fn handle_line(&mut self, line: &str) -> TurnOutcome {
        if is_exit_word(line) {
            let elapsed = Utc::now() - self.started_at;
            info!(
                session = %self.id,
                turns = self.turns,
                secs = elapsed.num_seconds(),
                "session ended by exit word"
            );
            return TurnOutcome::Farewell;
        }

        self.turns += 1;
        match self.engine.respond(line) {
            Ok(reply) => TurnOutcome::Reply(reply),
            Err(e) => {
                warn!(session = %self.id, error = %e, "turn failed, continuing");
                TurnOutcome::Recovered(e.to_string())
            }
        }
    }

    /// Run the blocking prompt/response loop until the user leaves.
    pub fn run_interactive(&mut self) -> std::io::Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.run(&mut stdin.lock(), &mut stdout)
    }

    /// Loop over an arbitrary line source and sink.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "{}: {GREETING}", self.name)?;
        info!(session = %self.id, "interactive session started");

        let mut line = String::new();
        loop {
            write!(output, "You: ")?;
            output.flush()?;

            line.clear();
            // End of input is treated like an exit word.
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "\n{}: {FAREWELL}", self.name)?;
                break;
            }

            match self.handle_line(line.trim_end_matches(['\r', '\n'])) {
                TurnOutcome::Farewell => {
                    writeln!(output, "{}: {FAREWELL}", self.name)?;
                    break;
                }
                TurnOutcome::Reply(reply) => {
                    writeln!(output, "{}: {reply}", self.name)?;
                }
                TurnOutcome::Recovered(error) => {
                    writeln!(output, "{}: {APOLOGY}", self.name)?;
                    writeln!(output, "Error: {error}")?;
                }
            }
        }

        Ok(())
    }
}
