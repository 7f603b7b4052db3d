use crate::abstract_trait::ConfirmationGate;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Prompts on stdout and reads a `y`/`yes` answer from stdin. Anything else,
/// including a read error or EOF, counts as a refusal.
#[derive(Debug, Clone, Default)]
pub struct StdinConfirmation;

impl StdinConfirmation {
    fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> bool {
        if let Err(e) = write!(output, "{prompt} [y/N] ").and_then(|_| output.flush()) {
            warn!("Failed to write confirmation prompt: {e}");
            return false;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!("Failed to read confirmation answer: {e}");
                false
            }
        }
    }
}

impl ConfirmationGate for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::ask(prompt, &mut stdin.lock(), &mut stdout.lock())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmationGate for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
