use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question before a destructive overwrite.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Prompts on stdout and reads the answer from a line-based reader.
pub struct PromptConfirm<R> {
    reader: R,
}

impl PromptConfirm<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self { reader: io::stdin().lock() }
    }
}

impl<R: BufRead> PromptConfirm<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Confirm for PromptConfirm<R> {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        io::stdout().flush().ok();

        let mut answer = String::new();
        if let Err(e) = self.reader.read_line(&mut answer) {
            tracing::warn!("Failed to read confirmation: {}", e);
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
