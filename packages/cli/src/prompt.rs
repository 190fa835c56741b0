//! Interactive seed collection

use dialoguer::theme::ColorfulTheme;
use seedpass_common::{Error, ErrorKind, LoggingTransformer, Result};
use zeroize::Zeroizing;

/// Shown when a seed word is left blank
pub const BLANK_SEED_NOTICE: &str = "Please complete all seed words";

/// Source of seed words typed by the user
pub trait SeedPrompter {
    /// Read the seed at 1-based `position` out of `total`
    ///
    /// # Errors
    ///
    /// Fails when input cannot be read (closed terminal, EOF).
    fn prompt_seed(&mut self, position: usize, total: usize) -> Result<Zeroizing<String>>;

    /// Tell the user their last entry was rejected
    fn notify(&mut self, message: &str);
}

/// Hidden-input prompter on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl SeedPrompter for TerminalPrompter {
    fn prompt_seed(&mut self, position: usize, total: usize) -> Result<Zeroizing<String>> {
        dialoguer::Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Seed word {position} of {total}"))
            .allow_empty_password(true)
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| Error::with_source(ErrorKind::Io, e).context("reading seed word"))
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Ask for `count` seeds, trimming each and re-prompting on blanks
///
/// # Errors
///
/// Propagates prompter read failures.
pub fn collect_seeds<P: SeedPrompter + ?Sized>(
    prompter: &mut P,
    count: usize,
) -> Result<Zeroizing<Vec<String>>> {
    let mut seeds = Zeroizing::new(Vec::with_capacity(count));

    for position in 1..=count {
        loop {
            let entry = prompter.prompt_seed(position, count)?;
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                LoggingTransformer::log_rejected_input("blank seed word");
                prompter.notify(BLANK_SEED_NOTICE);
                continue;
            }
            seeds.push(trimmed.to_owned());
            break;
        }
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        answers: VecDeque<&'static str>,
        notices: usize,
    }

    impl SeedPrompter for Scripted {
        fn prompt_seed(&mut self, _position: usize, _total: usize) -> Result<Zeroizing<String>> {
            self.answers
                .pop_front()
                .map(|answer| Zeroizing::new(answer.to_owned()))
                .ok_or_else(|| Error::io().context("script exhausted"))
        }

        fn notify(&mut self, message: &str) {
            assert_eq!(message, BLANK_SEED_NOTICE);
            self.notices += 1;
        }
    }

    #[test]
    fn reprompts_blank_entries_and_trims() {
        let mut prompter = Scripted {
            answers: VecDeque::from(["  correct ", "", "   ", "horse"]),
            notices: 0,
        };
        let seeds = collect_seeds(&mut prompter, 2).expect("script has enough answers");
        assert_eq!(seeds.as_slice(), ["correct", "horse"]);
        assert_eq!(prompter.notices, 2);
    }

    #[test]
    fn read_failure_propagates() {
        let mut prompter = Scripted {
            answers: VecDeque::from(["correct"]),
            notices: 0,
        };
        let error = collect_seeds(&mut prompter, 2).expect_err("second read fails");
        assert_eq!(error.kind(), &ErrorKind::Io);
    }
}
