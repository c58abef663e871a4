//! Interactive questions asked by the CLI flows.

use std::io;

use dialoguer::Input;

use crate::i18n::{Language, Message};
use crate::version::BumpLevel;

/// Synchronous question/answer collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask `prompt` and return the raw answer. An empty answer yields
    /// `default` when one is given.
    fn ask(&self, prompt: &str, default: Option<String>) -> io::Result<String>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl Prompter for DialoguerPrompt {
    fn ask(&self, prompt: &str, default: Option<String>) -> io::Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default).show_default(true);
        }
        input.interact_text().map_err(io::Error::other)
    }
}

/// What to do with a generated commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    Commit,
    Edit,
    Cancel,
}

/// Ask a yes/no question until the answer is one of the language's options.
pub fn confirm(prompter: &dyn Prompter, language: Language, question: &str) -> io::Result<bool> {
    loop {
        let answer = prompter.ask(question, None)?.trim().to_lowercase();

        if language.yes_answers().contains(&answer.as_str()) {
            return Ok(true);
        }
        if language.no_answers().contains(&answer.as_str()) {
            return Ok(false);
        }

        println!("{}", language.t(Message::InvalidResponse));
    }
}

/// Ask for a bump level by menu number, defaulting to `suggested`.
///
/// The caller prints the menu; this only reads the choice.
pub fn choose_level(
    prompter: &dyn Prompter,
    language: Language,
    suggested: BumpLevel,
) -> io::Result<BumpLevel> {
    let question = format!("{} (1/2/3)", language.t(Message::Choose));

    loop {
        let answer = prompter.ask(&question, Some(suggested.choice().to_string()))?;
        if answer.trim().is_empty() {
            return Ok(suggested);
        }
        if let Some(level) = BumpLevel::from_choice(&answer) {
            return Ok(level);
        }

        println!("{}", language.t(Message::InvalidOption));
    }
}

/// Offer to commit, edit or cancel; an empty answer commits.
pub fn choose_commit_action(prompter: &dyn Prompter, language: Language) -> io::Result<CommitAction> {
    let question = format!(
        "{} [1] {} [2] {} [3] {}\n{}",
        language.t(Message::Options),
        language.t(Message::OptionCommit),
        language.t(Message::OptionEdit),
        language.t(Message::OptionCancel),
        language.t(Message::Choice),
    );

    loop {
        let answer = prompter.ask(&question, Some("1".to_string()))?;
        match answer.trim() {
            "" | "1" => return Ok(CommitAction::Commit),
            "2" => return Ok(CommitAction::Edit),
            "3" => return Ok(CommitAction::Cancel),
            _ => println!("{}", language.t(Message::InvalidEnter)),
        }
    }
}
