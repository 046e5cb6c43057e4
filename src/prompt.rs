//! Project name resolution
//!
//! The name comes from the command line when given; otherwise the operator
//! is asked once through a `Prompter`.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::models::ProjectName;

/// Message shown when asking for the project name
pub const PROJECT_NAME_PROMPT: &str = "project name?";

/// Source of interactive text input
pub trait Prompter {
    /// Ask a single question, returning the answer or `default` when accepted unchanged.
    fn input(&self, message: &str, default: &str) -> ScaffoldResult<String>;
}

/// Resolve the project name from the CLI argument or by prompting.
///
/// A non-empty `arg` is used as is and the prompter is not consulted.
/// Fails with `MissingProjectName` when the outcome is empty.
pub fn resolve_project_name(
    arg: Option<&str>,
    prompter: &dyn Prompter,
    default: &str,
) -> ScaffoldResult<ProjectName> {
    let name = match arg {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => prompter.input(PROJECT_NAME_PROMPT, default)?,
    };
    ProjectName::new(name)
}

/// Terminal prompter backed by `dialoguer`
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter {
    color: bool,
}

impl DialoguerPrompter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str, default: &str) -> ScaffoldResult<String> {
        if !std::io::stdin().is_terminal() {
            return Err(ScaffoldError::PromptAborted {
                reason: "stdin is not a terminal; pass the project name as an argument".to_string(),
            });
        }

        let colorful = ColorfulTheme::default();
        let theme: &dyn Theme = if self.color { &colorful } else { &SimpleTheme };

        Input::<String>::with_theme(theme)
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| ScaffoldError::PromptAborted {
                reason: e.to_string(),
            })
    }
}

/// Prompter that accepts every default without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn input(&self, _message: &str, default: &str) -> ScaffoldResult<String> {
        Ok(default.to_string())
    }
}
