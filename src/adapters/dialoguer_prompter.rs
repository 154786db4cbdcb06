use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Password};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

fn map_prompt_error(label: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            AppError::Prompt("cancelled".to_string())
        }
        err => AppError::Prompt(format!("Failed to read {}: {}", label, err)),
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(label).allow_empty(allow_empty);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        input.interact_text().map_err(|err| map_prompt_error(label, err))
    }

    fn ask_secret(&self, label: &str, allow_empty: bool) -> Result<String, AppError> {
        Password::new()
            .with_prompt(label)
            .allow_empty_password(allow_empty)
            .interact()
            .map_err(|err| map_prompt_error(label, err))
    }
}
