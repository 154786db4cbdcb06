use crate::domain::AppError;

/// Port for interactive questions.
pub trait Prompter {
    /// Ask for a visible value. `default` is returned when the answer is left blank.
    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, AppError>;

    /// Ask for a hidden value such as a token.
    fn ask_secret(&self, label: &str, allow_empty: bool) -> Result<String, AppError>;
}
