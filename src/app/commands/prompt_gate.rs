//! Interactive collection of settings missing from flags and environment.

use crate::app::commands::resolve::{PromptAnswers, Resolver};
use crate::domain::{AppError, Field, RuntimeMode, StagePlan};
use crate::ports::Prompter;

/// Question order: project first, so the name is only asked for when a project is created.
const PROMPT_ORDER: [Field; 5] =
    [Field::ProjectId, Field::DisplayName, Field::Dataset, Field::EditorToken, Field::DeployToken];

pub fn should_prompt(runtime: RuntimeMode) -> bool {
    runtime.allows_prompts()
}

/// Ask for every needed field that `primary` (flags and environment) does not resolve.
///
/// `fallback` (config file, login, defaults) supplies the default offered for each question.
pub fn collect(
    prompter: &(impl Prompter + ?Sized),
    primary: &Resolver<'_>,
    fallback: &Resolver<'_>,
    plan: &StagePlan,
) -> Result<PromptAnswers, AppError> {
    let mut answers = PromptAnswers::default();
    let mut project_known = primary.resolve(Field::ProjectId).is_some();

    for field in PROMPT_ORDER {
        if primary.resolve(field).is_some() || !plan.needs(field, project_known) {
            continue;
        }

        let known = fallback.resolve(field).map(|resolved| resolved.value);
        let answer = if field.is_secret() {
            let label = match known {
                Some(_) => {
                    format!("Sanity {} (leave blank to use your `sanity login` session)", field)
                }
                None => format!("Sanity {}", field),
            };
            prompter.ask_secret(&label, known.is_some())?
        } else if field == Field::ProjectId {
            prompter.ask_text(
                "Sanity project ID (leave blank to create a new project)",
                known.as_deref(),
                true,
            )?
        } else {
            prompter.ask_text(&format!("Sanity {}", field), known.as_deref(), false)?
        };

        let answer = answer.trim().to_string();
        if field == Field::ProjectId {
            project_known = !answer.is_empty();
        }
        answers.insert(field, answer);
    }

    Ok(answers)
}
