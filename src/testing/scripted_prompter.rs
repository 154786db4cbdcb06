use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// A question as seen by the prompter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asked {
    pub label: String,
    pub default: Option<String>,
    pub secret: bool,
}

/// Answers questions from a queue. A blank scripted answer falls back to the default,
/// like a terminal prompt would.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<Asked>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.asked.borrow().iter().map(|asked| asked.label.clone()).collect()
    }

    fn next(&self, asked: Asked) -> Result<String, AppError> {
        let default = asked.default.clone();
        self.asked.borrow_mut().push(asked);
        let answer = self
            .answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Prompt("no scripted answer left".to_string()))?;
        Ok(match default {
            Some(default) if answer.is_empty() => default,
            _ => answer,
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(
        &self,
        label: &str,
        default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<String, AppError> {
        self.next(Asked {
            label: label.to_string(),
            default: default.map(str::to_string),
            secret: false,
        })
    }

    fn ask_secret(&self, label: &str, _allow_empty: bool) -> Result<String, AppError> {
        self.next(Asked { label: label.to_string(), default: None, secret: true })
    }
}
