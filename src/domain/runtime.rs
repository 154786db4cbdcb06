use crate::ports::Environment;

/// Runtime flags read from `NODE_ENV`, `GATSBY_CLOUD`, and the attached terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeMode {
    pub production: bool,
    pub cloud: bool,
    /// Both stdin and stdout are terminals.
    pub interactive: bool,
}

impl RuntimeMode {
    pub fn detect(env: &(impl Environment + ?Sized)) -> Self {
        Self {
            production: env.var("NODE_ENV").as_deref() == Some("production"),
            cloud: env.var("GATSBY_CLOUD").as_deref() == Some("true"),
            interactive: env.is_interactive(),
        }
    }

    /// Missing values may be asked for interactively.
    pub fn allows_prompts(&self) -> bool {
        self.interactive && !self.production && !self.cloud
    }

    /// A local `.env` may receive newly produced values.
    pub fn mutates_env_file(&self) -> bool {
        !self.cloud
    }
}
