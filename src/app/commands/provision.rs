//! The provisioning pipeline: prompt gate, resolution, config write, stages.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::config_writer;
use crate::app::commands::prompt_gate;
use crate::app::commands::resolve::{
    self, ConfigFileSource, DefaultSource, EnvironmentSource, FlagSource, GlobalLoginSource,
    PromptAnswers, Resolver,
};
use crate::app::commands::sequencer::{self, ProjectResolution, Stage};
use crate::domain::{AppError, CONFIG_FILE, ConfigField, ProjectConfig, RuntimeMode, StagePlan};
use crate::ports::{CommandRunner, Environment, ProjectApi, Prompter};

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOptions {
    pub studio_path: Option<PathBuf>,
    pub content_path: Option<PathBuf>,
    pub flags: FlagSource,
    pub package_manager: String,
    pub skip_install: bool,
    pub skip_deploy: bool,
}

impl Default for ProvisionOptions {
    fn default() -> Self {
        Self {
            studio_path: None,
            content_path: None,
            flags: FlagSource::default(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            skip_install: false,
            skip_deploy: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub project: ProjectResolution,
    pub dataset: String,
    pub config_path: PathBuf,
    pub changed_fields: Vec<ConfigField>,
    pub env_file_appended: bool,
    pub stages: Vec<Stage>,
}

pub fn execute<E, C, A, P>(
    ctx: &AppContext<E, C, A, P>,
    options: ProvisionOptions,
) -> Result<ProvisionOutcome, AppError>
where
    E: Environment,
    C: CommandRunner,
    A: ProjectApi,
    P: Prompter,
{
    let env = ctx.environment();
    let runtime = RuntimeMode::detect(env);

    let studio_dir = resolve::resolve_studio_dir(env, options.studio_path.as_deref())?;
    let content_path = resolve::resolve_content_path(env, options.content_path.as_deref())?;
    let plan = StagePlan {
        install: !options.skip_install,
        deploy: !options.skip_deploy,
        import: content_path.is_some(),
    };

    let config_path = studio_dir.join(CONFIG_FILE);
    let mut config = ProjectConfig::load(&config_path)?;

    let flags = &options.flags;
    let env_source = EnvironmentSource::new(env);
    let file_source = ConfigFileSource::new(&config);
    let login_source = GlobalLoginSource::read(env);

    let answers = if prompt_gate::should_prompt(runtime) {
        let primary = Resolver::new(vec![flags, &env_source]);
        let fallback = Resolver::new(vec![&file_source, &login_source, &DefaultSource]);
        prompt_gate::collect(ctx.prompter(), &primary, &fallback, &plan)?
    } else {
        PromptAnswers::default()
    };

    let resolver = Resolver::new(vec![
        flags,
        &env_source,
        &answers,
        &file_source,
        &login_source,
        &DefaultSource,
    ]);
    let mut settings = resolver.resolve_settings(studio_dir, content_path)?;
    settings.validate(&plan)?;
    // Fails on a missing stage credential before the first side effect.
    sequencer::command_stages(&settings, &plan, &options.package_manager)?;
    tracing::debug!(?settings, ?plan, "settings resolved");

    let project = sequencer::ensure_project(ctx.api(), &mut settings)?;
    if let ProjectResolution::Created(id) = &project {
        println!("✅ Created project {} with dataset '{}'", id, settings.dataset.value);
    }

    let changed_fields = config_writer::persist(&config_path, &mut config, &settings)?;
    let cwd = env.current_dir()?;
    let env_file_appended =
        config_writer::append_env_file(&cwd, &config_writer::env_lines(&settings), runtime)?;

    let stages = sequencer::command_stages(&settings, &plan, &options.package_manager)?;
    let mut completed = sequencer::run_stages(ctx.runner(), &stages)?;
    if matches!(project, ProjectResolution::Created(_)) {
        completed.insert(0, Stage::CreateProject);
    }

    Ok(ProvisionOutcome {
        project,
        dataset: settings.dataset.value,
        config_path,
        changed_fields,
        env_file_appended,
        stages: completed,
    })
}
