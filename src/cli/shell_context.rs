use std::{env, path::PathBuf};

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

use cashflow_config::{Config, ConfigManager};
use cashflow_core::storage::PlanStorage;
use cashflow_domain::{MonthPlan, Period};
use cashflow_storage_json::JsonPlanStorage;

use crate::cli::commands;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandRegistry, CommandResult};
use crate::cli::render::MoneyFormat;
use crate::errors::{CliError, CommandError};

/// Overrides the config and plan location; used by tests and portable installs.
pub const HOME_ENV: &str = "CASHFLOW_PLANNER_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub storage: JsonPlanStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub period: Period,
    pub plan: MonthPlan,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let home = env::var_os(HOME_ENV).map(PathBuf::from);
        let config_manager = match &home {
            Some(base) => ConfigManager::with_base_dir(base.clone()),
            None => ConfigManager::default_location(),
        };
        let config = config_manager.load()?;
        let plans_dir = match (&config.data_root, &home) {
            (None, Some(base)) => base.join("plans"),
            _ => config.plans_dir(),
        };
        let storage = JsonPlanStorage::new(plans_dir)?;

        let period = config
            .last_period
            .unwrap_or_else(|| Period::containing(Local::now().date_naive()));
        let plan = storage.load_plan(period)?;
        debug!(%period, path = %config_manager.config_path().display(), "shell context ready");

        let context = Self {
            mode,
            registry,
            storage,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            period,
            plan,
        };
        context.apply_output_preferences();
        Ok(context)
    }

    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain: self.mode == CliMode::Script || self.config.plain_output,
            color: self.config.ui_color_enabled,
        });
    }

    pub fn prompt(&self) -> String {
        format!("cashflow [{}]> ", self.period)
    }

    pub fn money(&self) -> MoneyFormat {
        MoneyFormat::from_config(&self.config)
    }

    /// Writes the active plan under its period key.
    pub fn persist_plan(&self) -> CommandResult {
        self.storage.save_plan(self.period, &self.plan)?;
        Ok(())
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Loads `period` and remembers it as the last one used.
    pub fn switch_period(&mut self, period: Period) -> CommandResult {
        self.plan = self.storage.load_plan(period)?;
        self.period = period;
        self.config.last_period = Some(period);
        self.persist_config()
    }

    pub fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    /// Asks before a destructive action; script mode never prompts.
    pub fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if !self.can_prompt() {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if !self.can_prompt() {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }

    /// Runs the command registered under `name` (case-insensitive).
    pub(crate) fn dispatch(
        &mut self,
        name: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(&name.to_lowercase()) else {
            self.suggest_command(name);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::info(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}
