use cashflow_core::parse_amount;
use rust_decimal::Decimal;

use crate::cli::output::{info, section, success};
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::currency::{symbol_for, CurrencyCode};
use crate::errors::CommandError;

const KEYS: &str = "currency|locale|low_threshold|color|plain";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change display preferences",
        "config [show|set <currency|locale|low_threshold|color|plain> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show_config(context),
        ["set", key, value @ ..] if !value.is_empty() => {
            set_config_value(context, key, value.join(" ").trim())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config set <{}> <value>",
            KEYS
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    section("Configuration");
    info(format!("  currency      : {}", config.currency));
    info(format!("  locale        : {}", config.locale));
    info(format!(
        "  low_threshold : {}",
        context.money().amount(config.low_balance_threshold)
    ));
    info(format!("  color         : {}", on_off(config.ui_color_enabled)));
    info(format!("  plain         : {}", on_off(config.plain_output)));
    info(format!(
        "  config file   : {}",
        context.config_manager.config_path().display()
    ));
    info(format!(
        "  plans dir     : {}",
        context.storage.plans_dir().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key.to_lowercase().as_str() {
        "currency" => {
            let code = CurrencyCode::new(value);
            if code.as_str().len() != 3 || !code.as_str().chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CommandError::InvalidArguments(format!(
                    "`{}` is not a three-letter currency code",
                    value
                )));
            }
            context.config.currency = code.as_str().to_string();
        }
        "locale" => context.config.locale = value.to_string(),
        "low_threshold" => {
            let threshold = parse_amount(value)?;
            if threshold < Decimal::ZERO {
                return Err(CommandError::InvalidArguments(
                    "low_threshold must not be negative".into(),
                ));
            }
            context.config.low_balance_threshold = threshold;
        }
        "color" => context.config.ui_color_enabled = parse_switch(value)?,
        "plain" => context.config.plain_output = parse_switch(value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{}`; expected one of {}",
                other, KEYS
            )))
        }
    }
    context.persist_config()?;
    context.apply_output_preferences();
    success(format!(
        "Updated {}. Amounts now display as {}.",
        key,
        context.money().amount(Decimal::new(123450, 2))
    ));
    if key.eq_ignore_ascii_case("currency") {
        info(format!("Symbol: {}", symbol_for(&context.config.currency).trim()));
    }
    Ok(())
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not on/off",
            value
        ))),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
