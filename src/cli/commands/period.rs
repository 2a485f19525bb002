use std::str::FromStr;

use cashflow_core::{storage::PlanStorage, CoreError, PlanService};
use cashflow_domain::Period;

use crate::cli::output::{info, section, success, warning};
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Show or change the planned month",
            "period [YYYY-MM|next|prev]",
            cmd_period,
        ),
        CommandEntry::new(
            "periods",
            "List months that have a saved plan",
            "periods",
            cmd_periods,
        ),
        CommandEntry::new(
            "balance",
            "Show or set the starting balance for the month",
            "balance [amount]",
            cmd_balance,
        ),
        CommandEntry::new(
            "clear",
            "Remove every entry and reset the starting balance",
            "clear",
            cmd_clear,
        ),
    ]
}

fn cmd_period(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        info(format!(
            "Planning {} ({}).",
            context.period.label(),
            context.period
        ));
        return Ok(());
    };

    let target = match raw.to_lowercase().as_str() {
        "next" => context.period.next(),
        "prev" | "previous" => context.period.previous(),
        other => Period::from_str(other).map_err(|_| CoreError::InvalidPeriod(other.to_string()))?,
    };
    context.switch_period(target)?;
    success(format!("Now planning {}.", target.label()));
    Ok(())
}

fn cmd_periods(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let periods = context.storage.list_periods()?;
    if periods.is_empty() {
        info("No saved plans yet.");
        return Ok(());
    }
    section("Saved plans");
    for period in periods {
        let marker = if period == context.period { "*" } else { " " };
        info(format!("{} {}  {}", marker, period, period.label()));
    }
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let money = context.money();
    if args.is_empty() {
        info(format!(
            "Starting balance: {}",
            money.amount(context.plan.starting_balance)
        ));
        return Ok(());
    }

    let value = PlanService::set_starting_balance(&mut context.plan, &args.join(""))?;
    context.persist_plan()?;
    success(format!("Starting balance set to {}.", money.amount(value)));
    if value.is_sign_negative() && !value.is_zero() {
        warning("The month starts overdrawn.");
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let prompt = format!("Clear all data for {}?", context.period.label());
    if !context.confirm(&prompt)? {
        info("Operation cancelled.");
        return Ok(());
    }
    PlanService::clear(&mut context.plan);
    context.persist_plan()?;
    success(format!("Cleared {}.", context.period.label()));
    Ok(())
}
