use colored::Colorize;

use cashflow_core::PlanService;
use cashflow_domain::{BalanceStatus, CashFlowReport};

use crate::cli::output::{current_preferences, info, section, success, warning};
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::render::{self, StyledLine};
use crate::cli::shell_context::ShellContext;

const EMPTY_HINT: &str = "Add income and expenses to see your cash flow timeline.";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "timeline",
            "Show the running balance after each event",
            "timeline",
            cmd_timeline,
        ),
        CommandEntry::new(
            "transfers",
            "Show recommended transfers from savings",
            "transfers",
            cmd_transfers,
        ),
        CommandEntry::new(
            "summary",
            "Show totals, end balance and transfer needed",
            "summary",
            cmd_summary,
        ),
    ]
}

fn current_report(context: &ShellContext) -> CashFlowReport {
    PlanService::report(&context.plan, context.period)
}

fn cmd_timeline(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = current_report(context);
    section(format!("Timeline for {}", context.period.label()));
    if !report.has_activity() {
        info(EMPTY_HINT);
        return Ok(());
    }
    for line in render::timeline_lines(&report, &context.money()) {
        info(paint(line));
    }
    Ok(())
}

fn paint(line: StyledLine) -> String {
    if current_preferences().plain {
        return line.text;
    }
    match line.status {
        Some(BalanceStatus::Negative) => line.text.red().to_string(),
        Some(BalanceStatus::Low) => line.text.yellow().to_string(),
        Some(BalanceStatus::Healthy) => line.text,
        None => line.text.bold().to_string(),
    }
}

fn cmd_transfers(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = current_report(context);
    section(format!("Recommended transfers for {}", context.period.label()));
    if report.transfers.is_empty() {
        success("No transfers needed; the balance never goes negative.");
        return Ok(());
    }
    for line in render::transfer_lines(&report, &context.money()) {
        info(line);
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = current_report(context);
    section(format!("Summary for {}", context.period.label()));
    for line in render::summary_lines(&report, &context.money()) {
        info(line);
    }
    if report.stats.transfer_needed.is_zero() {
        success("Balance stays at or above zero all month.");
    } else {
        warning("Balance goes negative this month; move money from savings.");
    }
    Ok(())
}
