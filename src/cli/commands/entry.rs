use cashflow_core::{EntryDraft, EntryService};
use cashflow_domain::{Amounted, EntryKind, NamedEntity};

use crate::cli::output::{info, section, success, warning};
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::render;
use crate::cli::shell_context::ShellContext;
use crate::errors::CommandError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Add, remove or list income for the month",
            "income [list|add <name> <amount> [YYYY-MM-DD]|remove <id>]",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "Add, remove or list expenses for the month",
            "expense [list|add <name> <amount> [YYYY-MM-DD]|remove <id>]",
            cmd_expense,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_entry_command(context, EntryKind::Income, args)
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_entry_command(context, EntryKind::Expense, args)
}

fn run_entry_command(context: &mut ShellContext, kind: EntryKind, args: &[&str]) -> CommandResult {
    let Some(sub) = args.first() else {
        return list_entries(context, kind);
    };
    match sub.to_lowercase().as_str() {
        "list" | "ls" => list_entries(context, kind),
        "add" => add_entry(context, kind, &args[1..]),
        "remove" | "rm" => remove_entry(context, kind, &args[1..]),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown {} action `{}`; expected list, add or remove",
            kind, other
        ))),
    }
}

fn add_entry(context: &mut ShellContext, kind: EntryKind, args: &[&str]) -> CommandResult {
    let (name, amount, date) = match args {
        [name, amount] => (*name, *amount, context.period.first_day().to_string()),
        [name, amount, date] => (*name, *amount, date.to_string()),
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: {} add <name> <amount> [YYYY-MM-DD]",
                kind
            )))
        }
    };

    let draft = EntryDraft::new(name, amount, date);
    let id = EntryService::add(&mut context.plan, context.period, kind, &draft)?;
    context.persist_plan()?;

    let money = context.money();
    if let Some((_, entry)) = context.plan.find(id) {
        success(format!(
            "Added {} `{}` {} on {} [{}].",
            kind,
            entry.name(),
            money.amount(entry.amount()),
            entry.date(),
            id.short()
        ));
        if !context.period.contains(entry.date()) {
            warning(format!(
                "{} falls outside {}.",
                entry.date(),
                context.period.label()
            ));
        }
    }
    Ok(())
}

fn remove_entry(context: &mut ShellContext, kind: EntryKind, args: &[&str]) -> CommandResult {
    let [prefix] = args else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {} remove <id>",
            kind
        )));
    };

    let id = EntryService::resolve_prefix(&context.plan, prefix)?;
    if let Some((found, _)) = context.plan.find(id) {
        if found != kind {
            return Err(CommandError::InvalidArguments(format!(
                "`{}` is an {}; use `{} remove {}`",
                prefix, found, found, prefix
            )));
        }
    }

    let (_, entry) = EntryService::remove(&mut context.plan, id)?;
    context.persist_plan()?;
    success(format!("Removed {} `{}`.", kind, entry.name()));
    Ok(())
}

fn list_entries(context: &mut ShellContext, kind: EntryKind) -> CommandResult {
    let entries = context.plan.sorted_entries(kind);
    if entries.is_empty() {
        info(format!("No {} recorded for {}.", kind.plural(), context.period.label()));
        return Ok(());
    }
    section(format!("{} for {}", capitalize(kind.plural()), context.period.label()));
    for line in render::entry_lines(&entries, kind, &context.money()) {
        info(line);
    }
    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
