//! Turns engine output into display text.

use cashflow_config::Config;
use cashflow_domain::{
    Amounted, BalanceStatus, CashFlowReport, Entry, EntryKind, Identifiable, NamedEntity,
    TimelineRow,
};
use rust_decimal::Decimal;

use crate::cli::table::{Alignment, Table, TableColumn};
use crate::currency::{
    format_currency_value, format_short_date, format_signed_change, CurrencyCode, LocaleConfig,
    NegativeStyle,
};

const DESCRIPTION_WIDTH: usize = 28;

/// Currency formatting backed by the active configuration.
#[derive(Debug, Clone)]
pub struct MoneyFormat {
    code: CurrencyCode,
    locale: LocaleConfig,
    pub low_balance_threshold: Decimal,
}

impl MoneyFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            code: CurrencyCode::new(config.currency.as_str()),
            locale: LocaleConfig::for_tag(&config.locale),
            low_balance_threshold: config.low_balance_threshold,
        }
    }

    pub fn amount(&self, value: Decimal) -> String {
        format_currency_value(value, &self.code, &self.locale, NegativeStyle::Sign)
    }

    pub fn change(&self, value: Decimal) -> String {
        format_signed_change(value, &self.code, &self.locale)
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A rendered line plus the balance status that should color it.
pub struct StyledLine {
    pub text: String,
    pub status: Option<BalanceStatus>,
}

pub fn timeline_lines(report: &CashFlowReport, money: &MoneyFormat) -> Vec<StyledLine> {
    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Description", Alignment::Left).with_max_width(DESCRIPTION_WIDTH),
        TableColumn::new("Change", Alignment::Right),
        TableColumn::new("Balance", Alignment::Right),
        TableColumn::new("", Alignment::Left),
    ]);
    let statuses: Vec<BalanceStatus> = report
        .timeline
        .iter()
        .map(|row| row.status(money.low_balance_threshold))
        .collect();
    for (row, status) in report.timeline.iter().zip(&statuses) {
        table.push_row(timeline_cells(row, *status, money));
    }

    let mut lines = table.render_lines().into_iter();
    let mut out: Vec<StyledLine> = lines
        .by_ref()
        .take(2)
        .map(|text| StyledLine { text, status: None })
        .collect();
    out.extend(lines.zip(statuses).map(|(text, status)| StyledLine {
        text,
        status: Some(status),
    }));
    out
}

fn timeline_cells(row: &TimelineRow, status: BalanceStatus, money: &MoneyFormat) -> Vec<String> {
    let change = if row.change.is_zero() {
        String::new()
    } else {
        money.change(row.change)
    };
    let flag = match status {
        BalanceStatus::Negative => "NEGATIVE",
        BalanceStatus::Low => "LOW",
        BalanceStatus::Healthy => "",
    };
    vec![
        format_short_date(row.date),
        row.description.clone(),
        change,
        money.amount(row.balance_after),
        flag.to_string(),
    ]
}

pub fn transfer_lines(report: &CashFlowReport, money: &MoneyFormat) -> Vec<String> {
    report
        .transfers
        .iter()
        .map(|transfer| {
            format!(
                "By {:<7} Before: {:<24} {}",
                format_short_date(transfer.date),
                transfer.before_event,
                money.amount(transfer.amount)
            )
        })
        .collect()
}

pub fn summary_lines(report: &CashFlowReport, money: &MoneyFormat) -> Vec<String> {
    let stats = &report.stats;
    let mut lines = vec![
        format!("Total income    : {}", money.amount(stats.total_income)),
        format!("Total expenses  : {}", money.amount(stats.total_expenses)),
        format!("End balance     : {}", money.amount(stats.end_balance)),
        format!("Transfer needed : {}", money.amount(stats.transfer_needed)),
    ];
    let itemized = report.itemized_transfer_total();
    if itemized != stats.transfer_needed {
        lines.push(format!(
            "Itemized transfers total {} (per-date top-ups differ from the worst-point figure)",
            money.amount(itemized)
        ));
    }
    lines
}

pub fn entry_lines(entries: &[&Entry], kind: EntryKind, money: &MoneyFormat) -> Vec<String> {
    let sign = match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    let mut table = Table::new(vec![
        TableColumn::new("Id", Alignment::Left),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Name", Alignment::Left).with_max_width(DESCRIPTION_WIDTH),
        TableColumn::new("Amount", Alignment::Right),
    ]);
    for entry in entries {
        table.push_row(vec![
            entry.id().short(),
            format_short_date(entry.date()),
            entry.name().to_string(),
            format!("{}{}", sign, money.amount(entry.amount())),
        ]);
    }
    table.render_lines()
}
