//! cashflow-domain
//!
//! Pure domain models (Period, Entry, MonthPlan, timeline rows and transfer
//! recommendations). No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod entry;
pub mod plan;
pub mod timeline;

pub use common::*;
pub use entry::*;
pub use plan::*;
pub use timeline::*;
