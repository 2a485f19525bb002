//! cashflow-core
//!
//! The ledger engine plus the boundary services around it.
//! Depends on cashflow-domain. No CLI or terminal I/O; `fs` only offers the
//! atomic write used by the persistence crates.

pub mod entry_service;
pub mod error;
pub mod fs;
pub mod ledger_engine;
pub mod plan_service;
pub mod storage;

pub use entry_service::*;
pub use error::CoreError;
pub use ledger_engine::*;
pub use plan_service::*;
