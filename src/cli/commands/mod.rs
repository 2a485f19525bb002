pub mod config;
pub mod entry;
pub mod period;
pub mod report;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command in help order.
pub fn register_all(registry: &mut CommandRegistry) {
    for entry in system::definitions()
        .into_iter()
        .chain(period::definitions())
        .chain(entry::definitions())
        .chain(report::definitions())
        .chain(config::definitions())
    {
        registry.register(entry);
    }
}
