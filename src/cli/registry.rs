use std::collections::HashMap;

use crate::cli::shell_context::ShellContext;
use crate::errors::CommandError;

pub type CommandResult = Result<(), CommandError>;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Command table kept in registration order for help output.
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    /// Closest registered name within a small edit distance.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_ascii_lowercase();
        self.order
            .iter()
            .map(|name| (strsim::levenshtein(name, &needle), *name))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut ShellContext, _: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn registry_preserves_order_and_suggests_names() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("timeline", "", "", noop));
        registry.register(CommandEntry::new("transfers", "", "", noop));
        registry.register(CommandEntry::new("timeline", "dup", "", noop));

        let names: Vec<&str> = registry.list().iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["timeline", "transfers"]);
        assert_eq!(registry.get("timeline").map(|e| e.description), Some("dup"));
        assert_eq!(registry.suggest("timelin"), Some("timeline"));
        assert_eq!(registry.suggest("trnsfers"), Some("transfers"));
        assert_eq!(registry.suggest("completely-different"), None);
    }
}
