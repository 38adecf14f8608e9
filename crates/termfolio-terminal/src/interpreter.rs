//! Command trait, registry, and dispatch logic.
//!
//! The registry is an ordered command table. Order is significant: it is the
//! order of the `help` listing and of autocomplete suggestions. Dispatch is a
//! plain match over the table; there is no quoting, piping or expansion.

use rand::rngs::StdRng;
use termfolio_types::error::Result;
use termfolio_types::portfolio::{ContactLink, Portfolio, ProfileCard, ProjectRef};
use termfolio_types::theme::Theme;

/// One row of the `help` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: String,
    pub description: String,
}

/// A render-agnostic unit of output content.
///
/// The interpreter decides what to show; front ends decide how it looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Greeting seeded into a fresh session.
    Welcome {
        title: String,
        hint: String,
        tip: String,
    },
    /// The command list.
    Help {
        entries: Vec<HelpEntry>,
        footer: String,
    },
    Profile(ProfileCard),
    /// Project cards; each one is selectable by its index.
    ProjectGrid(Vec<ProjectRef>),
    Skills(Vec<String>),
    Contact(Vec<ContactLink>),
    /// A plain line of text (confirmations, usage, fortunes).
    Text(String),
    /// An error line (unknown command, failed command).
    Error(String),
    /// A secondary hint shown under an error.
    Hint(String),
    /// Preformatted multi-line art.
    Ascii(String),
    /// Transient notice shown while the log is about to be cleared.
    Clearing,
}

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Response blocks to append after the echoed command line.
    Blocks(Vec<Block>),
    /// Command produced no visible output besides its echo.
    None,
    /// Signal to clear the output log.
    Clear,
}

impl CommandOutput {
    fn single(block: Block) -> Self {
        CommandOutput::Blocks(vec![block])
    }

    /// Shorthand for a single text line.
    pub fn text(line: impl Into<String>) -> Self {
        Self::single(Block::Text(line.into()))
    }
}

/// Settings the `set` and `theme` commands may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub username: String,
    pub hostname: String,
    pub theme: Theme,
}

impl Settings {
    /// The `user@host:~$` prompt.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.username, self.hostname)
    }
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// Identity and theme, mutated by `set` / `theme`.
    pub settings: &'a mut Settings,
    /// Read-only portfolio content.
    pub portfolio: &'a Portfolio,
    /// Random source for `fortune`.
    pub rng: &'a mut StdRng,
}

/// A single executable command.
pub trait Command {
    /// The command-table key (what the user types, possibly two words).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "set username <name>").
    fn usage(&self) -> &str;

    /// Whether this command handles `line` (already trimmed).
    ///
    /// The default is an exact, case-sensitive match on the whole line.
    fn matches(&self, line: &str) -> bool {
        line == self.name()
    }

    /// Execute the command for the full input line.
    fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Split a line on single spaces, the way the prompt's parameters are read.
///
/// Consecutive spaces yield empty fields, so `set username  bob` has an empty
/// third field and is treated as a missing argument.
pub fn field(line: &str, index: usize) -> Option<&str> {
    line.split(' ').nth(index).filter(|s| !s.is_empty())
}

/// Text of the hint shown under an unknown-command error.
pub const HELP_HINT: &str = "Type help to see the list of available commands.";

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command at the end of the table. Replaces any existing
    /// command with the same name in place, keeping its position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.commands.iter().position(|c| c.name() == cmd.name()) {
            Some(idx) => self.commands[idx] = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// Command-table keys in table order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Whether `token` is exactly one of the table keys.
    pub fn is_known(&self, token: &str) -> bool {
        self.commands.iter().any(|c| c.name() == token)
    }

    /// Resolve and execute a command line.
    ///
    /// Resolution:
    /// 1. `help` is intercepted and answered from the table itself.
    /// 2. The first command (in table order) whose matcher accepts the line.
    /// 3. A first token that is a table key but matched nothing is a silent
    ///    no-op (`help me`, `ls -la`).
    /// 4. Anything else is an unknown command.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }

        if trimmed == "help" {
            return Ok(self.execute_help());
        }

        if let Some(cmd) = self.commands.iter().find(|c| c.matches(trimmed)) {
            log::debug!("dispatch '{trimmed}' -> {}", cmd.name());
            return cmd.execute(trimmed, env);
        }

        let first = trimmed.split(' ').next().unwrap_or_default();
        if self.is_known(first) {
            log::debug!("'{trimmed}' names {first} but matches no form; echo only");
            return Ok(CommandOutput::None);
        }

        log::debug!("unknown command: {trimmed}");
        Ok(CommandOutput::Blocks(vec![
            Block::Error(format!("Unknown command: {trimmed}")),
            Block::Hint(HELP_HINT.to_string()),
        ]))
    }

    /// Built-in help with access to the registry.
    fn execute_help(&self) -> CommandOutput {
        let entries = self
            .list_commands()
            .into_iter()
            .map(|(name, description)| HelpEntry {
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect();
        CommandOutput::single(Block::Help {
            entries,
            footer: "Type the command in the format: $ command".to_string(),
        })
    }

    /// Return a list of (name, description) pairs in table order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// Return table keys starting with `partial`, in table order.
    ///
    /// Matching is case-sensitive. A blank `partial` has no completions.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        if partial.trim().is_empty() {
            return Vec::new();
        }
        self.names()
            .into_iter()
            .filter(|name| name.starts_with(partial))
            .map(str::to_string)
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn matches(&self, line: &str) -> bool {
            field(line, 0) == Some("echo")
        }
        fn execute(&self, line: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::text(line.strip_prefix("echo").unwrap_or("").trim()))
        }
    }

    struct PingCmd;
    impl Command for PingCmd {
        fn name(&self) -> &str {
            "ping"
        }
        fn description(&self) -> &str {
            "Reply pong"
        }
        fn usage(&self) -> &str {
            "ping"
        }
        fn execute(&self, _: &str, _: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::text("pong"))
        }
    }

    fn fixture() -> (Settings, Portfolio, StdRng) {
        let settings = Settings {
            username: "user".to_string(),
            hostname: "host".to_string(),
            theme: Theme::Dark,
        };
        (settings, Portfolio::default(), StdRng::seed_from_u64(7))
    }

    fn run(reg: &CommandRegistry, line: &str) -> CommandOutput {
        let (mut settings, portfolio, mut rng) = fixture();
        let mut env = Environment {
            settings: &mut settings,
            portfolio: &portfolio,
            rng: &mut rng,
        };
        reg.execute(line, &mut env).unwrap()
    }

    #[test]
    fn register_and_execute() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(run(&reg, "echo hello world"), CommandOutput::text("hello world"));
    }

    #[test]
    fn unknown_command_yields_error_and_hint() {
        let reg = CommandRegistry::new();
        match run(&reg, "nonexistent --flag") {
            CommandOutput::Blocks(blocks) => {
                assert_eq!(blocks.len(), 2);
                assert_eq!(
                    blocks[0],
                    Block::Error("Unknown command: nonexistent --flag".to_string())
                );
                assert_eq!(blocks[1], Block::Hint(HELP_HINT.to_string()));
            },
            other => panic!("expected blocks, got {other:?}"),
        }
    }

    #[test]
    fn empty_input() {
        let reg = CommandRegistry::new();
        assert_eq!(run(&reg, ""), CommandOutput::None);
        assert_eq!(run(&reg, "   "), CommandOutput::None);
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(PingCmd));
        assert_eq!(run(&reg, "ping"), CommandOutput::text("pong"));
        assert!(matches!(
            run(&reg, "PING"),
            CommandOutput::Blocks(ref b) if matches!(b[0], Block::Error(_))
        ));
    }

    #[test]
    fn known_token_without_match_is_silent() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(PingCmd));
        assert_eq!(run(&reg, "ping twice"), CommandOutput::None);
    }

    #[test]
    fn help_lists_table_in_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(PingCmd));
        reg.register(Box::new(EchoCmd));
        match run(&reg, "help") {
            CommandOutput::Blocks(blocks) => match &blocks[0] {
                Block::Help { entries, footer } => {
                    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
                    assert_eq!(names, vec!["ping", "echo"]);
                    assert_eq!(entries[1].description, "Print arguments");
                    assert!(footer.contains("$ command"));
                },
                other => panic!("expected help, got {other:?}"),
            },
            other => panic!("expected blocks, got {other:?}"),
        }
    }

    #[test]
    fn register_replaces_in_place() {
        struct Ping2;
        impl Command for Ping2 {
            fn name(&self) -> &str {
                "ping"
            }
            fn description(&self) -> &str {
                "v2"
            }
            fn usage(&self) -> &str {
                "ping"
            }
            fn execute(&self, _: &str, _: &mut Environment<'_>) -> Result<CommandOutput> {
                Ok(CommandOutput::text("pong2"))
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(PingCmd));
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(Ping2));
        assert_eq!(reg.names(), vec!["ping", "echo"]);
        assert_eq!(run(&reg, "ping"), CommandOutput::text("pong2"));
    }

    #[test]
    fn completions_prefix_in_table_order() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(PingCmd));
        reg.register(Box::new(EchoCmd));
        assert_eq!(reg.completions("p"), vec!["ping".to_string()]);
        assert!(reg.completions("xyz").is_empty());
        assert!(reg.completions("").is_empty());
        assert!(reg.completions("  ").is_empty());
    }

    #[test]
    fn field_splits_on_single_spaces() {
        assert_eq!(field("set username bob", 2), Some("bob"));
        assert_eq!(field("set username  bob", 2), None);
        assert_eq!(field("set username", 2), None);
        assert_eq!(field("theme dark extra", 1), Some("dark"));
    }

    #[test]
    fn prompt_format() {
        let (settings, _, _) = fixture();
        assert_eq!(settings.prompt(), "user@host:~$");
    }
}
