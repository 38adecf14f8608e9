//! Built-in commands for the portfolio terminal.

use termfolio_types::error::Result;
use termfolio_types::theme::Theme;

use crate::fun_commands::{AsciiCmd, FortuneCmd};
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment, field};
use crate::portfolio_commands::{ContactCmd, ProfileCmd, ProjectsCmd, SkillsCmd};

/// Register all built-in commands into a registry.
///
/// Registration order is the command-table order shown by `help` and used
/// for suggestions.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ProfileCmd::new("profile")));
    reg.register(Box::new(ProjectsCmd::new("projects")));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(ThemeCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(SetIdentityCmd::Username));
    reg.register(Box::new(SetIdentityCmd::Hostname));
    reg.register(Box::new(ProjectsCmd::new("ls")));
    reg.register(Box::new(ProfileCmd::new("whoami")));
    reg.register(Box::new(FortuneCmd));
    reg.register(Box::new(AsciiCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _line: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The registry intercepts `help` so it can list itself; this entry
        // only holds the table position.
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal output"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _line: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Switch the colour theme"
    }
    fn usage(&self) -> &str {
        "theme <dark|light|solarized|dracula>"
    }
    fn matches(&self, line: &str) -> bool {
        line.split(' ').next() == Some("theme")
    }
    fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        match field(line, 1).and_then(|name| name.parse::<Theme>().ok()) {
            Some(theme) => {
                log::info!("theme: {} -> {theme}", env.settings.theme);
                env.settings.theme = theme;
                Ok(CommandOutput::text(format!("Theme switched to {theme}.")))
            },
            None => Ok(CommandOutput::text(format!(
                "Available themes: {}",
                Theme::listing()
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// set username / set hostname
// ---------------------------------------------------------------------------

enum SetIdentityCmd {
    Username,
    Hostname,
}

impl SetIdentityCmd {
    fn target(&self) -> &'static str {
        match self {
            SetIdentityCmd::Username => "username",
            SetIdentityCmd::Hostname => "hostname",
        }
    }
}

impl Command for SetIdentityCmd {
    fn name(&self) -> &str {
        match self {
            SetIdentityCmd::Username => "set username",
            SetIdentityCmd::Hostname => "set hostname",
        }
    }
    fn description(&self) -> &str {
        match self {
            SetIdentityCmd::Username => "Change the prompt username",
            SetIdentityCmd::Hostname => "Change the prompt hostname",
        }
    }
    fn usage(&self) -> &str {
        match self {
            SetIdentityCmd::Username => "set username <new_username>",
            SetIdentityCmd::Hostname => "set hostname <new_hostname>",
        }
    }
    /// Prefix match, so `set usernamebob` lands here and gets the usage line.
    fn matches(&self, line: &str) -> bool {
        line.starts_with(self.name())
    }
    fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(value) = field(line, 2) else {
            return Ok(CommandOutput::text(format!("Usage: {}", self.usage())));
        };
        let slot = match self {
            SetIdentityCmd::Username => &mut env.settings.username,
            SetIdentityCmd::Hostname => &mut env.settings.hostname,
        };
        log::info!("{}: {slot} -> {value}", self.target());
        *slot = value.to_string();

        let label = match self {
            SetIdentityCmd::Username => "Username",
            SetIdentityCmd::Hostname => "Hostname",
        };
        Ok(CommandOutput::text(format!("{label} updated to {value}.")))
    }
}
