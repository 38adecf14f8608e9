//! Portfolio content commands: profile, projects, skills, contact.
//!
//! These only read the session's `Portfolio`; `profile` and `projects` are
//! registered twice under their aliases (`whoami`, `ls`).

use termfolio_types::error::Result;

use crate::interpreter::{Block, Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// profile / whoami
// ---------------------------------------------------------------------------

pub(crate) struct ProfileCmd {
    name: &'static str,
}

impl ProfileCmd {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Command for ProfileCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Show the profile card"
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn execute(&self, _line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Blocks(vec![Block::Profile(
            env.portfolio.profile.clone(),
        )]))
    }
}

// ---------------------------------------------------------------------------
// projects / ls
// ---------------------------------------------------------------------------

pub(crate) struct ProjectsCmd {
    name: &'static str,
}

impl ProjectsCmd {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Browse projects (select one to open it)"
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn execute(&self, _line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Blocks(vec![Block::ProjectGrid(
            env.portfolio.projects.clone(),
        )]))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

pub(crate) struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "List skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Blocks(vec![Block::Skills(
            env.portfolio.skills.clone(),
        )]))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

pub(crate) struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Show contact details"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Blocks(vec![Block::Contact(
            env.portfolio.contact.clone(),
        )]))
    }
}
