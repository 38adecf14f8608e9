//! Terminal session: the REPL state machine around the command registry.
//!
//! A `Session` owns the output log, the input buffer, command history,
//! autocomplete suggestions, identity/theme settings and the project modal.
//! All mutation goes through the operations below so the session can be
//! driven headless in tests or by any front end.
//!
//! Responses are deferred by a cosmetic "processing" delay. Every deferred
//! log mutation goes through one [`TimerQueue`], and a new command is only
//! accepted once the previous one has landed, so two dispatches can never
//! interleave and a pending `clear` can never wipe a later response.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use termfolio_types::config::TermfolioConfig;
use termfolio_types::error::{Result, TermfolioError};
use termfolio_types::input::{HistoryDirection, InputEvent, Key};
use termfolio_types::portfolio::{Portfolio, ProjectRef};
use termfolio_types::theme::Theme;

use crate::interpreter::{Block, CommandOutput, CommandRegistry, Environment, Settings};
use crate::register_builtins;
use crate::timer::TimerQueue;

/// One entry of the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    /// The submitted line, shown after the prompt that was active when it
    /// was typed.
    Echo { prompt: String, command: String },
    /// A response block.
    Block(Block),
}

/// Outcome of [`Session::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The line was accepted and dispatched.
    Dispatched,
    /// Blank input; nothing dispatched.
    Empty,
    /// A previous command is still in flight, or the session is shut down.
    Ignored,
}

/// Which suggestion to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The autocomplete key: always the first suggestion.
    First,
    /// An explicitly selected suggestion.
    Named(String),
}

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Deferred log mutations.
#[derive(Debug)]
enum LogTask {
    /// Append an echo and its response atomically, then go idle.
    Append(Vec<OutputEntry>),
    /// Empty the log, then go idle.
    Wipe,
}

/// Timing knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub response: Duration,
    pub clear: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            response: Duration::from_millis(500),
            clear: Duration::from_millis(500),
        }
    }
}

/// A running terminal session.
pub struct Session {
    registry: CommandRegistry,
    portfolio: Portfolio,
    settings: Settings,
    delays: Delays,
    rng: StdRng,

    input: String,
    history: Vec<String>,
    history_cursor: Option<usize>,
    suggestions: Vec<String>,
    busy: bool,
    log: Vec<OutputEntry>,
    active_modal: Option<ProjectRef>,

    timers: TimerQueue<LogTask>,
    closed: bool,
}

impl Session {
    /// Create a session with the built-in command table and a seeded welcome
    /// entry.
    pub fn new(settings: Settings, portfolio: Portfolio, delays: Delays) -> Self {
        Self::with_rng(settings, portfolio, delays, StdRng::from_entropy())
    }

    /// Like [`Session::new`] with an explicit random source.
    pub fn with_rng(settings: Settings, portfolio: Portfolio, delays: Delays, rng: StdRng) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);

        let welcome = Block::Welcome {
            title: format!("Welcome to {}'s Portfolio Terminal!", portfolio.profile.name),
            hint: "Type help to explore available commands.".to_string(),
            tip: "Tip: Use Tab for autocomplete.".to_string(),
        };
        log::info!(
            "Session started as {} with {} projects",
            settings.prompt(),
            portfolio.projects.len()
        );

        Self {
            registry,
            portfolio,
            settings,
            delays,
            rng,
            input: String::new(),
            history: Vec::new(),
            history_cursor: None,
            suggestions: Vec::new(),
            busy: false,
            log: vec![OutputEntry::Block(welcome)],
            active_modal: None,
            timers: TimerQueue::new(),
            closed: false,
        }
    }

    /// Build a session from a loaded config and project list.
    pub fn from_config(config: &TermfolioConfig, projects: Vec<ProjectRef>) -> Self {
        let settings = Settings {
            username: config.username.clone(),
            hostname: config.hostname.clone(),
            theme: config.theme,
        };
        let delays = Delays {
            response: config.response_delay(),
            clear: config.clear_delay(),
        };
        Self::new(settings, config.portfolio(projects), delays)
    }

    // -- Accessors --

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn username(&self) -> &str {
        &self.settings.username
    }

    pub fn hostname(&self) -> &str {
        &self.settings.hostname
    }

    /// The `user@host:~$` prompt for the current identity.
    pub fn prompt(&self) -> String {
        self.settings.prompt()
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn log(&self) -> &[OutputEntry] {
        &self.log
    }

    pub fn active_modal(&self) -> Option<&ProjectRef> {
        self.active_modal.as_ref()
    }

    pub fn projects(&self) -> &[ProjectRef] {
        &self.portfolio.projects
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    // -- Operations --

    /// Submit a line for dispatch.
    pub fn submit(&mut self, line: &str) -> SubmitStatus {
        if self.busy || self.closed {
            log::debug!("submit ignored (busy={}, closed={})", self.busy, self.closed);
            return SubmitStatus::Ignored;
        }

        self.input.clear();
        self.suggestions.clear();

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return SubmitStatus::Empty;
        }

        self.history.push(trimmed.to_string());
        self.history_cursor = None;
        self.dispatch(trimmed.to_string());
        SubmitStatus::Dispatched
    }

    /// Resolve `line` now and schedule its log append.
    fn dispatch(&mut self, line: String) {
        self.busy = true;
        let prompt = self.settings.prompt();

        let result = {
            let mut env = Environment {
                settings: &mut self.settings,
                portfolio: &self.portfolio,
                rng: &mut self.rng,
            };
            self.registry.execute(&line, &mut env)
        };

        let response = match result {
            Ok(CommandOutput::Clear) => {
                self.log.push(OutputEntry::Block(Block::Clearing));
                self.timers.schedule(self.delays.clear, LogTask::Wipe);
                self.advance(Duration::ZERO);
                return;
            },
            Ok(CommandOutput::Blocks(blocks)) => blocks,
            Ok(CommandOutput::None) => Vec::new(),
            Err(e) => {
                log::warn!("command '{line}' failed: {e}");
                vec![Block::Error(format!("error: {e}"))]
            },
        };

        let mut entries = Vec::with_capacity(response.len() + 1);
        entries.push(OutputEntry::Echo {
            prompt,
            command: line,
        });
        entries.extend(response.into_iter().map(OutputEntry::Block));
        self.timers
            .schedule(self.delays.response, LogTask::Append(entries));
        self.advance(Duration::ZERO);
    }

    /// Step through history. `Up` moves towards older entries.
    ///
    /// The recalled line replaces the buffer, so suggestions follow it.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        let len = self.history.len();
        match direction {
            HistoryDirection::Up => {
                let next = self.history_cursor.map_or(0, |c| c + 1);
                if next < len {
                    self.history_cursor = Some(next);
                    self.input = self.history[len - 1 - next].clone();
                }
            },
            HistoryDirection::Down => match self.history_cursor {
                Some(c) if c > 0 => {
                    self.history_cursor = Some(c - 1);
                    self.input = self.history[len - c].clone();
                },
                _ => {
                    self.history_cursor = None;
                    self.input.clear();
                },
            },
        }
        self.suggestions = self.registry.completions(&self.input);
    }

    /// Replace the input buffer and recompute suggestions.
    pub fn update_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.suggestions = self.registry.completions(&self.input);
    }

    /// Put a suggestion into the input buffer and hide the list.
    pub fn accept_suggestion(&mut self, choice: Choice) {
        let chosen = match choice {
            Choice::First => match self.suggestions.first() {
                Some(s) => s.clone(),
                None => return,
            },
            Choice::Named(s) => s,
        };
        self.input = chosen;
        self.suggestions.clear();
    }

    /// Open the project modal for the project at `index`.
    pub fn select_project(&mut self, index: usize) -> Result<()> {
        let project = self.portfolio.projects.get(index).cloned().ok_or_else(|| {
            TermfolioError::Project(format!(
                "no project at index {index} ({} available)",
                self.portfolio.projects.len()
            ))
        })?;
        log::debug!("opening project modal: {}", project.name);
        self.active_modal = Some(project);
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Map one front-end input event onto the operations above.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResult {
        match event {
            InputEvent::Quit => return InputResult::Quit,
            InputEvent::TextInput(ch) => {
                let mut value = self.input.clone();
                value.push(*ch);
                self.update_input(value);
            },
            InputEvent::Backspace => {
                let mut value = self.input.clone();
                value.pop();
                self.update_input(value);
            },
            InputEvent::Key(Key::Enter) => {
                let line = self.input.clone();
                self.submit(&line);
            },
            InputEvent::Key(Key::Tab) => self.accept_suggestion(Choice::First),
            InputEvent::Key(key) => {
                if let Some(direction) = key.history_direction() {
                    self.navigate_history(direction);
                }
            },
            InputEvent::SuggestionClick(s) => self.accept_suggestion(Choice::Named(s.clone())),
            InputEvent::ProjectClick(index) => {
                if let Err(e) = self.select_project(*index) {
                    log::warn!("{e}");
                }
            },
            InputEvent::CloseModal => self.close_modal(),
        }
        InputResult::Continue
    }

    /// Move the session clock forward, applying every log mutation now due.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.closed {
            return;
        }
        for task in self.timers.advance(elapsed) {
            match task {
                LogTask::Append(entries) => self.log.extend(entries),
                LogTask::Wipe => {
                    log::debug!("clearing {} log entries", self.log.len());
                    self.log.clear();
                },
            }
            self.busy = false;
        }
    }

    /// Time until the next deferred mutation, if one is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Tear the session down, cancelling every pending timer.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        let cancelled = self.timers.cancel_all();
        self.closed = true;
        self.busy = false;
        log::info!("Session shut down ({cancelled} pending timers cancelled)");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
