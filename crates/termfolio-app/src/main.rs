//! termfolio entry point.
//!
//! A portfolio presented as a terminal. Puts the tty in raw mode, feeds key
//! events to the session, drives its timers from the wall clock and prints
//! new log entries as they land. Tab completes, Up/Down walk history,
//! Ctrl+C quits.
//!
//! Config: first CLI argument, else `TERMFOLIO_CONFIG`, else built-in
//! defaults. Set `NO_COLOR` to disable colours.

mod input;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::event::{self, Event};
use crossterm::style::{Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};

use render::{LogView, Painter};
use termfolio_terminal::{InputResult, Session};
use termfolio_types::config::TermfolioConfig;
use termfolio_types::portfolio::load_projects;

/// Poll interval while no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal on drop.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), ResetColor, Print("\r\n"));
    }
}

fn main() -> Result<()> {
    // Raw mode shares the tty with stderr; keep the default quiet.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Resolve config from CLI arg, TERMFOLIO_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok())
        .map(PathBuf::from);
    let config = match config_path {
        Some(ref path) => TermfolioConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TermfolioConfig::default(),
    };

    let projects = match config.projects_path {
        Some(ref path) => load_projects(path)?,
        None => {
            log::warn!("No projects_path configured; the project grid will be empty");
            Vec::new()
        },
    };

    let color = std::env::var_os("NO_COLOR").is_none();
    let mut session = Session::from_config(&config, projects);
    let mut view = LogView::default();

    // Release profile aborts on panic, so the guard alone cannot restore
    // the tty.
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        prev_hook(info);
    }));

    enable_raw_mode().context("enabling raw mode")?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let mut last_tick = Instant::now();
    loop {
        let painter = Painter::new(session.theme(), color);
        draw(&mut stdout, &mut view, &session, &painter)?;

        let ready = event::poll(session.next_deadline().unwrap_or(IDLE_POLL))?;

        // Catch the session clock up before handling input, so a response
        // scheduled now is timed from now.
        let now = Instant::now();
        session.advance(now.duration_since(last_tick));
        last_tick = now;

        if ready
            && let Event::Key(key) = event::read()?
            && let Some(event) = input::map_key(key)
            && session.handle_input(&event) == InputResult::Quit
        {
            break;
        }
    }

    session.shutdown();
    drop(guard);
    log::info!("termfolio shut down cleanly");
    Ok(())
}

/// Print new log lines, then redraw the prompt line in place.
fn draw(
    out: &mut impl Write,
    view: &mut LogView,
    session: &Session,
    painter: &Painter,
) -> io::Result<()> {
    let frame = view.update(session, painter);

    if let Some(bg) = painter.background() {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if frame.reset {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for line in &frame.lines {
        queue!(out, Print(line), Print("\r\n"))?;
    }

    if session.is_busy() {
        queue!(out, Print(painter.loading()))?;
    } else {
        queue!(out, Print(painter.prompt_line(session)))?;
        if let Some(hint) = painter.suggestions(session.suggestions()) {
            queue!(out, Print(hint), MoveToColumn(render::cursor_column(session)))?;
        }
    }
    out.flush()
}
