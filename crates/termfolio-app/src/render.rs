//! Text rendering of the session for a raw-mode terminal.
//!
//! `Painter` turns blocks into themed lines with crossterm styling. `LogView`
//! remembers how much of the log and which modal were already printed, so
//! each frame only carries what is new.

use crossterm::style::{Color as TermColor, Stylize};
use termfolio_terminal::{Block, OutputEntry, Session};
use termfolio_types::portfolio::ProjectRef;
use termfolio_types::theme::{Color, Palette, Theme};

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Maps content descriptors to terminal text, coloured by the active theme.
pub struct Painter {
    palette: Palette,
    color: bool,
}

impl Painter {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self {
            palette: theme.palette(),
            color,
        }
    }

    fn paint(&self, c: Color, text: &str) -> String {
        if self.color {
            text.with(term_color(c)).to_string()
        } else {
            text.to_string()
        }
    }

    /// Screen background for the active theme, when colour is on.
    pub fn background(&self) -> Option<TermColor> {
        self.color.then(|| term_color(self.palette.background))
    }

    /// Lines for one log entry.
    pub fn entry(&self, entry: &OutputEntry) -> Vec<String> {
        match entry {
            OutputEntry::Echo { prompt, command } => {
                vec![format!("{} {command}", self.paint(self.palette.prompt, prompt))]
            },
            OutputEntry::Block(block) => self.block(block),
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(self.palette.heading, text)
    }

    fn block(&self, block: &Block) -> Vec<String> {
        let p = &self.palette;
        match block {
            Block::Welcome { title, hint, tip } => vec![
                self.heading(title),
                self.paint(p.text, hint),
                self.paint(p.muted, tip),
            ],
            Block::Help { entries, footer } => {
                let mut out = vec![self.heading("Available commands:")];
                for e in entries {
                    out.push(format!(
                        "  {} {}",
                        self.paint(p.text, &format!("{:14}", e.name)),
                        self.paint(p.muted, &e.description)
                    ));
                }
                out.push(self.paint(p.text, footer));
                out
            },
            Block::Profile(card) => {
                let mut out = vec![
                    format!("{} ({})", self.paint(p.accent, &card.name), card.role),
                    self.paint(p.text, &card.bio),
                    self.paint(p.muted, &format!("avatar: {}", card.avatar)),
                ];
                for badge in &card.stat_badges {
                    out.push(self.paint(p.muted, &format!("stats: {badge}")));
                }
                out.push(self.heading("Tech Stack:"));
                let labels: Vec<&str> =
                    card.tech_stack.iter().map(|b| b.label.as_str()).collect();
                out.push(format!("  {}", labels.join(" | ")));
                out
            },
            Block::ProjectGrid(projects) => {
                let mut out = vec![self.heading("Projects:")];
                if projects.is_empty() {
                    out.push(self.paint(p.muted, "  (no projects)"));
                }
                for (i, project) in projects.iter().enumerate() {
                    out.push(format!(
                        "  [{}] {}",
                        i + 1,
                        self.paint(p.accent, &project.name)
                    ));
                    out.push(format!("      {}", project.description));
                }
                if !projects.is_empty() {
                    out.push(self.paint(
                        p.muted,
                        "  Press Alt+<n> to open a project, Esc to close it.",
                    ));
                }
                out
            },
            Block::Skills(skills) => {
                let mut out = vec![self.heading("Skills:")];
                out.extend(skills.iter().map(|s| format!("  * {s}")));
                out
            },
            Block::Contact(links) => {
                let mut out = vec![self.heading("Contact:")];
                for link in links {
                    let shown = match &link.href {
                        Some(href) => format!("{} <{}>", link.display, self.paint(p.accent, href)),
                        None => link.display.clone(),
                    };
                    out.push(format!("  * {}: {shown}", link.label));
                }
                out
            },
            Block::Text(line) => vec![self.paint(p.text, line)],
            Block::Error(line) => vec![self.paint(p.error, line)],
            Block::Hint(line) => vec![self.paint(p.muted, line)],
            Block::Ascii(art) => art.lines().map(|l| self.paint(p.text, l)).collect(),
            Block::Clearing => vec![self.paint(p.muted, "Clearing terminal...")],
        }
    }

    /// Boxed project modal.
    pub fn modal(&self, project: &ProjectRef) -> Vec<String> {
        let rule = "-".repeat(40);
        vec![
            rule.clone(),
            self.heading(&project.name),
            project.description.clone(),
            format!("View Repository: {}", self.paint(self.palette.accent, &project.repo)),
            rule,
        ]
    }

    /// The prompt with whatever is already in the input buffer.
    pub fn prompt_line(&self, session: &Session) -> String {
        format!(
            "{} {}",
            self.paint(self.palette.prompt, &session.prompt()),
            session.input()
        )
    }

    pub fn loading(&self) -> String {
        self.paint(self.palette.muted, "Loading...")
    }

    /// Suggestions shown after the input, on the prompt line.
    pub fn suggestions(&self, suggestions: &[String]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }
        Some(self.paint(self.palette.muted, &format!("  ({})", suggestions.join("  "))))
    }
}

/// Cursor column just after the typed input on the prompt line.
pub fn cursor_column(session: &Session) -> u16 {
    let width = session.prompt().chars().count() + 1 + session.input().chars().count();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// What to print since the previous frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// The log was cleared; wipe the screen before printing `lines`.
    pub reset: bool,
    pub lines: Vec<String>,
}

/// Incrementally prints the session log.
#[derive(Default)]
pub struct LogView {
    shown: usize,
    modal: Option<ProjectRef>,
}

impl LogView {
    /// Lines to print since the last call. A shrunken log means it was
    /// cleared, so the frame asks for a screen reset.
    pub fn update(&mut self, session: &Session, painter: &Painter) -> Frame {
        let log = session.log();
        let mut frame = Frame::default();
        if log.len() < self.shown {
            frame.reset = true;
            self.shown = 0;
        }
        for entry in &log[self.shown..] {
            frame.lines.extend(painter.entry(entry));
        }
        self.shown = log.len();

        let modal = session.active_modal().cloned();
        if modal != self.modal {
            if let Some(ref project) = modal {
                frame.lines.extend(painter.modal(project));
            }
            self.modal = modal;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use termfolio_types::config::TermfolioConfig;

    fn session() -> Session {
        let config = TermfolioConfig {
            response_delay_ms: 0,
            clear_delay_ms: 0,
            ..TermfolioConfig::default()
        };
        let projects = vec![ProjectRef {
            name: "Bot".to_string(),
            description: "Discord bot".to_string(),
            thumbnail: "/bot.png".to_string(),
            repo: "https://example.com/bot".to_string(),
        }];
        Session::from_config(&config, projects)
    }

    #[test]
    fn plain_echo_line() {
        let painter = Painter::new(Theme::Dark, false);
        let lines = painter.entry(&OutputEntry::Echo {
            prompt: "ulin@portfolio:~$".to_string(),
            command: "help".to_string(),
        });
        assert_eq!(lines, vec!["ulin@portfolio:~$ help".to_string()]);
    }

    #[test]
    fn colour_uses_theme_palette() {
        let painter = Painter::new(Theme::Dark, true);
        let lines = painter.entry(&OutputEntry::Block(Block::Text("hi".to_string())));
        assert_ne!(lines[0], "hi");
        assert!(lines[0].starts_with('\x1b'));
        assert!(lines[0].contains("hi"));

        let bg = Theme::Dark.palette().background;
        assert_eq!(painter.background(), Some(term_color(bg)));
        assert_eq!(Painter::new(Theme::Dark, false).background(), None);
    }

    #[test]
    fn log_view_is_incremental() {
        let painter = Painter::new(Theme::Dark, false);
        let mut s = session();
        let mut view = LogView::default();
        let first = view.update(&s, &painter);
        assert!(!first.reset);
        assert!(first.lines[0].contains("Welcome"));
        assert_eq!(view.update(&s, &painter), Frame::default());

        s.submit("skills");
        let frame = view.update(&s, &painter);
        assert_eq!(frame.lines[0], "ulin@portfolio:~$ skills");
        assert_eq!(frame.lines[1], "Skills:");
    }

    #[test]
    fn log_view_resets_after_clear() {
        let painter = Painter::new(Theme::Dark, false);
        let mut s = session();
        let mut view = LogView::default();
        view.update(&s, &painter);
        s.submit("clear");
        s.advance(Duration::ZERO);
        let frame = view.update(&s, &painter);
        assert!(frame.reset);
        assert!(frame.lines.is_empty());

        s.submit("skills");
        let frame = view.update(&s, &painter);
        assert!(!frame.reset);
        assert_eq!(frame.lines[0], "ulin@portfolio:~$ skills");
    }

    #[test]
    fn project_grid_is_numbered_and_modal_shown_once() {
        let painter = Painter::new(Theme::Light, false);
        let mut s = session();
        let mut view = LogView::default();
        view.update(&s, &painter);
        s.submit("ls");
        let frame = view.update(&s, &painter);
        assert!(frame.lines.iter().any(|l| l == "  [1] Bot"));

        s.select_project(0).unwrap();
        let frame = view.update(&s, &painter);
        assert!(frame.lines.iter().any(|l| l.contains("https://example.com/bot")));
        assert_eq!(view.update(&s, &painter), Frame::default());
    }

    #[test]
    fn suggestions_line() {
        let painter = Painter::new(Theme::Dark, false);
        assert_eq!(painter.suggestions(&[]), None);
        let s = vec!["profile".to_string(), "projects".to_string()];
        assert_eq!(painter.suggestions(&s).as_deref(), Some("  (profile  projects)"));
    }

    #[test]
    fn cursor_follows_input() {
        let mut s = session();
        // "ulin@portfolio:~$" plus the separating space.
        assert_eq!(cursor_column(&s), 18);
        s.update_input("pro");
        assert_eq!(cursor_column(&s), 21);
    }
}
