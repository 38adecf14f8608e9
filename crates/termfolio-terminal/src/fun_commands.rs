//! Fun commands: fortune, ascii.

use rand::Rng;
use termfolio_types::error::Result;

use crate::interpreter::{Block, Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

/// The fixed fortune set; one is drawn uniformly per call.
pub const FORTUNES: [&str; 4] = [
    "You will write bug-free code today!",
    "A new project is on the horizon.",
    "Your debugging skills will save the day.",
    "Success is just a commit away.",
];

pub(crate) struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Print a random fortune"
    }
    fn usage(&self) -> &str {
        "fortune"
    }
    fn execute(&self, _line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let idx = env.rng.gen_range(0..FORTUNES.len());
        Ok(CommandOutput::text(FORTUNES[idx]))
    }
}

// ---------------------------------------------------------------------------
// ascii
// ---------------------------------------------------------------------------

pub const BANNER: &str = r"  ______   __     __  __     ______     ______
 /\  ___\ /\ \   /\ \/\ \   /\  ___\   /\  == \
 \ \  __\ \ \ \  \ \ \_\ \  \ \  __\   \ \  __<
  \ \_\    \ \_\  \ \_____\  \ \_____\  \ \_\ \_\
   \/_/     \/_/   \/_____/   \/_____/   \/_/ /_/";

pub(crate) struct AsciiCmd;
impl Command for AsciiCmd {
    fn name(&self) -> &str {
        "ascii"
    }
    fn description(&self) -> &str {
        "Print the banner"
    }
    fn usage(&self) -> &str {
        "ascii"
    }
    fn execute(&self, _line: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Blocks(vec![Block::Ascii(BANNER.to_string())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{CommandRegistry, Settings};
    use crate::register_builtins;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use termfolio_types::portfolio::Portfolio;
    use termfolio_types::theme::Theme;

    fn exec(reg: &CommandRegistry, rng: &mut StdRng, line: &str) -> CommandOutput {
        let portfolio = Portfolio::default();
        let mut settings = Settings {
            username: "u".to_string(),
            hostname: "h".to_string(),
            theme: Theme::Dark,
        };
        let mut env = Environment {
            settings: &mut settings,
            portfolio: &portfolio,
            rng,
        };
        reg.execute(line, &mut env).unwrap()
    }

    #[test]
    fn fortune_is_one_line_from_set() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let mut rng = StdRng::seed_from_u64(11);
        match exec(&reg, &mut rng, "fortune") {
            CommandOutput::Blocks(blocks) => {
                assert_eq!(blocks.len(), 1);
                match &blocks[0] {
                    Block::Text(line) => assert!(FORTUNES.contains(&line.as_str())),
                    other => panic!("expected text, got {other:?}"),
                }
            },
            other => panic!("expected blocks, got {other:?}"),
        }
    }

    #[test]
    fn fortune_covers_all_four() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..400 {
            if let CommandOutput::Blocks(blocks) = exec(&reg, &mut rng, "fortune")
                && let Some(Block::Text(line)) = blocks.into_iter().next()
            {
                seen.insert(line);
            }
        }
        assert_eq!(seen.len(), FORTUNES.len());
    }

    #[test]
    fn ascii_banner_is_five_lines() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        let mut rng = StdRng::seed_from_u64(0);
        match exec(&reg, &mut rng, "ascii") {
            CommandOutput::Blocks(blocks) => match &blocks[0] {
                Block::Ascii(art) => {
                    assert_eq!(art.lines().count(), 5);
                    assert!(art.contains("/\\  ___\\"));
                },
                other => panic!("expected ascii, got {other:?}"),
            },
            other => panic!("expected blocks, got {other:?}"),
        }
    }
}
