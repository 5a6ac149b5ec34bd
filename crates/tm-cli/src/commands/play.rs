//! The interactive game loop.

use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Args;
use colored::Colorize;
use tm_core::MAX_HEALTH;
use tm_fiction::{Chance, Ending, GameConfig, GameSession};
use tracing::{debug, warn};

/// Options for a play session.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// JSON world file (default: the bundled maze)
    #[arg(short, long)]
    pub world: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a trap fires (0-1, default from the world)
    #[arg(long, value_parser = parse_probability)]
    pub trap_chance: Option<f64>,

    /// Probability of a random event after each move (0-1)
    #[arg(long, value_parser = parse_probability)]
    pub event_chance: Option<f64>,

    /// Starting and maximum health (1-100)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_HEALTH)))]
    pub max_health: Option<i32>,
}

impl PlayArgs {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(chance) = self.trap_chance {
            config = config.with_trap_chance(chance);
        }
        if let Some(chance) = self.event_chance {
            config = config.with_event_chance(chance);
        }
        if let Some(health) = self.max_health {
            config = config.with_max_health(health);
        }
        config
    }
}

/// Parse a probability flag, rejecting NaN, infinities and values outside 0-1.
fn parse_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{s} is not a probability between 0 and 1"))
    }
}

/// Play a session on stdin/stdout until it ends.
///
/// Ctrl-C prints the dataset's interrupt message and the latest summary.
pub fn run(args: &PlayArgs) -> Result<(), String> {
    let world = super::load_world(args.world.as_deref())?;
    let mut session = GameSession::new(world, args.config()).map_err(|e| e.to_string())?;

    let summary = Arc::new(Mutex::new(session.summary()));
    crate::interrupt::install(
        session.world().messages.interrupted.clone(),
        Arc::clone(&summary),
    );

    let stdin = io::stdin();
    run_loop(&mut session, &mut stdin.lock(), &mut io::stdout(), &summary)
        .map_err(|e| format!("terminal I/O failed: {e}"))
}

/// Drive a session from `input` until it ends or input runs out.
///
/// `summary` is refreshed after every turn so an interrupt can report it.
fn run_loop<C, R, W>(
    session: &mut GameSession<C>,
    input: &mut R,
    out: &mut W,
    summary: &Mutex<String>,
) -> io::Result<()>
where
    C: Chance,
    R: BufRead,
    W: Write,
{
    match session.intro() {
        Ok(intro) => writeln!(out, "{intro}")?,
        Err(e) => return Err(io::Error::other(e.to_string())),
    }

    let mut line = Vec::new();
    while !session.is_finished() {
        write!(out, "\n{}", session.prompt())?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("input closed");
            writeln!(out, "\n{}", session.world().messages.input_closed)?;
            break;
        }

        let Ok(text) = std::str::from_utf8(&line) else {
            warn!(bytes = line.len(), "input is not valid UTF-8");
            let messages = &session.world().messages;
            writeln!(out, "{}", messages.encoding_error.yellow())?;
            writeln!(out, "{}", messages.invalid_characters.yellow())?;
            continue;
        };
        let text = text.trim_end_matches(['\r', '\n']);

        if text.trim().is_empty() && !session.awaiting_answer() {
            continue;
        }

        play_turn(session, text, out)?;
        if let Ok(mut latest) = summary.lock() {
            *latest = session.summary();
        }
    }

    writeln!(out, "\n{}", session.summary())?;
    Ok(())
}

/// Run one turn, rolling back the session if it fails unexpectedly.
fn play_turn<C: Chance, W: Write>(
    session: &mut GameSession<C>,
    line: &str,
    out: &mut W,
) -> io::Result<()> {
    let snapshot = session.snapshot();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| session.process(line)));

    match outcome {
        Ok(Ok(text)) if text.is_empty() => Ok(()),
        Ok(Ok(text)) => match session.ending() {
            Some(Ending::Victory) => writeln!(out, "{}", text.green()),
            Some(Ending::Died) => writeln!(out, "{}", text.red()),
            _ => writeln!(out, "{text}"),
        },
        Ok(Err(e)) if e.is_user_input() => {
            debug!(error = %e, "input rejected");
            writeln!(out, "{}", session.describe_error(&e).yellow())
        }
        Ok(Err(e)) => {
            session.restore(snapshot);
            warn!(error = %e, "turn failed, state restored");
            writeln!(out, "{}", session.world().messages.turn_failed.yellow())
        }
        Err(_) => {
            session.restore(snapshot);
            warn!("turn panicked, state restored");
            writeln!(out, "{}", session.world().messages.turn_failed.yellow())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tm_core::{Direction, Room, World, WorldMeta};
    use tm_fiction::Scripted;

    /// A chance source that blows up whenever it is consulted.
    struct Exploding;

    impl Chance for Exploding {
        fn roll(&mut self, _probability: f64) -> bool {
            panic!("chance source failed");
        }

        fn pick(&mut self, _len: usize) -> usize {
            panic!("chance source failed");
        }
    }

    fn drive<C: Chance>(session: &mut GameSession<C>, script: &[u8]) -> String {
        let mut input = Cursor::new(script.to_vec());
        let mut out = Vec::new();
        let summary = Mutex::new(String::new());
        run_loop(session, &mut input, &mut out, &summary).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn play(script: &[u8]) -> (GameSession<Scripted>, String) {
        let world = World::bundled().unwrap();
        let config = GameConfig::default().with_event_chance(0.0);
        let mut session = GameSession::with_chance(world, config, Scripted::new()).unwrap();
        let out = drive(&mut session, script);
        (session, out)
    }

    #[test]
    fn panicking_turn_is_rolled_back() {
        let world = World::bundled().unwrap();
        let config = GameConfig::default().with_event_chance(0.0);
        let mut session = GameSession::with_chance(world, config, Exploding).unwrap();

        let out = drive(&mut session, "go east\ntake книга\ngo down\nlook\n".as_bytes());

        assert!(out.contains(&session.world().messages.turn_failed));
        assert_eq!(session.player().location, "library");
        assert_eq!(session.player().inventory, vec!["книга"]);
        assert_eq!(session.player().health, 3);
        assert!(session.world().room("library").unwrap().items.is_empty());
        assert_eq!(
            session.world().room("crystal_cave").unwrap().items,
            vec!["магический кристалл"]
        );
        assert!(!session.is_finished());
        assert!(out.contains("Игра завершена."));
    }

    #[test]
    fn world_error_is_rolled_back() {
        let mut world = World::new(WorldMeta::new("Holes", "a"));
        world.add_room(
            "a",
            Room::new("A")
                .with_exit(Direction::North, "void")
                .with_item("камень"),
        );
        let config = GameConfig::default().with_event_chance(0.0);
        let mut session = GameSession::with_chance(world, config, Scripted::new()).unwrap();

        let out = drive(&mut session, "take камень\ngo north\nquit\n".as_bytes());

        assert!(out.contains(&session.world().messages.turn_failed));
        assert_eq!(session.player().location, "a");
        assert_eq!(session.player().inventory, vec!["камень"]);
        assert!(session.player().game_over);
    }

    #[test]
    fn summary_is_published_after_each_turn() {
        let world = World::bundled().unwrap();
        let mut session =
            GameSession::with_chance(world, GameConfig::default(), Scripted::new()).unwrap();
        let summary = Mutex::new(String::new());
        let mut out = Vec::new();
        let mut input = Cursor::new("take факел\n".as_bytes().to_vec());
        run_loop(&mut session, &mut input, &mut out, &summary).unwrap();

        let latest = summary.lock().unwrap().clone();
        assert!(latest.starts_with("До свидания!"));
        assert!(latest.contains("предметов в инвентаре: 1"));
    }

    #[test]
    fn probability_flags_are_checked() {
        assert_eq!(parse_probability("0.25"), Ok(0.25));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("inf").is_err());
        assert!(parse_probability("1.5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("often").is_err());
    }

    #[test]
    fn end_of_input_is_a_quit() {
        let (session, out) = play(b"look\n");
        assert!(out.contains("Игра завершена."));
        assert!(out.contains("До свидания!"));
        assert!(!session.is_finished());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (session, out) = play(b"\n   \nquit\n");
        assert_eq!(out.matches("Введите команду: ").count(), 3);
        assert!(session.player().game_over);
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let (session, out) = play(b"\xff\xfe\nquit\n");
        let messages = &session.world().messages;
        assert!(out.contains(&messages.encoding_error));
        assert!(out.contains(&messages.invalid_characters));
        assert!(session.player().game_over);
    }

    #[test]
    fn puzzle_answer_uses_answer_prompt() {
        let (session, out) = play("go east\nsolve\n\nsolve\nогонь\nquit\n".as_bytes());
        assert!(out.contains("Ваш ответ: "));
        assert!(out.contains(&session.world().messages.puzzle_failed));
        assert!(session.player().has_item("ключ"));
    }

    #[test]
    fn victory_stops_the_loop() {
        let (session, out) = play(
            "go east\nsolve\nогонь\ngo west\ngo north\ngo north\ngo north\nuse ключ\nlook\n"
                .as_bytes(),
        );
        assert!(session.player().victory);
        assert!(out.contains("Поздравляем с победой!"));
        assert!(!out.contains("Игра завершена."));
    }

    #[test]
    fn config_from_args() {
        let args = PlayArgs {
            seed: Some(7),
            trap_chance: Some(3.0),
            max_health: Some(5),
            ..PlayArgs::default()
        };
        let config = args.config();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.trap_chance, Some(1.0));
        assert_eq!(config.max_health, Some(5));
        assert_eq!(config.event_chance, None);
    }
}
