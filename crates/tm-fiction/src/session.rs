//! Game session management.
//!
//! [`GameSession`] is the action engine: it owns the world and the player,
//! dispatches one parsed command per turn, and returns the text to print.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tm_core::{Direction, Messages, Room, World};
use tracing::{debug, info};

use crate::chance::{self, Chance};
use crate::config::{GameConfig, Rules};
use crate::error::{GameError, GameResult};
use crate::narrator;
use crate::parser::{Command, closest_name, parse_command};
use crate::player::PlayerState;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ending {
    /// A winning item was used.
    Victory,
    /// Health ran out.
    Died,
    /// The player quit.
    Quit,
}

/// A serializable summary of the session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    /// Identifier of the current room.
    pub room: String,
    /// Display name of the current room.
    pub room_name: String,
    /// Current health.
    pub health: i32,
    /// Maximum health.
    pub max_health: i32,
    /// Carried items in pickup order.
    pub inventory: Vec<String>,
    /// Rooms whose puzzle is solved, sorted.
    pub solved_puzzles: Vec<String>,
    /// Whether the game is over by death or quitting.
    pub game_over: bool,
    /// Whether the player won.
    pub victory: bool,
    /// Why the session ended, if it has.
    pub ending: Option<Ending>,
}

/// Mutable session state captured before a turn.
///
/// Restoring it undoes everything the turn did to the player and the rooms.
#[derive(Debug, Clone)]
pub struct Snapshot {
    player: PlayerState,
    world: World,
    pending_answer: Option<String>,
    ending: Option<Ending>,
}

/// An interactive game session.
pub struct GameSession<C: Chance = StdRng> {
    world: World,
    player: PlayerState,
    rules: Rules,
    chance: C,
    /// Room whose puzzle is waiting for an answer line.
    pending_answer: Option<String>,
    ending: Option<Ending>,
}

impl GameSession<StdRng> {
    /// Create a session driven by a seeded RNG.
    ///
    /// Uses `config.seed` when given, otherwise seeds from the OS.
    pub fn new(world: World, config: GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_chance(world, config, rng)
    }
}

impl<C: Chance> GameSession<C> {
    /// Create a session with an explicit randomness source.
    ///
    /// Fails if the world's start room does not exist.
    pub fn with_chance(world: World, config: GameConfig, chance: C) -> GameResult<Self> {
        world.require_room(&world.meta.start_room)?;

        let rules = config.rules(&world.settings);
        let player = PlayerState::new(world.meta.start_room.clone(), rules.max_health);
        debug!(
            start = %player.location,
            max_health = rules.max_health,
            trap_chance = rules.trap_chance,
            event_chance = rules.event_chance,
            "session created"
        );

        Ok(Self {
            world,
            player,
            rules,
            chance,
            pending_answer: None,
            ending: None,
        })
    }

    /// Get the world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a mutable reference to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The effective rules for this session.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Why the session ended, if it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether the session reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.player.is_finished()
    }

    /// Whether the next line will be read as a puzzle answer.
    pub fn awaiting_answer(&self) -> bool {
        self.pending_answer.is_some()
    }

    /// The prompt to show before reading the next line.
    pub fn prompt(&self) -> &str {
        if self.awaiting_answer() {
            &self.world.messages.answer_prompt
        } else {
            &self.world.messages.command_prompt
        }
    }

    /// Text shown before the first turn: title, welcome, room and health.
    pub fn intro(&self) -> GameResult<String> {
        Ok([
            narrator::banner(&self.world.meta.title),
            self.world.messages.welcome.clone(),
            String::new(),
            self.look()?,
            self.health(),
        ]
        .join("\n"))
    }

    /// Process one line of player input.
    ///
    /// Blank input is a no-op and returns an empty string. While a puzzle
    /// answer is pending, the line is taken as the answer.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }

        if self.pending_answer.is_some() {
            return self.answer(input);
        }

        match parse_command(input) {
            Some(command) => self.execute(command),
            None => Ok(String::new()),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }

        debug!(?command, room = %self.player.location, "executing command");
        match command {
            Command::Go { direction } => self.go(&direction),
            Command::Look => self.look(),
            Command::Inventory => Ok(self.inventory()),
            Command::Take { item } => self.take(&item),
            Command::Use { item } => self.use_item(&item),
            Command::Solve => self.solve(),
            Command::Help => Ok(self.help()),
            Command::Quit => Ok(self.quit()),
            Command::MissingArgument { verb } => Err(GameError::MissingArgument(verb)),
            Command::Unknown { verb } => Err(GameError::InvalidCommand(verb)),
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Move through an exit, then roll for a random event and the trap.
    pub fn go(&mut self, token: &str) -> GameResult<String> {
        let direction =
            Direction::parse(token).ok_or_else(|| GameError::InvalidDirection(token.to_string()))?;
        let target = self
            .current_room()?
            .exit(direction)
            .ok_or(GameError::NoExit(direction))?
            .to_string();
        self.world.require_room(&target)?;

        debug!(from = %self.player.location, to = %target, %direction, "player moved");
        self.player.location = target;

        let mut lines = vec![format!("Вы идете на {token}...")];

        if let Some(event) = self.random_event() {
            lines.push(String::new());
            lines.push(event);
        }

        if let Some(trap) = self.check_trap()? {
            lines.push(String::new());
            lines.push(trap);
        }

        if !self.player.game_over {
            lines.push(String::new());
            lines.push(self.look()?);
            lines.push(self.health());
        }

        Ok(lines.join("\n"))
    }

    /// Describe the current room.
    pub fn look(&self) -> GameResult<String> {
        Ok(narrator::describe_room(self.current_room()?))
    }

    /// List carried items.
    pub fn inventory(&self) -> String {
        narrator::describe_inventory(&self.player.inventory)
    }

    /// Render the current health bar.
    pub fn health(&self) -> String {
        narrator::health_bar(self.player.health, self.player.max_health)
    }

    /// Pick up one occurrence of an item from the current room.
    pub fn take(&mut self, item: &str) -> GameResult<String> {
        let room = self.current_room()?;
        if !room.contains_item(item) {
            let suggestion = closest_name(item, room.items.iter().map(String::as_str));
            return Err(GameError::NoSuchItem {
                item: item.to_string(),
                suggestion,
            });
        }

        let location = self.player.location.clone();
        self.world.take_item(&location, item)?;
        self.player.add_item(item);
        debug!(item, room = %location, "item taken");

        Ok(format!("Вы подобрали: {item}"))
    }

    /// Use a carried item.
    ///
    /// Unusable items only describe themselves. A winning effect that
    /// applies in the current room ends the game in victory.
    pub fn use_item(&mut self, item: &str) -> GameResult<String> {
        if !self.player.has_item(item) {
            let suggestion =
                closest_name(item, self.player.inventory.iter().map(String::as_str));
            return Err(GameError::ItemNotInInventory {
                item: item.to_string(),
                suggestion,
            });
        }

        let definition = self
            .world
            .item(item)
            .ok_or_else(|| GameError::UnknownItem(item.to_string()))?;

        if !definition.usable {
            return Ok(definition.use_description.clone());
        }

        if let Some(effect) = definition.winning_effect_in(&self.player.location) {
            let mut lines = effect.text.clone();
            lines.push(String::new());
            lines.push(narrator::banner(&self.world.messages.victory));

            self.player.victory = true;
            self.ending = Some(Ending::Victory);
            info!(item, room = %self.player.location, "victory");
            return Ok(lines.join("\n"));
        }

        Ok(definition.use_description.clone())
    }

    /// Present the current room's puzzle and wait for an answer.
    ///
    /// The next line passed to [`GameSession::process`] is taken as the answer.
    pub fn solve(&mut self) -> GameResult<String> {
        let room = self.current_room()?;
        let puzzle = room.puzzle.as_ref().ok_or(GameError::NoPuzzle)?;
        if self.player.has_solved(&self.player.location) {
            return Err(GameError::AlreadySolved);
        }

        let question = format!("Загадка: {}", puzzle.question);
        self.pending_answer = Some(self.player.location.clone());
        Ok(question)
    }

    /// Answer the pending puzzle.
    ///
    /// A wrong answer leaves the puzzle open; there is no limit on attempts.
    pub fn answer(&mut self, input: &str) -> GameResult<String> {
        let room_id = self.pending_answer.take().ok_or(GameError::NoPuzzle)?;
        let puzzle = self
            .world
            .require_room(&room_id)?
            .puzzle
            .clone()
            .ok_or(GameError::NoPuzzle)?;

        if !puzzle.is_answered_by(input) {
            debug!(room = %room_id, "puzzle answer rejected");
            return Ok(self.world.messages.puzzle_failed.clone());
        }

        self.player.add_item(puzzle.reward.as_str());
        self.player.mark_solved(room_id.as_str());
        debug!(room = %room_id, reward = %puzzle.reward, "puzzle solved");

        Ok(format!(
            "{}\nВы получили: {}",
            self.world.messages.puzzle_solved, puzzle.reward
        ))
    }

    /// Roll for the current room's trap.
    ///
    /// Returns `None` when the room has no trap or the trap does not fire.
    /// Health at or below zero ends the game.
    pub fn check_trap(&mut self) -> GameResult<Option<String>> {
        let Some(trap) = self.current_room()?.trap.clone() else {
            return Ok(None);
        };

        if !chance::check(&mut self.chance, self.rules.trap_chance) {
            debug!(room = %self.player.location, "trap did not fire");
            return Ok(None);
        }

        let damage = trap.damage_or(self.rules.trap_damage);
        let health = self.player.take_damage(damage);
        debug!(room = %self.player.location, damage, health, "trap fired");

        let mut lines = vec![
            format!("Ловушка! {}", self.world.messages.trap_triggered),
            format!("Вы получаете {damage} урона."),
            self.health(),
        ];

        if self.player.is_dead() {
            self.player.game_over = true;
            self.ending = Some(Ending::Died);
            info!(room = %self.player.location, "player died");
            lines.push(String::new());
            lines.push(narrator::banner(&self.world.messages.game_over));
        }

        Ok(Some(lines.join("\n")))
    }

    /// Show the command reference.
    pub fn help(&self) -> String {
        narrator::help_text(&self.world.help)
    }

    /// Leave the game.
    pub fn quit(&mut self) -> String {
        self.player.game_over = true;
        self.ending = Some(Ending::Quit);
        info!(room = %self.player.location, "player quit");
        self.world.messages.game_ended.clone()
    }

    // -----------------------------------------------------------------------
    // Reporting
    // -----------------------------------------------------------------------

    /// Summarize the session state.
    pub fn status(&self) -> StatusReport {
        let mut solved_puzzles: Vec<String> =
            self.player.solved_puzzles.iter().cloned().collect();
        solved_puzzles.sort();

        StatusReport {
            room: self.player.location.clone(),
            room_name: self
                .world
                .room(&self.player.location)
                .map(|room| room.name.clone())
                .unwrap_or_default(),
            health: self.player.health,
            max_health: self.player.max_health,
            inventory: self.player.inventory.clone(),
            solved_puzzles,
            game_over: self.player.game_over,
            victory: self.player.victory,
            ending: self.ending,
        }
    }

    /// End-of-game summary: a headline for how the session ended, then
    /// health, inventory size and solved puzzles.
    ///
    /// A session that has not ended (input closed or interrupted) gets the
    /// same farewell as a voluntary quit.
    pub fn summary(&self) -> String {
        let status = self.status();
        let messages = &self.world.messages;
        let headline = match status.ending {
            Some(Ending::Victory) => &messages.victory_summary,
            Some(Ending::Died) => &messages.death_summary,
            Some(Ending::Quit) | None => &messages.farewell,
        };
        format!(
            "{headline}\nЗдоровье: {}/{}, предметов в инвентаре: {}, загадок решено: {}",
            status.health.max(0),
            status.max_health,
            status.inventory.len(),
            status.solved_puzzles.len()
        )
    }

    /// Render an error with the dataset's messages.
    pub fn describe_error(&self, error: &GameError) -> String {
        let messages = &self.world.messages;
        match error {
            GameError::InvalidCommand(_) => messages.invalid_command.clone(),
            GameError::MissingArgument("go") => messages.missing_direction.clone(),
            GameError::MissingArgument(_) => messages.missing_item.clone(),
            GameError::InvalidDirection(_) | GameError::NoExit(_) => {
                messages.invalid_direction.clone()
            }
            GameError::NoSuchItem { suggestion, .. } => {
                with_suggestion(messages, messages.no_item.clone(), suggestion.as_deref())
            }
            GameError::ItemNotInInventory { item, suggestion } => with_suggestion(
                messages,
                Messages::with_item(&messages.not_in_inventory, item),
                suggestion.as_deref(),
            ),
            GameError::UnknownItem(item) => Messages::with_item(&messages.unknown_item, item),
            GameError::NoPuzzle => messages.no_puzzle.clone(),
            GameError::AlreadySolved => messages.already_solved.clone(),
            GameError::GameFinished => messages.game_finished.clone(),
            GameError::Core(_) => messages.turn_failed.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Turn recovery
    // -----------------------------------------------------------------------

    /// Capture the mutable state before a turn.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            world: self.world.clone(),
            pending_answer: self.pending_answer.clone(),
            ending: self.ending,
        }
    }

    /// Roll back to a captured state.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.player = snapshot.player;
        self.world = snapshot.world;
        self.pending_answer = snapshot.pending_answer;
        self.ending = snapshot.ending;
    }

    fn current_room(&self) -> GameResult<&Room> {
        Ok(self.world.require_room(&self.player.location)?)
    }

    fn random_event(&mut self) -> Option<String> {
        if self.world.events.is_empty()
            || !chance::check(&mut self.chance, self.rules.event_chance)
        {
            return None;
        }
        let index = self.chance.pick(self.world.events.len());
        debug!(index, "random event");
        self.world.events.get(index).cloned()
    }
}

fn with_suggestion(messages: &Messages, text: String, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(name) => format!("{text}\n{} «{name}»?", messages.suggestion),
        None => text,
    }
}
