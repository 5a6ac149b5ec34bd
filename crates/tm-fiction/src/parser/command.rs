//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit. The token is validated by the engine.
    Go {
        /// The raw direction token.
        direction: String,
    },
    /// Describe the current room.
    Look,
    /// List carried items.
    Inventory,
    /// Pick up an item.
    Take {
        /// The item name, words joined by single spaces.
        item: String,
    },
    /// Use a carried item.
    Use {
        /// The item name, words joined by single spaces.
        item: String,
    },
    /// Attempt the current room's puzzle.
    Solve,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
    /// A known verb without its required argument.
    MissingArgument {
        /// The verb that was given.
        verb: &'static str,
    },
    /// Unrecognized verb.
    Unknown {
        /// The verb as typed (lowercased).
        verb: String,
    },
}

/// Split a raw line into lowercase whitespace-delimited tokens.
///
/// Blank input yields an empty vector.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// Parse a player input line into a command.
///
/// Returns `None` for blank input, which callers treat as a no-op turn.
pub fn parse_command(input: &str) -> Option<Command> {
    let tokens = tokenize(input);
    let (verb, rest) = tokens.split_first()?;

    let command = match verb.as_str() {
        "go" => match rest.first() {
            Some(direction) => Command::Go {
                direction: direction.clone(),
            },
            None => Command::MissingArgument { verb: "go" },
        },
        "look" => Command::Look,
        "inventory" => Command::Inventory,
        "take" => parse_item(rest, "take", |item| Command::Take { item }),
        "use" => parse_item(rest, "use", |item| Command::Use { item }),
        "solve" => Command::Solve,
        "help" => Command::Help,
        "quit" => Command::Quit,
        _ => Command::Unknown { verb: verb.clone() },
    };

    Some(command)
}

fn parse_item(rest: &[String], verb: &'static str, build: fn(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::MissingArgument { verb }
    } else {
        build(rest.join(" "))
    }
}
