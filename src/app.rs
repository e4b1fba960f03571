//! Application state and command dispatch for the Pokedex REPL
//!
//! This module owns the interactive session state: the API client, the
//! pagination cursors for the location listing, and the collection of
//! captured creatures. Each REPL line is parsed into a [`Command`] and
//! executed against the [`App`]; errors are reported to the caller so the
//! loop can print them and continue.

use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

use crate::data::{ApiClient, ApiError, Pokemon};

/// Command table shown by `help`, in display order
const COMMANDS: &[(&str, &str)] = &[
    ("help", "Display this help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Display the next 20 location areas"),
    ("mapb", "Display the previous 20 location areas"),
    ("explore <area>", "List the creatures found in an area"),
    ("catch <name>", "Throw a ball at a creature"),
    ("inspect <name>", "Show details of a captured creature"),
    ("pokedex", "List all captured creatures"),
];

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore { area: String },
    Catch { name: String },
    Inspect { name: String },
    Pokedex,
}

/// Errors produced while parsing or executing a command
#[derive(Debug, Error)]
pub enum AppError {
    /// Input did not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command was given without its required argument
    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    /// The underlying API request failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Command {
    /// Parses a whitespace-separated input line into a command
    ///
    /// Returns `None` for blank lines so the loop can reprompt silently.
    pub fn parse(line: &str) -> Option<Result<Command, AppError>> {
        let mut parts = line.split_whitespace();
        let word = parts.next()?;
        let arg = parts.next();

        Some(match word {
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            "map" => Ok(Command::Map),
            "mapb" => Ok(Command::MapBack),
            "explore" => match arg {
                Some(area) => Ok(Command::Explore {
                    area: area.to_string(),
                }),
                None => Err(AppError::MissingArgument("explore <area>")),
            },
            "catch" => match arg {
                Some(name) => Ok(Command::Catch {
                    name: name.to_string(),
                }),
                None => Err(AppError::MissingArgument("catch <name>")),
            },
            "inspect" => match arg {
                Some(name) => Ok(Command::Inspect {
                    name: name.to_string(),
                }),
                None => Err(AppError::MissingArgument("inspect <name>")),
            },
            "pokedex" => Ok(Command::Pokedex),
            other => Err(AppError::UnknownCommand(other.to_string())),
        })
    }
}

/// Main application struct managing session state
pub struct App {
    /// API client shared with the response cache
    client: ApiClient,
    /// Cursor URL for the next location page, once a page has been viewed
    next: Option<String>,
    /// Cursor URL for the previous location page
    previous: Option<String>,
    /// Captured creatures keyed by name
    pokedex: HashMap<String, Pokemon>,
    /// Flag indicating the session should end
    pub should_quit: bool,
}

impl App {
    /// Creates a new session around the given API client
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: HashMap::new(),
            should_quit: false,
        }
    }

    /// Parses and executes one input line
    ///
    /// Blank lines are ignored. Errors are returned for the caller to print;
    /// they never terminate the session.
    pub async fn execute_line(&mut self, line: &str) -> Result<(), AppError> {
        match Command::parse(line) {
            None => Ok(()),
            Some(command) => self.execute(command?).await,
        }
    }

    /// Executes a parsed command
    pub async fn execute(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Help => {
                self.cmd_help();
                Ok(())
            }
            Command::Exit => {
                println!("Exiting...");
                self.should_quit = true;
                Ok(())
            }
            Command::Map => self.cmd_map().await,
            Command::MapBack => self.cmd_mapb().await,
            Command::Explore { area } => self.cmd_explore(&area).await,
            Command::Catch { name } => self.cmd_catch(&name).await,
            Command::Inspect { name } => {
                self.cmd_inspect(&name);
                Ok(())
            }
            Command::Pokedex => {
                self.cmd_pokedex();
                Ok(())
            }
        }
    }

    fn cmd_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for (name, description) in COMMANDS {
            println!("{:<20} : {}", name, description);
        }
    }

    /// Shows the next page of location areas, starting from the first page
    /// when no page has been viewed yet
    async fn cmd_map(&mut self) -> Result<(), AppError> {
        let page = self.client.fetch_location_page(self.next.as_deref()).await?;
        self.next = page.next;
        self.previous = page.previous;
        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }

    /// Shows the previous page of location areas, if there is one
    async fn cmd_mapb(&mut self) -> Result<(), AppError> {
        let Some(previous) = self.previous.clone() else {
            println!("No previous locations to display, try [map] first");
            return Ok(());
        };
        let page = self.client.fetch_location_page(Some(&previous)).await?;
        self.next = page.next;
        self.previous = page.previous;
        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }

    async fn cmd_explore(&self, area: &str) -> Result<(), AppError> {
        let details = self.client.fetch_area(area).await?;
        println!("Exploring {}...", area);
        println!("Found creatures:");
        for encounter in &details.pokemon_encounters {
            println!("- {}", encounter.pokemon.name);
        }
        Ok(())
    }

    async fn cmd_catch(&mut self, name: &str) -> Result<(), AppError> {
        let pokemon = self.client.fetch_pokemon(name).await?;
        println!("Throwing a ball at {}...", pokemon.name);

        let roll = rand::thread_rng().gen_range(0..100);
        if roll >= capture_chance(pokemon.base_experience) {
            println!("Oh no! {} got away!", pokemon.name);
            println!("Better luck next time!");
            return Ok(());
        }

        println!("Congratulations! You caught {}!", pokemon.name);
        self.record_capture(pokemon);
        Ok(())
    }

    fn cmd_inspect(&self, name: &str) {
        let Some(pokemon) = self.pokedex.get(name) else {
            println!("Haven't caught {} yet! No data available.", name);
            return;
        };

        println!("Name: {}", pokemon.name);
        println!("Id: {}", pokemon.id);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for entry in &pokemon.stats {
            println!("  - {}: {}", entry.stat.name, entry.base_stat);
        }
        println!("Types:");
        for entry in &pokemon.types {
            println!("  - {}", entry.type_.name);
        }
    }

    fn cmd_pokedex(&self) {
        println!("Your Pokedex:");
        let mut names: Vec<&str> = self.pokedex.keys().map(String::as_str).collect();
        names.sort_unstable();
        for name in names {
            println!("  - {}", name);
        }
    }

    /// Records a captured creature, replacing any earlier capture of the
    /// same name
    pub fn record_capture(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(pokemon.name.clone(), pokemon);
    }

    /// Returns whether a creature of this name has been captured
    #[allow(dead_code)]
    pub fn is_captured(&self, name: &str) -> bool {
        self.pokedex.contains_key(name)
    }
}

/// Chance out of 100 of a successful capture
///
/// Scales down with base experience so stronger creatures are harder to
/// catch, floored so nothing is ever impossible.
pub fn capture_chance(base_experience: u32) -> u32 {
    80u32.saturating_sub(base_experience / 4).max(10)
}
