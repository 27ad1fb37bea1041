//! Console session state and command dispatch.

use std::fmt::Write as _;
use std::path::Path;

use wayfarer_foundation::{Error, ObjectRef, Result};
use wayfarer_parser::{
    MatchOutcome, ObjectMatcher, nearby_objects, pluralize, score_breakdown, searchable_text,
    singularize,
};
use wayfarer_storage::{DEFAULT_MATCH_THRESHOLD, MATCH_THRESHOLD_OPTION, ObjectStore, World};

use crate::{serialize, world_file};

/// Command names understood by [`Session::execute`], sorted.
pub const COMMANDS: &[&str] = &[
    "as",
    "exit",
    "help",
    "load",
    "look",
    "match",
    "plural",
    "quit",
    "save",
    "score",
    "singular",
    "threshold",
    "token",
];

const HELP: &str = "\
match <text>              match text against what the actor can see
<text>                    same as match
token <text> = #a #b ...  match text against an explicit candidate list
as #<id>                  act as another object
look                      list the actor's surroundings
score <query> | <text>    show the fuzzy score of two strings
plural <word>             pluralize a word
singular <word>           singularize a word
threshold [n]             show or set the match threshold
save <path>               write a world snapshot
load <path>               read a snapshot, or a world file ending in .toml
help                      show this text
quit, exit                leave the console";

/// What the console should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep going.
    Text(String),
    /// Leave the console.
    Quit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// A world and the object commands act as.
#[derive(Clone, Debug)]
pub struct Session {
    world: World,
    actor: ObjectRef,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(World::new())
    }
}

impl Session {
    /// Creates a session over `world`, acting as its first privileged
    /// object (or its first object, or `NOTHING` if it is empty).
    #[must_use]
    pub fn new(world: World) -> Self {
        let actor = default_actor(&world);
        Self { world, actor }
    }

    /// Builder method to act as a specific object.
    ///
    /// # Errors
    ///
    /// Returns an error if `actor` does not exist.
    pub fn with_actor(mut self, actor: ObjectRef) -> Result<Self> {
        self.set_actor(actor)?;
        Ok(self)
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the acting object.
    #[must_use]
    pub const fn actor(&self) -> ObjectRef {
        self.actor
    }

    /// Switches the acting object.
    ///
    /// # Errors
    ///
    /// Returns an error if `actor` does not exist.
    pub fn set_actor(&mut self, actor: ObjectRef) -> Result<()> {
        if !self.world.exists(actor) {
            return Err(Error::invalid_object(actor));
        }
        self.actor = actor;
        Ok(())
    }

    /// Replaces the world, keeping the actor if it still exists.
    pub fn set_world(&mut self, world: World) {
        self.world = world;
        if !self.world.exists(self.actor) {
            self.actor = default_actor(&self.world);
        }
    }

    /// Sets the match threshold option.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` lies outside 0–100.
    pub fn set_threshold(&mut self, threshold: i64) -> Result<()> {
        if !(0..=100).contains(&threshold) {
            return Err(Error::invalid_option(
                MATCH_THRESHOLD_OPTION,
                format!("{threshold} is outside 0..=100"),
            ));
        }
        self.world = self.world.with_option(MATCH_THRESHOLD_OPTION, threshold);
        Ok(())
    }

    /// Runs one console command.
    ///
    /// Unknown leading words are treated as text to match.
    ///
    /// # Errors
    ///
    /// Returns an error if a command fails, such as a missing file or an
    /// unknown object.
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim()));

        match command {
            "" => Ok(Reply::text("")),
            "quit" | "exit" => Ok(Reply::Quit),
            "help" => Ok(Reply::text(HELP)),
            "match" => Ok(Reply::Text(self.match_text(rest))),
            "token" => Ok(Reply::Text(self.token(rest))),
            "as" => self.switch_actor(rest),
            "look" => Ok(Reply::Text(self.look())),
            "score" => Ok(Reply::Text(score(rest))),
            "plural" => Ok(word_reply(rest, "plural", pluralize)),
            "singular" => Ok(word_reply(rest, "singular", singularize)),
            "threshold" => self.threshold(rest),
            "save" => self.save(rest),
            "load" => self.load(rest),
            _ => Ok(Reply::Text(self.match_text(line))),
        }
    }

    fn match_text(&self, text: &str) -> String {
        let outcome = ObjectMatcher::new(&self.world).match_outcome(self.actor, text);
        describe_outcome(&self.world, outcome)
    }

    fn token(&self, rest: &str) -> String {
        let Some((token, refs)) = rest.split_once('=') else {
            return "usage: token <text> = #a #b ...".to_string();
        };

        let mut candidates = Vec::new();
        for word in refs.split_whitespace() {
            match word.parse::<ObjectRef>() {
                Ok(obj) => candidates.push(obj),
                Err(_) => return format!("not an object reference: {word}"),
            }
        }

        ObjectMatcher::new(&self.world)
            .token_match(self.actor, token, &candidates)
            .map_or_else(|| "no match".to_string(), |obj| describe(&self.world, obj))
    }

    fn switch_actor(&mut self, rest: &str) -> Result<Reply> {
        let Ok(actor) = rest.parse::<ObjectRef>() else {
            return Ok(Reply::text("usage: as #<id>"));
        };
        self.set_actor(actor)?;
        Ok(Reply::Text(format!("acting as {}", describe(&self.world, actor))))
    }

    fn look(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "you are {}", describe(&self.world, self.actor));
        let location = self.world.location_of(self.actor);
        if self.world.valid(location) {
            let _ = writeln!(out, "in {}", describe(&self.world, location));
        }

        let nearby = nearby_objects(&self.world, self.actor);
        if nearby.is_empty() {
            out.push_str("nothing nearby");
        } else {
            out.push_str("nearby:");
            for obj in nearby {
                let _ = write!(out, "\n  {obj} {}", searchable_text(&self.world, obj));
            }
        }
        out
    }

    fn threshold(&mut self, rest: &str) -> Result<Reply> {
        if rest.is_empty() {
            let current = self
                .world
                .configured_threshold(MATCH_THRESHOLD_OPTION, DEFAULT_MATCH_THRESHOLD);
            return Ok(Reply::Text(format!("threshold is {current}")));
        }
        let Ok(threshold) = rest.parse::<i64>() else {
            return Ok(Reply::text("usage: threshold [0-100]"));
        };
        self.set_threshold(threshold)?;
        Ok(Reply::Text(format!("threshold set to {threshold}")))
    }

    fn save(&self, rest: &str) -> Result<Reply> {
        if rest.is_empty() {
            return Ok(Reply::text("usage: save <path>"));
        }
        serialize::save_to_file(&self.world, rest)?;
        Ok(Reply::Text(format!(
            "saved {} objects to {rest}",
            self.world.object_count()
        )))
    }

    fn load(&mut self, rest: &str) -> Result<Reply> {
        if rest.is_empty() {
            return Ok(Reply::text("usage: load <path>"));
        }
        let world = load_world(Path::new(rest))?;
        self.set_world(world);
        Ok(Reply::Text(format!(
            "loaded {} objects, acting as {}",
            self.world.object_count(),
            describe(&self.world, self.actor)
        )))
    }
}

/// Loads a world file (`.toml`) or a snapshot (anything else).
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_world(path: &Path) -> Result<World> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        world_file::load_world_toml(path)
    } else {
        serialize::load_from_file(path)
    }
}

fn default_actor(world: &World) -> ObjectRef {
    world
        .objects()
        .find(|&obj| world.has_privilege(obj))
        .or_else(|| world.objects().next())
        .unwrap_or(ObjectRef::NOTHING)
}

fn describe(world: &World, obj: ObjectRef) -> String {
    match world.object_name(obj) {
        Some(name) => format!("{obj} ({name})"),
        None => obj.to_string(),
    }
}

fn describe_outcome(world: &World, outcome: MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Found(obj) => describe(world, obj),
        MatchOutcome::Nothing => format!("nothing ({})", ObjectRef::NOTHING),
        MatchOutcome::Ambiguous => format!("ambiguous ({})", ObjectRef::AMBIGUOUS),
        MatchOutcome::Failed => format!("no match ({})", ObjectRef::FAILED_MATCH),
    }
}

fn score(rest: &str) -> String {
    let Some((query, text)) = rest.split_once('|') else {
        return "usage: score <query> | <text>".to_string();
    };
    let breakdown = score_breakdown(query.trim(), text.trim());
    format!(
        "ratio {:.1}, partial token sort {:.1}, token set {:.1} => {}",
        breakdown.ratio, breakdown.partial_token_sort, breakdown.token_set, breakdown.score
    )
}

fn word_reply(word: &str, command: &str, inflect: fn(&str) -> String) -> Reply {
    if word.is_empty() {
        Reply::Text(format!("usage: {command} <word>"))
    } else {
        Reply::Text(inflect(word))
    }
}
