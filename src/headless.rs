//! Headless mode: one command per input line, one JSON message per output line.
//!
//! Commands are either plain words (`left`, `save <path>`, `state`, `quit`) or a JSON
//! object such as `{"move":"left"}` or `{"save":"run.2048"}`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::with_save_extension;
use crate::core::{GameState, SpawnSource};
use crate::types::{Direction, MoveOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Save(PathBuf),
    State,
    Quit,
}

#[derive(Debug, Default, Deserialize)]
struct JsonCommand {
    #[serde(default, rename = "move")]
    direction: Option<String>,
    #[serde(default)]
    save: Option<PathBuf>,
    #[serde(default)]
    command: Option<String>,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.starts_with('{') {
            let json: JsonCommand =
                serde_json::from_str(line).map_err(|e| format!("invalid json: {}", e))?;
            return Self::from_json(json).map(Some);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word.to_lowercase().as_str() {
            "save" if !rest.is_empty() => Ok(Some(Command::Save(PathBuf::from(rest)))),
            "save" => Err("save needs a path".to_string()),
            "state" => Ok(Some(Command::State)),
            "quit" | "exit" => Ok(Some(Command::Quit)),
            other => Direction::from_str(other)
                .map(|d| Some(Command::Move(d)))
                .ok_or_else(|| format!("unknown command: {}", word)),
        }
    }

    fn from_json(json: JsonCommand) -> Result<Command, String> {
        if let Some(dir) = json.direction {
            return Direction::from_str(&dir)
                .map(Command::Move)
                .ok_or_else(|| format!("unknown direction: {}", dir));
        }
        if let Some(path) = json.save {
            return Ok(Command::Save(path));
        }
        match json.command.as_deref() {
            Some("state") => Ok(Command::State),
            Some("quit") => Ok(Command::Quit),
            Some(other) => Err(format!("unknown command: {}", other)),
            None => Err("expected \"move\", \"save\" or \"command\"".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "observation")]
    Observation,
    #[serde(rename = "ack")]
    Ack,
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid_command")]
    InvalidCommand,
    #[serde(rename = "save_failed")]
    SaveFailed,
}

/// Game state after a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: MessageType,
    pub seq: u64,
    pub variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub score: u64,
    pub won: bool,
    pub game_over: bool,
    pub rows: usize,
    pub columns: usize,
    /// Ranks, row-major; 0 is empty
    pub board: Vec<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawned: Option<[usize; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckMessage {
    #[serde(rename = "type")]
    pub msg_type: MessageType,
    pub seq: u64,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: MessageType,
    pub seq: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Reply to one input line.
#[derive(Debug, Clone)]
pub enum Reply {
    Observation(ObservationMessage),
    Ack(AckMessage),
    Error(ErrorMessage),
}

impl Reply {
    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            Reply::Observation(m) => serde_json::to_string(m),
            Reply::Ack(m) => serde_json::to_string(m),
            Reply::Error(m) => serde_json::to_string(m),
        }
    }
}

/// A game driven by text commands.
pub struct Headless<S> {
    game: GameState<S>,
    seq: u64,
}

impl<S: SpawnSource> Headless<S> {
    pub fn new(game: GameState<S>) -> Self {
        Self { game, seq: 0 }
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn observe(&mut self, outcome: Option<MoveOutcome>) -> ObservationMessage {
        let snap = self.game.snapshot();
        ObservationMessage {
            msg_type: MessageType::Observation,
            seq: self.next_seq(),
            variant: snap.kind.as_str().to_string(),
            outcome: outcome.map(|o| o.as_str().to_string()),
            score: snap.score,
            won: snap.has_won,
            game_over: snap.game_over,
            rows: snap.rows,
            columns: snap.columns,
            board: snap.board_rows().map(<[u8]>::to_vec).collect(),
            spawned: outcome
                .filter(|o| o.is_moved())
                .and(snap.last_move)
                .and_then(|m| m.spawned)
                .map(|(r, c, rank)| [r, c, rank as usize]),
        }
    }

    fn error(&mut self, code: ErrorCode, message: String) -> Reply {
        Reply::Error(ErrorMessage {
            msg_type: MessageType::Error,
            seq: self.next_seq(),
            code,
            message,
        })
    }

    /// Handle one input line. `None` means stop (quit command).
    pub fn handle_line(&mut self, line: &str) -> Option<Option<Reply>> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Some(None),
            Err(message) => return Some(Some(self.error(ErrorCode::InvalidCommand, message))),
        };
        let reply = match command {
            Command::Quit => return None,
            Command::State => Reply::Observation(self.observe(None)),
            Command::Move(dir) => {
                let outcome = self.game.apply_move(dir);
                Reply::Observation(self.observe(Some(outcome)))
            }
            Command::Save(path) => self.save(&path),
        };
        Some(Some(reply))
    }

    fn save(&mut self, path: &Path) -> Reply {
        let path = with_save_extension(path);
        match self.game.save(&path) {
            Ok(()) => Reply::Ack(AckMessage {
                msg_type: MessageType::Ack,
                seq: self.next_seq(),
                path: path.display().to_string(),
            }),
            Err(err) => self.error(
                ErrorCode::SaveFailed,
                format!("{}: {}", path.display(), err),
            ),
        }
    }

    /// Emit the initial observation, then serve commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let first = Reply::Observation(self.observe(None));
        writeln!(output, "{}", first.to_json()?)?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("reading command")?;
            match self.handle_line(&line) {
                None => break,
                Some(None) => {}
                Some(Some(reply)) => {
                    writeln!(output, "{}", reply.to_json()?)?;
                    output.flush()?;
                }
            }
        }
        tracing::info!(score = self.game.score(), "headless session finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleRng;
    use crate::types::VariantKind;

    fn headless() -> Headless<SimpleRng> {
        let game = GameState::from_rows(
            VariantKind::Classic,
            &[[1u8, 1, 2, 0], [0; 4], [0; 4], [0; 4]],
            0,
            false,
            SimpleRng::new(3),
        )
        .unwrap();
        Headless::new(game)
    }

    #[test]
    fn parses_words_and_json() {
        assert_eq!(Command::parse(" Left "), Ok(Some(Command::Move(Direction::Left))));
        assert_eq!(Command::parse("u"), Ok(Some(Command::Move(Direction::Up))));
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(
            Command::parse("save out/run"),
            Ok(Some(Command::Save(PathBuf::from("out/run"))))
        );
        assert_eq!(
            Command::parse(r#"{"move":"down"}"#),
            Ok(Some(Command::Move(Direction::Down)))
        );
        assert_eq!(Command::parse(r#"{"command":"quit"}"#), Ok(Some(Command::Quit)));
        assert!(Command::parse("jump").is_err());
        assert!(Command::parse("save").is_err());
        assert!(Command::parse(r#"{"move":"sideways"}"#).is_err());
    }

    #[test]
    fn move_reply_reports_outcome_and_board() {
        let mut h = headless();
        let Some(Some(Reply::Observation(obs))) = h.handle_line("left") else {
            panic!("expected an observation");
        };
        assert_eq!(obs.outcome.as_deref(), Some("normal"));
        assert_eq!(obs.score, 4);
        assert_eq!(&obs.board[0][..2], &[2, 2]);
        assert!(obs.spawned.is_some());

        let json: serde_json::Value =
            serde_json::from_str(&Reply::Observation(obs).to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "observation");
        assert_eq!(json["game_over"], false);
        assert_eq!(json["board"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn unknown_command_is_an_error_reply() {
        let mut h = headless();
        let Some(Some(reply)) = h.handle_line("jump") else {
            panic!("expected a reply");
        };
        let json: serde_json::Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], "invalid_command");
    }

    #[test]
    fn run_stops_at_quit() {
        let mut h = headless();
        let input = "state\nleft\nquit\nright\n";
        let mut out = Vec::new();
        h.run(input.as_bytes(), &mut out).unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
        // initial observation, state, left
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.contains("\"type\":\"observation\"")));
        assert_eq!(h.game().score(), 4);
    }

    #[test]
    fn save_writes_file_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = headless();
        let target = dir.path().join("run");
        let Some(Some(Reply::Ack(ack))) = h.handle_line(&format!("save {}", target.display()))
        else {
            panic!("expected an ack");
        };
        assert!(ack.path.ends_with("run.2048"));
        let restored = GameState::load(dir.path().join("run.2048"), SimpleRng::new(1)).unwrap();
        assert_eq!(restored.grid(), h.game().grid());
    }
}
