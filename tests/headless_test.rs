//! End-to-end JSON-lines play through the facade crate.

use serde_json::Value;

use tui_2048::core::{GameState, SimpleRng};
use tui_2048::headless::Headless;
use tui_2048::types::VariantKind;

fn run(input: &str) -> Vec<Value> {
    let game = GameState::new(VariantKind::Extended, SimpleRng::new(99));
    let mut out = Vec::new();
    Headless::new(game).run(input.as_bytes(), &mut out).unwrap();
    std::str::from_utf8(&out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid json"))
        .collect()
}

#[test]
fn headless_emits_one_message_per_command() {
    let msgs = run("left\n\n{\"move\":\"up\"}\nstate\nbogus\n");
    assert_eq!(msgs.len(), 5);

    let first = &msgs[0];
    assert_eq!(first["type"], "observation");
    assert_eq!(first["variant"], "extended");
    assert_eq!(first["rows"], 5);
    assert_eq!(first["columns"], 5);
    assert!(first.get("outcome").is_none());

    for m in &msgs[1..3] {
        assert_eq!(m["type"], "observation");
        assert!(m["outcome"].is_string());
    }
    assert_eq!(msgs[4]["type"], "error");
    assert_eq!(msgs[4]["code"], "invalid_command");

    let seqs: Vec<u64> = msgs.iter().map(|m| m["seq"].as_u64().unwrap()).collect();
    assert!(seqs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn headless_board_matches_tile_count() {
    let msgs = run("state\n");
    let board = msgs[1]["board"].as_array().unwrap();
    let tiles = board
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|v| v.as_u64().unwrap() != 0)
        .count();
    assert_eq!(tiles, 2);
}

#[test]
fn headless_save_acknowledges_path() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("bot");
    let msgs = run(&format!("save {}\nquit\n", target.display()));
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[1]["type"], "ack");
    assert!(dir.path().join("bot.2048").exists());

    let bad = dir.path().join("missing").join("bot");
    let msgs = run(&format!("save {}\n", bad.display()));
    assert_eq!(msgs[1]["type"], "error");
    assert_eq!(msgs[1]["code"], "save_failed");
}
