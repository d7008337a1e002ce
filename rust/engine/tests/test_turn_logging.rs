use std::fs;
use std::path::PathBuf;

use warsim_engine::cards::{Card, Rank as R, Suit as S};
use warsim_engine::game::Game;
use warsim_engine::logger::{EndReason, Reveal, TurnLogger, TurnRecord};
use warsim_engine::player::Player;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample(turn: u32) -> TurnRecord {
    TurnRecord {
        turn,
        reveals: vec![Reveal {
            first: Card {
                suit: S::Clubs,
                rank: R::Ace,
            },
            second: Card {
                suit: S::Hearts,
                rank: R::Two,
            },
        }],
        wars: 0,
        winner: Some(0),
        cards_won: 2,
        game_over: None,
        settlement: None,
        ts: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("turnlog");
    let mut logger = TurnLogger::create(&path).expect("create logger");
    logger.write(&sample(1)).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(logger.written(), 1);
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("turnlog_ts");
    let mut logger = TurnLogger::create(&path).expect("create logger");
    logger.write(&sample(1)).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":\""), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = TurnRecord {
        ts: Some(preset.clone()),
        ..sample(2)
    };
    logger.write(&rec2).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn full_game_log_parses_back() {
    let path = tmp_path("turnlog_game");
    let p1 = Player::new("Alice").unwrap();
    let p2 = Player::new("Bob").unwrap();
    let mut game = Game::with_seed(&p1, &p2, 123).unwrap();
    game.play_all();

    let mut logger = TurnLogger::create(&path).expect("create logger");
    logger.write_all(game.log()).expect("write log");

    let content = fs::read_to_string(&path).unwrap();
    let parsed: Vec<TurnRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert_eq!(parsed.len(), game.log().len());
    assert_eq!(parsed.last().and_then(|r| r.game_over), game.end_reason());
    assert_eq!(parsed[0].reveals, game.log()[0].reveals);
}

#[test]
fn end_reason_serializes_snake_case() {
    let rec = TurnRecord {
        game_over: Some(EndReason::OutOfCardsInWar),
        settlement: None,
        ..sample(3)
    };
    let json = serde_json::to_string(&rec).unwrap();
    assert!(json.contains("\"game_over\":\"out_of_cards_in_war\""));
}

#[test]
fn discard_logger_counts_without_a_file() {
    let mut logger = TurnLogger::discard();
    logger.write(&sample(1)).unwrap();
    logger.write(&sample(2)).unwrap();
    assert_eq!(logger.written(), 2);
}
