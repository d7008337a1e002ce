mod helpers;

use helpers::{EnvGuard, run_cli};
use serial_test::serial;

fn field(stdout: &str, prefix: &str) -> u64 {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix(prefix))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(|| panic!("missing {:?} in {}", prefix, stdout))
}

#[test]
#[serial]
fn sim_outcomes_add_up_to_game_count() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["sim", "--games", "20", "--seed", "100"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let alice = field(&res.stdout, "Alice wins: ");
    let bob = field(&res.stdout, "Bob wins: ");
    let draws = field(&res.stdout, "Draws: ");
    assert_eq!(alice + bob + draws, 20);
    assert!(res.stdout.contains("Longest game: "));
}

#[test]
#[serial]
fn sim_writes_one_summary_per_game() {
    let _env = EnvGuard::clean();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("runs").join("sim.jsonl");
    let out_str = out.to_string_lossy().into_owned();

    let res = run_cli(&["sim", "--games", "4", "--seed", "7", "--output", &out_str]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    for (i, v) in lines.iter().enumerate() {
        assert_eq!(v["game"].as_u64(), Some(i as u64 + 1));
        assert_eq!(v["seed"].as_u64(), Some(7 + i as u64));
        let cards = v["cards"].as_array().unwrap();
        let total: u64 = cards.iter().map(|c| c.as_u64().unwrap()).sum();
        assert_eq!(total, 52);
    }
}

#[test]
#[serial]
fn sim_same_seed_same_report() {
    let _env = EnvGuard::clean();
    let a = run_cli(&["sim", "--games", "10", "--seed", "77", "--no-recycle"]);
    let b = run_cli(&["sim", "--games", "10", "--seed", "77", "--no-recycle"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn sim_warns_when_turn_limit_decides_games() {
    let _env = EnvGuard::apply(&[("WARSIM_MAX_TURNS", "1")]);
    let res = run_cli(&["sim", "--games", "3", "--seed", "1"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stderr.contains("WARNING: 3 game(s) reached the 1-turn limit"));
}

#[test]
#[serial]
fn sim_zero_games_exits_with_error() {
    let _env = EnvGuard::clean();
    let res = run_cli(&["sim", "--games", "0"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("games must be >= 1"));
}
