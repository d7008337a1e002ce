//! Statistics aggregation over a JSONL turn log.
//!
//! The log is what `warsim play --log` writes: one `TurnRecord` per line.
//! Seats are reported as "Player 1" and "Player 2" because the log does not
//! carry player names.

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::ui;
use std::io::Write;
use warsim_engine::logger::TurnRecord;
use warsim_engine::report::{GameStats, describe_stats};

const SEAT_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Aggregates statistics from a turn log.
///
/// Blank lines are ignored. A truncated final line (no trailing newline) is
/// skipped; any other unreadable line counts as corrupted. Both are reported
/// as warnings and never abort the run.
///
/// # Errors
///
/// - `CliError::Io` if the file cannot be read
/// - `CliError::InvalidInput` if the file holds no valid turn record
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text(input) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::Io(std::io::Error::other(e)));
        }
    };

    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut records = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;
    let mut corrupted = 0usize;
    for (i, line) in lines.iter().enumerate() {
        match serde_json::from_str::<TurnRecord>(line) {
            Ok(r) => records.push(r),
            Err(_) if i == lines.len() - 1 && !has_trailing_nl => skipped += 1,
            Err(_) => corrupted += 1,
        }
    }

    if corrupted > 0 {
        ui::display_warning(err, &format!("{} corrupted record(s) ignored", corrupted))?;
    }
    if skipped > 0 {
        ui::display_warning(err, &format!("{} incomplete trailing record skipped", skipped))?;
    }
    if records.is_empty() {
        ui::write_error(err, &format!("No turn records found in {}", input))?;
        return Err(CliError::InvalidInput(format!(
            "No turn records found in {}",
            input
        )));
    }

    let out_of_order = records
        .windows(2)
        .filter(|w| w[1].turn <= w[0].turn)
        .count();
    if out_of_order > 0 {
        ui::display_warning(
            err,
            &format!("{} turn number(s) out of sequence", out_of_order),
        )?;
    }

    let stats = GameStats::from_records(&records);
    write!(out, "{}", describe_stats(&stats, SEAT_NAMES))?;
    if let Some(reason) = records.iter().rev().find_map(|r| r.game_over) {
        writeln!(out, "Game over: {:?}", reason)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const LINE: &str = r#"{"turn":1,"reveals":[{"first":{"rank":"Ace","suit":"Spades"},"second":{"rank":"Two","suit":"Hearts"}}],"wars":0,"winner":0,"cards_won":2}"#;

    #[test]
    fn test_stats_reads_single_record() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{}", LINE).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(f.path().to_str().unwrap(), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Turns played: 1"));
        assert!(output.contains("Player 1: won 1 turns"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_stats_rejects_file_without_records() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "not json").unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_stats_command(f.path().to_str().unwrap(), &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("1 corrupted record(s) ignored"));
    }
}
