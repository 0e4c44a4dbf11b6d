//! CSV and JSON writers for tournament results and match traces.

use std::{fs::File, path::Path};

use csv::Writer;
use serde::Serialize;

use crate::{
    engine::MatchTrace,
    error::{Error, Result},
    game::PayoffMatrix,
    tournament::TournamentTable,
};

/// JSON summary of a full tournament run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub payoffs: PayoffMatrix,
    pub rounds: u32,
    pub trials: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub tables: Vec<TournamentTable>,
}

/// Write a tournament table as CSV, one row per opponent in roster order.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record cannot be
/// written.
pub fn write_table_csv(path: &Path, table: &TournamentTable) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["opponent", "player_mean", "opponent_mean"])?;
    for row in &table.rows {
        writer.write_record([
            row.opponent.clone(),
            format!("{:.2}", row.mean_self),
            format!("{:.2}", row.mean_opponent),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the running-mean trajectory of a traced match as CSV.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record cannot be
/// written.
pub fn write_trace_csv(path: &Path, trace: &MatchTrace) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["round", "player_mean", "opponent_mean"])?;
    for (round, (mean_a, mean_b)) in trace.running_means.iter().enumerate() {
        writer.write_record([
            round.to_string(),
            format!("{mean_a:.4}"),
            format!("{mean_b:.4}"),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a pretty-printed JSON summary of a tournament run.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create summary file {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::tournament::TournamentRow;

    use super::*;

    fn sample_table() -> TournamentTable {
        TournamentTable {
            strategy: "Tit for Tat".to_string(),
            rows: vec![
                TournamentRow {
                    opponent: "Always Cooperate".to_string(),
                    mean_self: 3.0,
                    mean_opponent: 3.0,
                },
                TournamentRow {
                    opponent: "Always Defect".to_string(),
                    mean_self: 0.99,
                    mean_opponent: 1.04,
                },
            ],
        }
    }

    #[test]
    fn test_table_csv_shape() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("table.csv");
        write_table_csv(&path, &sample_table()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "opponent,player_mean,opponent_mean");
        assert_eq!(lines[1], "Always Cooperate,3.00,3.00");
        assert_eq!(lines[2], "Always Defect,0.99,1.04");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_trace_csv_shape() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("trace.csv");
        let trace = MatchTrace {
            running_means: vec![(3.0, 3.0), (4.0, 1.5)],
        };
        write_trace_csv(&path, &trace).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "round,player_mean,opponent_mean");
        assert_eq!(lines[1], "0,3.0000,3.0000");
        assert_eq!(lines[2], "1,4.0000,1.5000");
    }

    #[test]
    fn test_summary_json_round_trips() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("summary.json");
        let summary = RunSummary {
            payoffs: PayoffMatrix::standard(),
            rounds: 100,
            trials: 1,
            seed: Some(42),
            tables: vec![sample_table()],
        };
        write_summary_json(&path, &summary).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["rounds"], 100);
        assert_eq!(parsed["seed"], 42);
        assert_eq!(parsed["payoffs"]["reward"], 3.0);
        assert_eq!(parsed["tables"][0]["strategy"], "Tit for Tat");
        assert_eq!(parsed["tables"][0]["rows"].as_array().unwrap().len(), 2);
    }
}
