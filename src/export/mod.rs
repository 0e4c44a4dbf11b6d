//! Result export for external reporting.
//!
//! The simulation core hands presentation off to these writers: CSV tables
//! for spreadsheets and charts, JSON summaries for downstream analysis.
//! Nothing here feeds back into the simulation.

mod tables;

pub use tables::{RunSummary, write_summary_json, write_table_csv, write_trace_csv};
