//! Iterated Prisoner's Dilemma research toolkit
//!
//! This crate provides:
//! - A validated payoff model for the two-player dilemma
//! - Stochastic reactive strategies described by conditional cooperation tables
//! - Closed-form Zero-Determinant strategy derivations (Press & Dyson)
//! - A seedable match engine and roster tournament runner
//! - CSV and JSON export of result tables for external reporting

pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod game;
pub mod strategy;
pub mod tournament;
pub mod types;
pub mod zd;

pub use engine::{MatchEngine, MatchOutcome, MatchTrace};
pub use error::{Error, Result};
pub use game::{Action, PayoffMatrix};
pub use strategy::{ConditionalMatrix, StrategySpec, reference_roster};
pub use tournament::{Tournament, TournamentConfig, TournamentRow, TournamentTable};
pub use types::Probability;
