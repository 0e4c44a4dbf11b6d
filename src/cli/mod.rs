//! CLI infrastructure for the dilemma research toolkit
//!
//! This module provides the command-line interface for simulating matches,
//! running roster tournaments, and deriving Zero-Determinant strategies.

pub mod commands;
pub mod output;
