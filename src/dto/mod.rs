//! Validated inputs accepted by the ledger.

/// Inputs for games, players, and results.
pub mod game;
pub mod validation;
