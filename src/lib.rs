//! In-memory ledger of games, players, and the scored results linking them.
//!
//! A [`Ledger`] owns every entity. Games and players are reached through identity handles
//! ([`GameId`], [`PlayerId`]); results are recorded once and never removed, and every derived
//! query scans them afresh.

mod config;
pub mod dto;
mod error;
/// Queries over a ledger and the recording of results.
pub mod services;
/// Entities and the ledger that owns them.
pub mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::{LedgerConfig, ResultPolicy};
pub use error::{LedgerError, LedgerResult};
pub use services::{game_service::GameView, player_service::PlayerView};
pub use state::{
    GameId, Ledger, PlayerId, ResultId,
    game::{Game, GameResult, Player, Score},
};

/// Configure tracing subscribers for applications embedding the ledger.
///
/// Honours `RUST_LOG` and defaults to `info`. Calling it more than once is harmless.
pub fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
