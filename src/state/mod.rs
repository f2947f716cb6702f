/// Games, players, and results owned by a ledger.
pub mod game;
mod ids;
/// Write-once field storage.
pub mod write_once;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    config::LedgerConfig,
    error::{LedgerError, LedgerResult},
    state::game::{Game, GameResult, Player, Score},
};

pub use self::ids::{GameId, PlayerId, ResultId};

/// Store owning every game, player, and result of one session.
///
/// Results are append-only: once recorded they are never removed, and their insertion order is
/// the order every query reports them in. Each ledger is independent of any other.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: LedgerConfig,
    games: IndexMap<GameId, Game>,
    players: IndexMap<PlayerId, Player>,
    results: IndexMap<ResultId, GameResult>,
}

impl Ledger {
    /// Empty ledger using the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty ledger using the provided configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Configuration this ledger was built with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Create a game. An invalid title is logged and leaves the game untitled.
    pub fn add_game(&mut self, title: impl Into<String>) -> GameId {
        let mut game = Game::untitled();
        if let Err(err) = game.set_title(title) {
            warn!(game_id = %game.id(), error = %err, "game created without a title");
        }

        let id = game.id();
        self.games.insert(id, game);
        debug!(game_id = %id, "game added");
        id
    }

    /// Create a player. An invalid username is logged and leaves the player anonymous.
    pub fn add_player(&mut self, username: impl Into<String>) -> PlayerId {
        let mut player = Player::anonymous();
        if let Err(err) = player.set_username(username) {
            warn!(player_id = %player.id(), error = %err, "player created without a username");
        }

        let id = player.id();
        self.players.insert(id, player);
        debug!(player_id = %id, "player added");
        id
    }

    /// Game entity behind `id`; see [`Ledger::game`] for its queries.
    pub fn game_entity(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Player entity behind `id`; see [`Ledger::player`] for its queries.
    pub fn player_entity(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Recorded result behind `id`.
    pub fn result(&self, id: ResultId) -> Option<&GameResult> {
        self.results.get(&id)
    }

    /// All games in creation order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    /// All players in creation order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// All recorded results in insertion order.
    pub fn results(&self) -> impl Iterator<Item = &GameResult> {
        self.results.values()
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True while no result has been recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Set the title of a game that has none yet.
    pub fn set_game_title(&mut self, id: GameId, title: impl Into<String>) -> LedgerResult<()> {
        let game = self
            .games
            .get_mut(&id)
            .ok_or(LedgerError::UnknownGame(id))?;
        game.set_title(title)
    }

    /// Replace a player's username; invalid values leave the current one untouched.
    pub fn set_player_username(
        &mut self,
        id: PlayerId,
        username: impl Into<String>,
    ) -> LedgerResult<()> {
        let player = self
            .players
            .get_mut(&id)
            .ok_or(LedgerError::UnknownPlayer(id))?;
        player.set_username(username)
    }

    /// Fill the player of a result recorded without one.
    pub fn set_result_player(&mut self, id: ResultId, player: PlayerId) -> LedgerResult<()> {
        let player = self.require_player(player)?;
        self.result_mut(id)?.assign_player(player)
    }

    /// Fill the game of a result recorded without one.
    pub fn set_result_game(&mut self, id: ResultId, game: GameId) -> LedgerResult<()> {
        let game = self.require_game(game)?;
        self.result_mut(id)?.assign_game(game)
    }

    /// Fill the score of a result recorded without one.
    pub fn set_result_score(&mut self, id: ResultId, score: i64) -> LedgerResult<()> {
        let score = Score::try_from(score)?;
        self.result_mut(id)?.assign_score(score)
    }

    /// Check that `id` names a player of this ledger.
    pub(crate) fn require_player(&self, id: PlayerId) -> LedgerResult<PlayerId> {
        if self.players.contains_key(&id) {
            Ok(id)
        } else {
            Err(LedgerError::UnknownPlayer(id))
        }
    }

    /// Check that `id` names a game of this ledger.
    pub(crate) fn require_game(&self, id: GameId) -> LedgerResult<GameId> {
        if self.games.contains_key(&id) {
            Ok(id)
        } else {
            Err(LedgerError::UnknownGame(id))
        }
    }

    /// Append a result. This is the only way results enter the ledger.
    pub(crate) fn append_result(&mut self, result: GameResult) -> ResultId {
        let id = result.id();
        debug!(
            result_id = %id,
            complete = result.is_complete(),
            total = self.results.len() + 1,
            "result recorded"
        );
        self.results.insert(id, result);
        id
    }

    fn result_mut(&mut self, id: ResultId) -> LedgerResult<&mut GameResult> {
        self.results
            .get_mut(&id)
            .ok_or(LedgerError::UnknownResult(id))
    }
}
