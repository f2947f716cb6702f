use validator::Validate;

use crate::{
    dto::game::{NewGame, NewPlayer, NewScore},
    error::{LedgerError, LedgerResult},
    state::{GameId, PlayerId, ResultId, write_once::WriteOnce},
};

/// A playable game. Its title can be set once and is locked afterwards.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    title: WriteOnce<String>,
}

/// A participant. The username may be changed any number of times.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    username: Option<String>,
}

/// Score awarded for one play, always within `1..=5000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u16);

/// Join entity linking one player, one game, and the score obtained.
///
/// Every field is write-once. A result recorded under the partial policy may have unset fields;
/// queries skip a result whose relevant field is unset.
#[derive(Debug, Clone)]
pub struct GameResult {
    id: ResultId,
    player: WriteOnce<PlayerId>,
    game: WriteOnce<GameId>,
    score: WriteOnce<Score>,
}

impl Game {
    /// Build a game without a title.
    pub fn untitled() -> Self {
        Self {
            id: GameId::new(),
            title: WriteOnce::new("title"),
        }
    }

    /// Identity handle of this game.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Current title, `None` until a valid one has been set.
    pub fn title(&self) -> Option<&str> {
        self.title.get().map(String::as_str)
    }

    /// Set the title if none is present and the value is non-empty.
    pub fn set_title(&mut self, title: impl Into<String>) -> LedgerResult<()> {
        self.title.ensure_unset()?;

        let input = NewGame {
            title: title.into(),
        };
        input
            .validate()
            .map_err(|errors| LedgerError::invalid("title", errors))?;

        self.title.set(input.title)
    }
}

impl Player {
    /// Build a player without a username.
    pub fn anonymous() -> Self {
        Self {
            id: PlayerId::new(),
            username: None,
        }
    }

    /// Identity handle of this player.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current username, `None` until a valid one has been set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Replace the username when the new value is 2 to 16 characters long.
    ///
    /// A rejected value leaves the previous username in place.
    pub fn set_username(&mut self, username: impl Into<String>) -> LedgerResult<()> {
        let input = NewPlayer {
            username: username.into(),
        };
        input
            .validate()
            .map_err(|errors| LedgerError::invalid("username", errors))?;

        self.username = Some(input.username);
        Ok(())
    }
}

impl Score {
    /// Lowest accepted score.
    pub const MIN: i64 = 1;
    /// Highest accepted score.
    pub const MAX: i64 = 5000;

    /// Numeric value of the score.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        NewScore { value }
            .validate()
            .map_err(|errors| LedgerError::invalid("score", errors))?;

        u16::try_from(value)
            .map(Score)
            .map_err(|err| LedgerError::InvalidValue {
                field: "score",
                reason: err.to_string(),
            })
    }
}

impl GameResult {
    /// Result with every field unset.
    pub(crate) fn empty() -> Self {
        Self {
            id: ResultId::new(),
            player: WriteOnce::new("player"),
            game: WriteOnce::new("game"),
            score: WriteOnce::new("score"),
        }
    }

    /// Identity handle of this result.
    pub fn id(&self) -> ResultId {
        self.id
    }

    /// Player of this result, `None` if it was rejected.
    pub fn player(&self) -> Option<PlayerId> {
        self.player.get().copied()
    }

    /// Game of this result, `None` if it was rejected.
    pub fn game(&self) -> Option<GameId> {
        self.game.get().copied()
    }

    /// Score of this result, `None` if it was rejected.
    pub fn score(&self) -> Option<Score> {
        self.score.get().copied()
    }

    /// True once player, game, and score are all set.
    pub fn is_complete(&self) -> bool {
        self.player.is_set() && self.game.is_set() && self.score.is_set()
    }

    /// Lock the player. The caller is responsible for checking the handle exists.
    pub(crate) fn assign_player(&mut self, player: PlayerId) -> LedgerResult<()> {
        self.player.set(player)
    }

    /// Lock the game. The caller is responsible for checking the handle exists.
    pub(crate) fn assign_game(&mut self, game: GameId) -> LedgerResult<()> {
        self.game.set(game)
    }

    /// Lock the score.
    pub(crate) fn assign_score(&mut self, score: Score) -> LedgerResult<()> {
        self.score.set(score)
    }
}
