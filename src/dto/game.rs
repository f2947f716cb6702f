use validator::{Validate, ValidationErrors};

use crate::{
    dto::validation::validate_title,
    state::{GameId, PlayerId},
};

/// Payload used to create a game.
#[derive(Debug, Clone)]
pub struct NewGame {
    /// Title of the game; must not be empty.
    pub title: String,
}

impl Validate for NewGame {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_title(&self.title) {
            errors.add("title", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Payload used to create a player or rename one.
///
/// The length is counted in characters, not bytes.
#[derive(Debug, Clone, Validate)]
pub struct NewPlayer {
    /// Display name, 2 to 16 characters.
    #[validate(length(min = 2, max = 16))]
    pub username: String,
}

/// Raw score awarded for one play of a game.
#[derive(Debug, Clone, Copy, Validate)]
pub struct NewScore {
    /// Points obtained, within `1..=5000`.
    #[validate(range(min = 1, max = 5000))]
    pub value: i64,
}

/// Payload describing one played game and the score obtained.
#[derive(Debug, Clone, Validate)]
pub struct NewResult {
    /// Player who played.
    pub player: PlayerId,
    /// Game that was played.
    pub game: GameId,
    /// Score obtained for this play.
    #[validate(nested)]
    pub score: NewScore,
}
