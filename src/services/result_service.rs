use tracing::warn;

use crate::{
    config::ResultPolicy,
    dto::game::{NewResult, NewScore},
    error::{LedgerError, LedgerResult},
    state::{
        GameId, Ledger, PlayerId, ResultId,
        game::{GameResult, Score},
    },
};

impl Ledger {
    /// Record that `player` played `game` and obtained `score`.
    ///
    /// Under [`ResultPolicy::Atomic`] the result is appended only when the player and game belong
    /// to this ledger and the score is within `1..=5000`; otherwise the first failure is
    /// returned and the ledger is left untouched. Under [`ResultPolicy::Partial`] the result is
    /// always appended with its invalid fields left unset.
    pub fn record_result(
        &mut self,
        player: PlayerId,
        game: GameId,
        score: i64,
    ) -> LedgerResult<ResultId> {
        let input = NewResult {
            player,
            game,
            score: NewScore { value: score },
        };

        match self.config().result_policy {
            ResultPolicy::Atomic => self.record_atomic(input),
            ResultPolicy::Partial => Ok(self.record_partial(input)),
        }
    }

    fn record_atomic(&mut self, input: NewResult) -> LedgerResult<ResultId> {
        let player = self.require_player(input.player)?;
        let game = self.require_game(input.game)?;
        let score = Score::try_from(input.score.value)?;

        let mut result = GameResult::empty();
        result.assign_player(player)?;
        result.assign_game(game)?;
        result.assign_score(score)?;

        Ok(self.append_result(result))
    }

    fn record_partial(&mut self, input: NewResult) -> ResultId {
        let mut result = GameResult::empty();

        if let Err(err) = self
            .require_player(input.player)
            .and_then(|player| result.assign_player(player))
        {
            log_rejected_field(result.id(), &err);
        }

        if let Err(err) = self
            .require_game(input.game)
            .and_then(|game| result.assign_game(game))
        {
            log_rejected_field(result.id(), &err);
        }

        if let Err(err) =
            Score::try_from(input.score.value).and_then(|score| result.assign_score(score))
        {
            log_rejected_field(result.id(), &err);
        }

        self.append_result(result)
    }
}

fn log_rejected_field(result_id: ResultId, err: &LedgerError) {
    warn!(
        %result_id,
        field = err.field().unwrap_or("unknown"),
        error = %err,
        "result recorded with an unset field"
    );
}
