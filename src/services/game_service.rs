use indexmap::IndexSet;

use crate::{
    services::player_service::PlayerView,
    state::{
        GameId, Ledger, PlayerId,
        game::{Game, GameResult},
    },
};

/// Read-only view of a game together with the ledger it belongs to.
///
/// Every query scans the ledger's results afresh, so views never go stale.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    ledger: &'a Ledger,
    game: &'a Game,
}

impl Ledger {
    /// Look up a game and expose its derived queries.
    pub fn game(&self, id: GameId) -> Option<GameView<'_>> {
        self.game_entity(id).map(|game| GameView { ledger: self, game })
    }
}

impl<'a> GameView<'a> {
    /// Identity handle of the game.
    pub fn id(&self) -> GameId {
        self.game.id()
    }

    /// Title of the game, `None` while unset.
    pub fn title(&self) -> Option<&'a str> {
        self.game.title()
    }

    /// Results recorded for this game, in insertion order.
    pub fn results(&self) -> Vec<&'a GameResult> {
        let id = self.id();
        self.ledger
            .results()
            .filter(|result| result.game() == Some(id))
            .collect()
    }

    /// Distinct players who played this game, in order of their first result.
    pub fn players(&self) -> Vec<PlayerView<'a>> {
        self.results()
            .into_iter()
            .filter_map(GameResult::player)
            .collect::<IndexSet<PlayerId>>()
            .into_iter()
            .filter_map(|id| self.ledger.player(id))
            .collect()
    }

    /// Mean score of `player` on this game.
    ///
    /// Returns `0.0` when the player has no scored result here; results without a score are
    /// ignored.
    pub fn average_score(&self, player: PlayerId) -> f64 {
        let scores = self
            .results()
            .into_iter()
            .filter(|result| result.player() == Some(player))
            .filter_map(GameResult::score)
            .map(|score| f64::from(score.get()))
            .collect::<Vec<_>>();

        if scores.is_empty() {
            return 0.0;
        }

        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

impl PartialEq for GameView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for GameView<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_two_scores() {
        let mut ledger = Ledger::new();
        let game = ledger.add_game("Mario Kart");
        let alice = ledger.add_player("alice");
        ledger.record_result(alice, game, 3000).unwrap();
        ledger.record_result(alice, game, 4000).unwrap();

        let view = ledger.game(game).unwrap();
        assert_eq!(view.average_score(alice), 3500.0);
        assert_eq!(view.results().len(), 2);
        assert_eq!(
            view.players().iter().map(PlayerView::id).collect::<Vec<_>>(),
            vec![alice]
        );
    }

    #[test]
    fn average_without_results_is_zero() {
        let mut ledger = Ledger::new();
        let game = ledger.add_game("Tetris");
        let bob = ledger.add_player("bob");

        assert_eq!(ledger.game(game).unwrap().average_score(bob), 0.0);
    }

    #[test]
    fn players_keep_first_occurrence_order() {
        let mut ledger = Ledger::new();
        let game = ledger.add_game("Tetris");
        let alice = ledger.add_player("alice");
        let bob = ledger.add_player("bob");
        ledger.record_result(bob, game, 10).unwrap();
        ledger.record_result(alice, game, 20).unwrap();
        ledger.record_result(bob, game, 30).unwrap();

        let players = ledger.game(game).unwrap().players();
        assert_eq!(
            players.iter().map(PlayerView::id).collect::<Vec<_>>(),
            vec![bob, alice]
        );
    }

    #[test]
    fn results_are_scoped_to_the_game() {
        let mut ledger = Ledger::new();
        let tetris = ledger.add_game("Tetris");
        let doom = ledger.add_game("Doom");
        let alice = ledger.add_player("alice");
        ledger.record_result(alice, tetris, 10).unwrap();
        ledger.record_result(alice, doom, 20).unwrap();

        let results = ledger.game(doom).unwrap().results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score().map(|score| score.get()), Some(20));
        assert_eq!(ledger.game(doom).unwrap().average_score(alice), 20.0);
    }

    #[test]
    fn games_with_equal_titles_do_not_share_results() {
        let mut ledger = Ledger::new();
        let first = ledger.add_game("Tetris");
        let second = ledger.add_game("Tetris");
        let alice = ledger.add_player("alice");
        ledger.record_result(alice, first, 10).unwrap();

        assert!(ledger.game(second).unwrap().results().is_empty());
        assert!(ledger.game(first).unwrap() != ledger.game(second).unwrap());
    }
}
