use indexmap::IndexSet;
use tracing::debug;

use crate::{
    services::game_service::GameView,
    state::{
        GameId, Ledger, PlayerId,
        game::{GameResult, Player},
    },
};

/// Read-only view of a player together with the ledger it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    ledger: &'a Ledger,
    player: &'a Player,
}

impl Ledger {
    /// Look up a player and expose its derived queries.
    pub fn player(&self, id: PlayerId) -> Option<PlayerView<'_>> {
        self.player_entity(id)
            .map(|player| PlayerView { ledger: self, player })
    }
}

impl<'a> PlayerView<'a> {
    /// Identity handle of the player.
    pub fn id(&self) -> PlayerId {
        self.player.id()
    }

    /// Username of the player, `None` while unset.
    pub fn username(&self) -> Option<&'a str> {
        self.player.username()
    }

    /// Results recorded for this player, in insertion order.
    pub fn results(&self) -> Vec<&'a GameResult> {
        let id = self.id();
        self.ledger
            .results()
            .filter(|result| result.player() == Some(id))
            .collect()
    }

    /// Distinct games this player has played, in order of their first result.
    pub fn games_played(&self) -> Vec<GameView<'a>> {
        self.results()
            .into_iter()
            .filter_map(GameResult::game)
            .collect::<IndexSet<GameId>>()
            .into_iter()
            .filter_map(|id| self.ledger.game(id))
            .collect()
    }

    /// Whether this player has at least one result for `game`.
    pub fn played_game(&self, game: GameId) -> bool {
        self.games_played().iter().any(|played| played.id() == game)
    }

    /// Number of results linking this player to `game`, scored or not.
    pub fn num_times_played(&self, game: GameId) -> usize {
        self.results()
            .into_iter()
            .filter(|result| result.game() == Some(game))
            .count()
    }

    /// Player with the best average score on `game`.
    ///
    /// Ties go to whoever appears first in [`GameView::players`]. `None` when nobody played.
    pub fn highest_scored(game: &GameView<'a>) -> Option<PlayerView<'a>> {
        let mut best: Option<(PlayerView<'a>, f64)> = None;

        for player in game.players() {
            let average = game.average_score(player.id());
            let improves = match best {
                Some((_, top)) => average > top,
                None => true,
            };
            if improves {
                best = Some((player, average));
            }
        }

        if let Some((player, average)) = &best {
            debug!(
                game_id = %game.id(),
                player_id = %player.id(),
                average,
                "highest scorer resolved"
            );
        }

        best.map(|(player, _)| player)
    }
}

impl PartialEq for PlayerView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for PlayerView<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn games_played_are_unique() {
        let mut ledger = Ledger::new();
        let tetris = ledger.add_game("Tetris");
        let doom = ledger.add_game("Doom");
        let alice = ledger.add_player("alice");
        ledger.record_result(alice, doom, 10).unwrap();
        ledger.record_result(alice, tetris, 20).unwrap();
        ledger.record_result(alice, doom, 30).unwrap();

        let view = ledger.player(alice).unwrap();
        assert_eq!(
            view.games_played()
                .iter()
                .map(GameView::id)
                .collect::<Vec<_>>(),
            vec![doom, tetris]
        );
        assert_eq!(view.num_times_played(doom), 2);
        assert_eq!(view.num_times_played(tetris), 1);
        assert_eq!(view.results().len(), 3);
    }

    #[test]
    fn played_game_checks_identity() {
        let mut ledger = Ledger::new();
        let tetris = ledger.add_game("Tetris");
        let other_tetris = ledger.add_game("Tetris");
        let alice = ledger.add_player("alice");
        ledger.record_result(alice, tetris, 100).unwrap();

        let view = ledger.player(alice).unwrap();
        assert!(view.played_game(tetris));
        assert!(!view.played_game(other_tetris));
        assert_eq!(view.num_times_played(other_tetris), 0);
    }

    #[test]
    fn highest_scored_picks_best_average() {
        let mut ledger = Ledger::new();
        let game = ledger.add_game("Mario Kart");
        let alice = ledger.add_player("alice");
        let bob = ledger.add_player("bob");
        ledger.record_result(alice, game, 100).unwrap();
        ledger.record_result(bob, game, 4000).unwrap();
        ledger.record_result(alice, game, 200).unwrap();

        let game = ledger.game(game).unwrap();
        let best = PlayerView::highest_scored(&game).unwrap();
        assert_eq!(best.id(), bob);
        assert_eq!(best.username(), Some("bob"));
    }

    #[test]
    fn highest_scored_tie_goes_to_first_player() {
        let mut ledger = Ledger::new();
        let game = ledger.add_game("Mario Kart");
        let alice = ledger.add_player("alice");
        let bob = ledger.add_player("bob");
        ledger.record_result(bob, game, 2000).unwrap();
        ledger.record_result(alice, game, 1000).unwrap();
        ledger.record_result(alice, game, 3000).unwrap();

        let game = ledger.game(game).unwrap();
        assert_eq!(PlayerView::highest_scored(&game).unwrap().id(), bob);
    }

    #[test]
    fn highest_scored_without_players_is_none() {
        let mut ledger = Ledger::new();
        let game = ledger.add_game("Tetris");

        let game = ledger.game(game).unwrap();
        assert!(PlayerView::highest_scored(&game).is_none());
    }
}
