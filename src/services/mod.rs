/// Queries derived from a game's results.
pub mod game_service;
/// Queries derived from a player's results, including the best scorer of a game.
pub mod player_service;
/// Recording of results under the configured policy.
pub mod result_service;
