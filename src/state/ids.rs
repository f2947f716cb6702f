//! Identity handles for ledger entities.
//!
//! Two handles are equal only when they point at the same entity: equal titles or usernames
//! never make two entities the same.

use std::fmt;

use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocate a fresh identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Underlying UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Handle to a [`Game`](crate::state::game::Game) owned by a ledger.
    GameId
);
entity_id!(
    /// Handle to a [`Player`](crate::state::game::Player) owned by a ledger.
    PlayerId
);
entity_id!(
    /// Handle to a [`GameResult`](crate::state::game::GameResult) owned by a ledger.
    ResultId
);
