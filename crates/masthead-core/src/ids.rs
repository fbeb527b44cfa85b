//! Typed identifiers for the three entity kinds.
//!
//! Ids are registry positions minted by a [`crate::Press`], tagged with that
//! press. Identity of an entity is its id, so two authors with the same name
//! are still distinct, and an id never resolves in a press that did not mint it.

use serde::Serialize;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $name {
            press: u64,
            index: usize,
        }

        impl $name {
            pub(crate) fn new(press: u64, index: usize) -> Self {
                Self { press, index }
            }

            /// Tag of the press that minted this id.
            pub(crate) fn press(self) -> u64 {
                self.press
            }

            /// Position of the entity in its registry (insertion order).
            pub fn index(self) -> usize {
                self.index
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.index)
            }
        }
    };
}

entity_id!(
    /// Identifies an [`crate::Author`].
    AuthorId,
    "author"
);
entity_id!(
    /// Identifies a [`crate::Magazine`].
    MagazineId,
    "magazine"
);
entity_id!(
    /// Identifies an [`crate::Article`].
    ArticleId,
    "article"
);
