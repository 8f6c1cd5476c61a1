//! Dense integer identifiers.
//!
//! Callers name locations with strings (`"A_Home"`); the catalog assigns each
//! one a `NodeId` in declaration order, and the weighted graph, router and
//! risk index work purely in these ids.  `id.index()` is the slot in every
//! per-node / per-arc / per-zone `Vec`.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Marks an unset slot, e.g. the predecessor arc of an unreached node.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Fails once a collection outgrows the id width.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(slot: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(slot).map($name)
            }
        }
    };
}

typed_id! {
    /// A location in the node catalog and the weighted graph.
    pub struct NodeId(u32);
}

typed_id! {
    /// A directed arc in the weighted graph; each street is two arcs.
    pub struct EdgeId(u32);
}

typed_id! {
    /// A risk zone.  Lower ids were declared first.
    pub struct ZoneId(u32);
}
