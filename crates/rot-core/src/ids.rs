//! Strongly typed positional identifiers.
//!
//! Slots, tracks and items are addressed by their position in the ordered
//! configuration: a `TrackId` is the index of a track within its slot, an
//! `ItemId` the index of an item within its track.  The inner integer is
//! `pub`; prefer `.index()` when indexing a `Vec`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Position of an event slot within its schedule.
    pub struct SlotId(u16);
}

typed_id! {
    /// Position of a rotation track (game mode) within its slot.
    pub struct TrackId(u16);
}

typed_id! {
    /// Position of an item (map) within its track.
    pub struct ItemId(u16);
}
