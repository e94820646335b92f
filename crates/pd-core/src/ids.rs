//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they work as map keys and sort keys
//! without ceremony.  Agents, requests and trades live in different id spaces;
//! the wrappers keep a `RequestId` from ever being compared to an `AgentId`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The id immediately after this one.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
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
    /// Identifier of a simulation participant (truck, source, sink, …).
    pub struct AgentId(u32);
}

typed_id! {
    /// Identifier the exchange host assigns to each posted request.
    /// Unique within a single tick only.
    pub struct RequestId(u32);
}

typed_id! {
    /// Identifier the exchange host assigns to each cleared trade.
    /// Unique within a single tick only.
    pub struct TradeId(u32);
}
