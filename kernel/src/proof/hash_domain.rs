//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. This module is
//! the single authority for domain-separator byte strings; the enum, its byte
//! mapping, `ALL`, and `Display` are generated from one macro invocation so
//! they cannot drift apart.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string that is
        /// fed to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Lexicon snapshot: the sorted, newline-joined word list.
    Lexicon => b"LADDER::LEXICON::V1\0",

    /// Canonical JSON of a `SearchPolicy`.
    SearchPolicy => b"LADDER::SEARCH_POLICY::V1\0",

    /// Canonical JSON of a search audit graph.
    SearchGraph => b"LADDER::SEARCH_GRAPH::V1\0",

    /// Canonical JSON of a harness query report (digest basis).
    QueryReport => b"LADDER::QUERY_REPORT::V1\0",
}
