//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{WIResult, WordindexError};

/// A type that can be used as a vocabulary index.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max index in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Validates that every index of a vocab of `vocab_size` fits in `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> WIResult<usize> {
    if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
        Err(WordindexError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WIHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WIHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WIHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WIHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WIHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WIHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u8>;
        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u8>(0).unwrap(), 0);
        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(matches!(
            try_vocab_size::<u8>(257),
            Err(WordindexError::VocabSizeOverflow { size: 257 })
        ));

        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(try_vocab_size::<u16>(u16::MAX as usize + 2).is_err());
    }
}
