//! OwnedChain - a singly linked chain that owns its storage.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chain::{Iter, PoolChainStorage};
use crate::{Chain, Index};

/// A singly linked chain that owns its node arena.
///
/// This is a convenience wrapper around [`Chain`] + [`PoolStorage`] for the
/// common case where storage is not shared with other chains. It is the
/// whole container in one handle: front/back insertion, front removal,
/// lookup, node swap, concatenation, structural equality, deep copy, and an
/// order-sensitive content hash.
///
/// [`PoolStorage`]: crate::PoolStorage
///
/// # Example
///
/// ```
/// use forward_chain::OwnedChain;
///
/// let mut chain: OwnedChain<&str> = OwnedChain::new();
///
/// chain.push_front("BBB");
/// chain.push_back("CCC");
/// chain.push_back("DDD");
/// chain.push_front("AAA");
///
/// assert_eq!(chain.len(), 4);
/// assert_eq!(chain.to_string(), "(AAA, BBB, CCC, DDD)");
///
/// chain.swap_values(&"CCC", &"DDD");
/// assert_eq!(chain.to_string(), "(AAA, BBB, DDD, CCC)");
/// ```
pub struct OwnedChain<T, Idx: Index = u32> {
    storage: PoolChainStorage<T, Idx>,
    chain: Chain<T, PoolChainStorage<T, Idx>, Idx>,
}

impl<T, Idx: Index> OwnedChain<T, Idx> {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self {
            storage: PoolChainStorage::new(),
            chain: Chain::new(),
        }
    }

    /// Creates an empty chain with room for `capacity` nodes before the
    /// arena grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: PoolChainStorage::with_capacity(capacity),
            chain: Chain::new(),
        }
    }

    /// Returns the number of elements in the chain.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the chain is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.chain.front(&self.storage)
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.chain.back(&self.storage)
    }

    /// Returns the head node's index, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<Idx> {
        self.chain.head()
    }

    /// Returns the tail node's index, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<Idx> {
        self.chain.tail()
    }

    /// Adds an element to the front of the chain. O(1).
    ///
    /// Returns the index of the new node.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Idx {
        self.chain.push_front(&mut self.storage, value)
    }

    /// Adds an element to the end of the chain. O(1).
    ///
    /// Returns the index of the new node.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Idx {
        self.chain.push_back(&mut self.storage, value)
    }

    /// Removes and returns the first element, or `None` if empty. O(1).
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_front(&mut self.storage)
    }

    /// Returns a reference to the element at the given index.
    #[inline]
    pub fn get(&self, index: Idx) -> Option<&T> {
        self.chain.get(&self.storage, index)
    }

    /// Returns a mutable reference to the element at the given index.
    #[inline]
    pub fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        self.chain.get_mut(&mut self.storage, index)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.chain.clear(&mut self.storage);
        self.storage.clear();
    }

    /// Returns an iterator over references to elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, PoolChainStorage<T, Idx>, Idx> {
        self.chain.iter(&self.storage)
    }

    /// Appends all of `other`'s elements after this chain's last element.
    ///
    /// Takes `other` by value: the appended chain is consumed, so its nodes
    /// can never be reached through a second handle afterwards. The nodes
    /// are migrated into this chain's arena in order, O(other.len()). An
    /// empty receiver simply takes over `other`'s contents.
    pub fn append(&mut self, mut other: Self) {
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Relinks the chain so the nodes at `a` and `b` exchange positions.
    ///
    /// Returns `false` without modification when `a == b`, either index does
    /// not name a live node, or the chain is empty. Handles adjacency in
    /// either order and updates the tail when an endpoint moves. O(len).
    #[inline]
    pub fn swap(&mut self, a: Idx, b: Idx) -> bool {
        self.chain.swap(&mut self.storage, a, b)
    }
}

impl<T: PartialEq, Idx: Index> OwnedChain<T, Idx> {
    /// Returns the index of the first node whose element equals `value`.
    ///
    /// Linear scan from the head; `None` on miss or when the chain is empty.
    /// The index is the node's identity: pass it to [`OwnedChain::swap`] to
    /// act on exactly the node found, regardless of duplicate elements.
    #[inline]
    pub fn find(&self, value: &T) -> Option<Idx> {
        self.chain.find(&self.storage, value)
    }

    /// Relinks the chain so the first nodes holding `e1` and `e2` exchange
    /// positions.
    ///
    /// No-op (returns `false`) when `e1` and `e2` are the same referent,
    /// either lookup misses, or the chain is empty.
    #[inline]
    pub fn swap_values(&mut self, e1: &T, e2: &T) -> bool {
        self.chain.swap_values(&mut self.storage, e1, e2)
    }
}

impl<T: Hash, Idx: Index> OwnedChain<T, Idx> {
    /// Computes an order-sensitive hash of the element sequence.
    ///
    /// Each element's hash is folded into the accumulator with XOR, and the
    /// accumulator is rotated left by 5 bits after each fold, so every
    /// rotation precedes the next element. Deterministic for a fixed
    /// sequence; `(a, b)` and `(b, a)` hash differently in general.
    pub fn sequence_hash(&self) -> u32 {
        let mut acc: u32 = 0;
        for element in self.iter() {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            element.hash(&mut hasher);
            acc ^= hasher.finish() as u32;
            acc = acc.rotate_left(5);
        }
        acc
    }
}

impl<T, Idx: Index> Default for OwnedChain<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: equal lengths and pairwise-equal elements in lockstep
/// head-to-tail order. Short-circuits on the first mismatch.
impl<T: PartialEq, Idx: Index> PartialEq for OwnedChain<T, Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Idx: Index> Eq for OwnedChain<T, Idx> {}

/// Deep copy: one fresh node per source node, same elements, same order,
/// in an independent arena. Elements are cloned with their own `Clone`
/// semantics; nothing is shared with the source.
impl<T: Clone, Idx: Index> Clone for OwnedChain<T, Idx> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        for element in self.iter() {
            copy.push_back(element.clone());
        }
        copy
    }
}

impl<T: Hash, Idx: Index> Hash for OwnedChain<T, Idx> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.sequence_hash());
    }
}

/// Parenthesized, comma-separated rendering: `(A, B, C)`; `()` when empty.
/// Debugging aid only, not a parser target.
impl<T: fmt::Display, Idx: Index> fmt::Display for OwnedChain<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut first = true;
        for element in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
            first = false;
        }
        f.write_str(")")
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for OwnedChain<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, Idx: Index> FromIterator<T> for OwnedChain<T, Idx> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        for value in iter {
            chain.push_back(value);
        }
        chain
    }
}
