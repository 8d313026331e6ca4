//! Singly linked chain coordinated over external storage.
//!
//! Nodes live in arena storage; the chain threads forward links through their
//! indices and tracks head, tail, and length. Links only point forward, so
//! operations that need a node's predecessor (notably [`Chain::swap`]) locate
//! it by scanning from the head.
//!
//! # Storage Invariant
//!
//! A chain instance must always be used with the same storage instance.
//! Passing a different storage is a logic error: index-based links keep it
//! memory-safe, but the chain contents become meaningless. This is the
//! caller's responsibility to enforce (same discipline as the `slab` crate).
//!
//! # Example
//!
//! ```
//! use forward_chain::{Chain, PoolStorage};
//!
//! let mut storage: PoolStorage<_> = PoolStorage::new();
//! let mut chain: Chain<u64, _> = Chain::new();
//!
//! chain.push_back(&mut storage, 1);
//! chain.push_back(&mut storage, 2);
//! chain.push_front(&mut storage, 0);
//!
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.pop_front(&mut storage), Some(0));
//! assert_eq!(chain.front(&storage), Some(&1));
//! ```
//!
//! # Moving Between Chains
//!
//! Chains over shared storage can be concatenated in O(1) with
//! [`Chain::append`]. The appended chain is emptied, so a node is never
//! reachable from two live chains.
//!
//! ```
//! use forward_chain::{Chain, PoolStorage};
//!
//! let mut storage: PoolStorage<_> = PoolStorage::new();
//! let mut a: Chain<u64, _> = Chain::new();
//! let mut b: Chain<u64, _> = Chain::new();
//!
//! a.push_back(&mut storage, 1);
//! b.push_back(&mut storage, 2);
//!
//! a.append(&mut storage, &mut b);
//! assert_eq!(a.len(), 2);
//! assert!(b.is_empty());
//! ```

use std::marker::PhantomData;

use crate::{Index, PoolStorage, Storage};

/// Type alias for the default pool-backed chain storage.
pub type PoolChainStorage<T, Idx = u32> = PoolStorage<ChainNode<T, Idx>, Idx>;

/// Type alias for chain storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabChainStorage<T> = slab::Slab<ChainNode<T, usize>>;

/// A node in the chain: one element plus a forward link.
///
/// Users interact with `&T` and `&mut T` through the chain's accessors; the
/// node structure is an implementation detail.
#[derive(Debug)]
pub struct ChainNode<T, Idx: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: Idx,
}

impl<T, Idx: Index> ChainNode<T, Idx> {
    #[inline]
    fn new(data: T, next: Idx) -> Self {
        Self { data, next }
    }
}

/// A singly linked chain over external storage.
///
/// The chain tracks head, tail, and length; nodes live in user-provided
/// storage, wrapped in [`ChainNode`]. Every mutating operation keeps the
/// three fields consistent:
///
/// - `len == 0` iff head and tail are both `Idx::NONE`
/// - following `next` from head reaches tail in exactly `len` visits
/// - the tail node's `next` is `Idx::NONE`
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`PoolChainStorage<T>`])
/// - `Idx`: Index type (default `u32`)
#[derive(Debug)]
pub struct Chain<T, S, Idx: Index = u32>
where
    S: Storage<ChainNode<T, Idx>, Index = Idx>,
{
    head: Idx,
    tail: Idx,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, Idx: Index> Default for Chain<T, S, Idx>
where
    S: Storage<ChainNode<T, Idx>, Index = Idx>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, Idx: Index> Chain<T, S, Idx>
where
    S: Storage<ChainNode<T, Idx>, Index = Idx>,
{
    /// Creates an empty chain.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the chain.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's index, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<Idx> {
        if self.head.is_none() {
            None
        } else {
            Some(self.head)
        }
    }

    /// Returns the tail node's index, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<Idx> {
        if self.tail.is_none() {
            None
        } else {
            Some(self.tail)
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Pushes a value to the front of the chain.
    ///
    /// The new node points at the current head and becomes the head; when the
    /// chain was empty it becomes the tail as well. O(1).
    ///
    /// Returns the index of the inserted node.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> Idx {
        let idx = storage.insert(ChainNode::new(value, self.head));
        if self.head.is_none() {
            self.tail = idx;
        }
        self.head = idx;
        self.len += 1;
        idx
    }

    /// Pushes a value to the back of the chain.
    ///
    /// Returns the index of the inserted node. O(1).
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: T) -> Idx {
        let idx = storage.insert(ChainNode::new(value, Idx::NONE));
        if self.tail.is_some() {
            // Safety: tail is valid when is_some()
            unsafe { storage.get_unchecked_mut(self.tail) }.next = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
        self.len += 1;
        idx
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the chain is empty. O(1).
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let idx = self.head;
        // Safety: head is valid when is_some()
        self.head = unsafe { storage.get_unchecked(idx) }.next;
        self.len -= 1;
        if self.len == 0 {
            self.tail = Idx::NONE;
        }
        storage.remove(idx).map(|node| node.data)
    }

    /// Clears the chain, removing all nodes from storage.
    pub fn clear(&mut self, storage: &mut S) {
        let mut walk = self.head;
        while walk.is_some() {
            // Safety: walk came from chain traversal
            let next = unsafe { storage.get_unchecked(walk) }.next;
            storage.remove(walk);
            walk = next;
        }

        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element at the given index.
    #[inline]
    pub fn get<'a>(&self, storage: &'a S, index: Idx) -> Option<&'a T>
    where
        Idx: 'a,
    {
        storage.get(index).map(|node| &node.data)
    }

    /// Returns a mutable reference to the element at the given index.
    #[inline]
    pub fn get_mut<'a>(&mut self, storage: &'a mut S, index: Idx) -> Option<&'a mut T>
    where
        Idx: 'a,
    {
        storage.get_mut(index).map(|node| &mut node.data)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front<'a>(&self, storage: &'a S) -> Option<&'a T>
    where
        Idx: 'a,
    {
        if self.head.is_none() {
            None
        } else {
            // Safety: head is valid when is_some()
            Some(unsafe { &storage.get_unchecked(self.head).data })
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back<'a>(&self, storage: &'a S) -> Option<&'a T>
    where
        Idx: 'a,
    {
        if self.tail.is_none() {
            None
        } else {
            // Safety: tail is valid when is_some()
            Some(unsafe { &storage.get_unchecked(self.tail).data })
        }
    }

    /// Returns the index of the node after `index`.
    ///
    /// Returns `None` if `index` is the tail or invalid.
    #[inline]
    pub fn next_index(&self, storage: &S, index: Idx) -> Option<Idx> {
        let next = storage.get(index)?.next;
        if next.is_none() { None } else { Some(next) }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the index of the first node whose element equals `value`.
    ///
    /// Linear scan from the head; `None` on miss or when the chain is empty.
    /// The returned index is the node's identity: two lookups that land on
    /// the same node yield equal indices even when other nodes hold equal
    /// elements.
    pub fn find(&self, storage: &S, value: &T) -> Option<Idx>
    where
        T: PartialEq,
    {
        let mut walk = self.head;
        while walk.is_some() {
            // Safety: walk came from chain traversal
            let node = unsafe { storage.get_unchecked(walk) };
            if node.data == *value {
                return Some(walk);
            }
            walk = node.next;
        }
        None
    }

    /// Returns the predecessor of `target`, or `Idx::NONE` when `target` is
    /// the head. `None` means the scan never reached `target` (it is not
    /// threaded into this chain).
    fn predecessor(&self, storage: &S, target: Idx) -> Option<Idx> {
        if self.head == target {
            return Some(Idx::NONE);
        }
        let mut walk = self.head;
        while walk.is_some() {
            // Safety: walk came from chain traversal
            let next = unsafe { storage.get_unchecked(walk) }.next;
            if next == target {
                return Some(walk);
            }
            walk = next;
        }
        None
    }

    // ========================================================================
    // Swap
    // ========================================================================

    /// Relinks the chain so the nodes at `a` and `b` exchange positions.
    ///
    /// Returns `false` without modification when `a == b`, either index is
    /// the sentinel or not occupied in storage, the chain is empty, or
    /// either node is not threaded into this chain. These are silent no-ops,
    /// not errors: the caller supplied values that require no action.
    ///
    /// Forward-only links force predecessor tracking, so the algorithm runs
    /// three scans from the head: one per predecessor, one to recompute the
    /// tail after relinking. Three disjoint relink cases, decided by
    /// adjacency and order. O(len); no allocation, only links are rewritten.
    pub fn swap(&mut self, storage: &mut S, a: Idx, b: Idx) -> bool {
        if a == b || a.is_none() || b.is_none() || self.is_empty() {
            return false;
        }
        if storage.get(a).is_none() || storage.get(b).is_none() {
            return false;
        }

        // NONE predecessor means the target is the head
        let Some(pred_a) = self.predecessor(storage, a) else {
            return false;
        };
        let Some(pred_b) = self.predecessor(storage, b) else {
            return false;
        };

        // Safety for the block: a and b validated occupied above
        let a_next = unsafe { storage.get_unchecked(a) }.next;
        let b_next = unsafe { storage.get_unchecked(b) }.next;

        if b_next == a {
            // b immediately precedes a: b takes a's successor, a takes b
            unsafe { storage.get_unchecked_mut(b) }.next = a_next;
            unsafe { storage.get_unchecked_mut(a) }.next = b;
            self.relink(storage, pred_b, a);
        } else if a_next == b {
            // a immediately precedes b: symmetric
            unsafe { storage.get_unchecked_mut(a) }.next = b_next;
            unsafe { storage.get_unchecked_mut(b) }.next = a;
            self.relink(storage, pred_a, b);
        } else {
            // Non-adjacent: exchange successors, retarget both predecessors
            unsafe { storage.get_unchecked_mut(a) }.next = b_next;
            unsafe { storage.get_unchecked_mut(b) }.next = a_next;
            self.relink(storage, pred_a, b);
            self.relink(storage, pred_b, a);
        }

        // A swap can move either target into the last position, or move the
        // former tail away from the end, so the tail is recomputed by walking
        // from the (possibly new) head.
        self.tail = self.last_index(storage);
        true
    }

    /// Relinks the chain so the first nodes holding `e1` and `e2` exchange
    /// positions, locating both by [`Chain::find`].
    ///
    /// Returns `false` without modification when `e1` and `e2` are the same
    /// referent, the chain is empty, or either lookup misses. Probes that
    /// compare equal resolve to the same node and are likewise a no-op.
    pub fn swap_values(&mut self, storage: &mut S, e1: &T, e2: &T) -> bool
    where
        T: PartialEq,
    {
        if std::ptr::eq(e1, e2) || self.is_empty() {
            return false;
        }
        let (Some(a), Some(b)) = (self.find(storage, e1), self.find(storage, e2)) else {
            return false;
        };
        self.swap(storage, a, b)
    }

    /// Points `pred`'s link at `to`; a `NONE` predecessor is the head slot.
    #[inline]
    fn relink(&mut self, storage: &mut S, pred: Idx, to: Idx) {
        if pred.is_none() {
            self.head = to;
        } else {
            // Safety: pred came from a predecessor scan over live nodes
            unsafe { storage.get_unchecked_mut(pred) }.next = to;
        }
    }

    /// Walks from the head to the last node.
    fn last_index(&self, storage: &S) -> Idx {
        let mut walk = self.head;
        loop {
            // Safety: walk came from chain traversal over live nodes
            let next = unsafe { storage.get_unchecked(walk) }.next;
            if next.is_none() {
                return walk;
            }
            walk = next;
        }
    }

    // ========================================================================
    // Concatenation
    // ========================================================================

    /// Appends `other` to the end of this chain.
    ///
    /// After this operation `other` is empty, so no node is reachable from
    /// two live chains. Both chains must be threaded over `storage`. An
    /// empty receiver simply adopts `other`'s head, tail, and length. O(1).
    #[inline]
    pub fn append(&mut self, storage: &mut S, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            self.head = other.head;
            self.tail = other.tail;
            self.len = other.len;
        } else {
            // Safety: self.tail and other.head are valid (non-empty chains)
            unsafe { storage.get_unchecked_mut(self.tail) }.next = other.head;
            self.tail = other.tail;
            self.len += other.len;
        }

        other.head = Idx::NONE;
        other.tail = Idx::NONE;
        other.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, head to tail.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, Idx> {
        Iter {
            storage,
            walk: self.head,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over node indices, head to tail.
    ///
    /// Useful when you need both the index and the element, or when you plan
    /// to relink during iteration (collect indices first).
    #[inline]
    pub fn indices<'a>(&self, storage: &'a S) -> Indices<'a, T, S, Idx> {
        Indices {
            storage,
            walk: self.head,
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to chain elements, head to tail.
///
/// Forward links only, so this is not a `DoubleEndedIterator`.
pub struct Iter<'a, T, S, Idx: Index> {
    storage: &'a S,
    walk: Idx,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, Idx: Index + 'a> Iterator for Iter<'a, T, S, Idx>
where
    S: Storage<ChainNode<T, Idx>, Index = Idx>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.walk.is_none() {
            return None;
        }

        // Safety: chain invariants guarantee walk is valid
        let node = unsafe { self.storage.get_unchecked(self.walk) };
        self.walk = node.next;
        Some(&node.data)
    }
}

/// Iterator over node indices, head to tail.
pub struct Indices<'a, T, S, Idx: Index> {
    storage: &'a S,
    walk: Idx,
    _marker: PhantomData<T>,
}

impl<'a, T, S, Idx: Index> Iterator for Indices<'a, T, S, Idx>
where
    S: Storage<ChainNode<T, Idx>, Index = Idx>,
{
    type Item = Idx;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.walk.is_none() {
            return None;
        }

        let idx = self.walk;
        // Safety: chain invariants guarantee walk is valid
        self.walk = unsafe { self.storage.get_unchecked(idx) }.next;
        Some(idx)
    }
}
