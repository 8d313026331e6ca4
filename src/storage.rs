//! Arena storage for chain nodes with stable indices.
//!
//! Storage provides insert/remove/get operations where an index stays valid
//! until the node is explicitly removed. Chains thread forward links through
//! these indices instead of through pointers, so there is no link aliasing to
//! get wrong: a handle either names a live slot or it does not.

use crate::Index;
use std::marker::PhantomData;

/// Slab-like storage with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations (amortized for growable arenas)
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`PoolStorage<T>`] - growable, free-list backed (in this crate)
/// - `slab::Slab<T>` - growable, heap allocated (feature `slab`)
pub trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Inserts a value, returning its stable index.
    fn insert(&mut self, value: T) -> Self::Index;

    /// Removes and returns the value at `index`, if present.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns a reference without occupancy checking.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked(&self, index: Self::Index) -> &T;

    /// Returns a mutable reference without occupancy checking.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T;
}

// =============================================================================
// PoolStorage - growable arena with an intrusive free list
// =============================================================================

enum Slot<T, Idx> {
    Occupied(T),
    /// Vacant slot holding the index of the next vacant slot.
    Vacant(Idx),
}

/// Growable arena storage backed by a `Vec` of slots.
///
/// Vacant slots form an intrusive free list, so removal is O(1) and removed
/// slots are reused before the arena grows. Insertion is infallible: the
/// arena grows like a `Vec` when the free list is empty.
///
/// # Example
///
/// ```
/// use forward_chain::{PoolStorage, Storage};
///
/// let mut storage: PoolStorage<u64> = PoolStorage::new();
///
/// let idx = storage.insert(42);
/// assert_eq!(storage.get(idx), Some(&42));
///
/// assert_eq!(storage.remove(idx), Some(42));
/// assert_eq!(storage.get(idx), None);
/// ```
pub struct PoolStorage<T, Idx: Index = u32> {
    slots: Vec<Slot<T, Idx>>,
    /// Head of the free list, `Idx::NONE` when no slot is vacant.
    free_head: Idx,
    len: usize,
    _marker: PhantomData<Idx>,
}

impl<T, Idx: Index> PoolStorage<T, Idx> {
    /// Creates an empty arena.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty arena with room for `capacity` nodes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the arena can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Removes all values, making every slot available for reuse.
    ///
    /// Any chain still threading indices into this storage must be cleared
    /// first; owned wrappers handle that ordering themselves.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Idx::NONE;
        self.len = 0;
    }
}

impl<T, Idx: Index> Default for PoolStorage<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> Storage<T> for PoolStorage<T, Idx> {
    type Index = Idx;

    #[inline]
    fn insert(&mut self, value: T) -> Idx {
        if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = &mut self.slots[idx.as_usize()];
            self.free_head = match slot {
                Slot::Vacant(next_free) => *next_free,
                Slot::Occupied(_) => unreachable!("occupied slot on free list"),
            };
            *slot = Slot::Occupied(value);
            self.len += 1;
            return idx;
        }

        let i = self.slots.len();
        assert!(
            i < Idx::NONE.as_usize(),
            "arena exceeds index type maximum"
        );
        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        Idx::from_usize(i)
    }

    #[inline]
    fn remove(&mut self, index: Idx) -> Option<T> {
        let slot = self.slots.get_mut(index.as_usize())?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }

        let old = std::mem::replace(slot, Slot::Vacant(self.free_head));
        self.free_head = index;
        self.len -= 1;
        match old {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, index: Idx) -> Option<&T> {
        match self.slots.get(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        match self.slots.get_mut(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: Idx) -> &T {
        debug_assert!(self.get(index).is_some(), "index not occupied");
        // Safety: caller guarantees the slot exists and is occupied
        match unsafe { self.slots.get_unchecked(index.as_usize()) } {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: Idx) -> &mut T {
        debug_assert!(self.get(index).is_some(), "index not occupied");
        // Safety: caller guarantees the slot exists and is occupied
        match unsafe { self.slots.get_unchecked_mut(index.as_usize()) } {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }
}

// =============================================================================
// slab::Slab support
// =============================================================================

/// `slab::Slab` as an external arena backend.
///
/// Keys are `usize`, so chains over a slab use `Idx = usize`.
#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        slab::Slab::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { slab::Slab::get_unchecked(self, index) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { slab::Slab::get_unchecked_mut(self, index) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut storage: PoolStorage<u64> = PoolStorage::new();

        let a = storage.insert(1);
        let b = storage.insert(2);

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get(a), Some(&1));
        assert_eq!(storage.get(b), Some(&2));
    }

    #[test]
    fn remove_returns_value() {
        let mut storage: PoolStorage<u64> = PoolStorage::new();

        let a = storage.insert(1);

        assert_eq!(storage.remove(a), Some(1));
        assert_eq!(storage.remove(a), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn slot_reuse_after_remove() {
        let mut storage: PoolStorage<u64> = PoolStorage::new();

        let a = storage.insert(1);
        let _b = storage.insert(2);
        storage.remove(a);

        // Freed slot is reused before the arena grows
        let c = storage.insert(3);
        assert_eq!(c, a);
        assert_eq!(storage.get(c), Some(&3));
    }

    #[test]
    fn free_list_chains_multiple_removals() {
        let mut storage: PoolStorage<u64> = PoolStorage::new();

        let keys: Vec<u32> = (0..4).map(|i| storage.insert(i)).collect();
        storage.remove(keys[1]);
        storage.remove(keys[2]);
        assert_eq!(storage.len(), 2);

        let x = storage.insert(10);
        let y = storage.insert(20);
        assert_eq!(storage.len(), 4);
        assert_eq!(storage.get(x), Some(&10));
        assert_eq!(storage.get(y), Some(&20));
    }

    #[test]
    fn get_mut_modifies_in_place() {
        let mut storage: PoolStorage<u64> = PoolStorage::new();

        let a = storage.insert(1);
        *storage.get_mut(a).unwrap() = 9;

        assert_eq!(storage.get(a), Some(&9));
    }

    #[test]
    fn clear_resets_everything() {
        let mut storage: PoolStorage<u64> = PoolStorage::new();

        storage.insert(1);
        storage.insert(2);
        storage.clear();

        assert!(storage.is_empty());
        let a = storage.insert(3);
        assert_eq!(storage.get(a), Some(&3));
    }
}
