//! Singly linked chains over index-based arena storage.
//!
//! This crate provides a forward-linked sequential container built on
//! stable-index storage instead of pointer-linked nodes. The key insight:
//! separate storage from structure.
//!
//! # Design Philosophy
//!
//! A textbook singly linked list threads raw node references:
//!
//! ```text
//! head -> Node -> Node -> Node      - aliasing bugs, shared suffixes,
//!                                     concatenation leaves two owners
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Storage (PoolStorage)  - owns nodes, provides stable indices
//! Chain                  - coordinates indices, tracks head/tail/len
//! ```
//!
//! Benefits:
//! - **No aliasing**: concatenation empties the source chain, so a node is
//!   never reachable from two live chains
//! - **Indices are identity**: lookup returns a handle naming exactly one
//!   node, even among equal elements
//! - **Slot reuse**: removed nodes free arena slots for future inserts
//! - **Forward links only**: one word of link state per node; operations
//!   needing a predecessor locate it by scanning, never by back-links
//!
//! # Quick Start
//!
//! Most callers want [`OwnedChain`], which bundles a chain with its arena:
//!
//! ```
//! use forward_chain::OwnedChain;
//!
//! let mut chain: OwnedChain<u64> = OwnedChain::new();
//!
//! chain.push_back(2);
//! chain.push_back(3);
//! chain.push_front(1);
//! assert_eq!(chain.len(), 3);
//!
//! // Swap the nodes holding 1 and 3 by relinking; no element moves
//! chain.swap_values(&1, &3);
//! assert_eq!(chain.to_string(), "(3, 2, 1)");
//!
//! assert_eq!(chain.pop_front(), Some(3));
//! ```
//!
//! # Shared Storage
//!
//! Multiple chains can coordinate over one storage pool with the raw
//! [`Chain`] API, which makes concatenation O(1):
//!
//! ```
//! use forward_chain::{Chain, PoolStorage};
//!
//! let mut storage: PoolStorage<_> = PoolStorage::new();
//! let mut a: Chain<u64, _> = Chain::new();
//! let mut b: Chain<u64, _> = Chain::new();
//!
//! a.push_back(&mut storage, 1);
//! a.push_back(&mut storage, 2);
//! b.push_back(&mut storage, 3);
//!
//! a.append(&mut storage, &mut b); // b is emptied
//! assert_eq!(a.len(), 3);
//! assert!(b.is_empty());
//! ```
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a raw chain must use the same storage instance. This is
//! the caller's responsibility (same discipline as the `slab` crate). The
//! owned wrapper enforces it by construction.
//!
//! # Structure Invariants
//!
//! Every mutating operation maintains:
//! - `len == 0` iff head and tail are both absent
//! - following forward links from head reaches tail in exactly `len` visits
//! - the tail node has no further link; the chain is acyclic
//!
//! # Concurrency
//!
//! Single-threaded by design: every mutation takes `&mut self`, so
//! overlapping writers are unrepresentable without external synchronization.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod chain;
pub mod index;
pub mod owned;
pub mod storage;

pub use chain::{Chain, ChainNode, Indices, Iter, PoolChainStorage};
pub use index::Index;
pub use owned::OwnedChain;
pub use storage::{PoolStorage, Storage};

#[cfg(feature = "slab")]
pub use chain::SlabChainStorage;
