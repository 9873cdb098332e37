//! An order-statistics binary search tree for Rust.
//!
//! This crate provides [`RankTree`], a binary search tree in which every node
//! tracks the size of its left subtree. That augmentation answers
//! order-statistic queries in time proportional to the tree's depth:
//!
//! - [`rank_of`](RankTree::rank_of) - How many values precede a value
//! - [`get_by_rank`](RankTree::get_by_rank) - The value at a sorted position
//! - Indexing by [`Rank`] - e.g., `tree[Rank(0)]` for the smallest value
//!
//! # Example
//!
//! ```
//! use rank_tree::{Rank, RankTree};
//!
//! let mut scores = RankTree::new();
//! for score in [72, 95, 88, 72, 60] {
//!     scores.insert(score);
//! }
//!
//! // The lowest score ranks 0; a value never inserted has no rank.
//! assert_eq!(scores.rank_of(&60), Some(0));
//! assert_eq!(scores.rank_of(&80), None);
//!
//! // Duplicates count as preceding the first copy inserted.
//! assert_eq!(scores.rank_of(&72), Some(2));
//!
//! // Select by position.
//! assert_eq!(scores[Rank(4)], 95);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Duplicates allowed** - Equal values route left and rank deterministically
//! - **No recursion** - Insertion, queries, iteration and drop are iterative, so
//!   degenerate (sorted) input cannot overflow the stack
//!
//! # Implementation
//!
//! Nodes are stored in an append-only arena and linked by compact handles. The
//! tree is never rebalanced: insertion order alone determines its shape, so
//! query cost is O(log n) on average for random input and O(n) in the worst case.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod rank_tree;

pub use error::CapacityError;
pub use order_statistic::Rank;
pub use rank_tree::RankTree;
