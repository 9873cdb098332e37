mod arena;
mod handle;
mod node;
mod raw_rank_tree;
mod size;

pub(crate) use raw_rank_tree::{RawIter, RawRankTree};
