//! # Block Parsing
//!
//! Two-phase, line-based block parsing over the rope.
//!
//! 1. **Line Classification** (`classify`): each line is reduced to a
//!    `LineClass` of local facts (quote depth, remainder, blank, fence).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine turns
//!    the classified lines into leaf `BlockNode`s.
//!
//! Leaf blocks never overlap. Each one records both its full span and the
//! content span that selection fallback uses as "the block's text".

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode, ContainerFrame};
