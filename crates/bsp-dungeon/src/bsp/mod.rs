//! Binary Space Partitioning of a rectangular grid.
//!
//! This module recursively cuts a rectangle into smaller rectangles until
//! every piece is too small to cut again. The pieces (leaves) never overlap
//! and together cover the original rectangle, which makes them a natural
//! layout for dungeon rooms:
//!
//! - Each leaf receives exactly one room, so rooms can never overlap
//! - Leaves are visited in a fixed order, which gives rooms a stable sequence
//!
//! # Example
//!
//! ```
//! use bsp_dungeon::{BspTree, Rectangle};
//! use bsp_dungeon::bsp::{CollectingVisitor, RandomSplit};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Partition an 80x25 grid into leaves at least 8 cells on each side
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let tree = BspTree::build(Rectangle::new(0, 0, 80, 25), 8, &RandomSplit::default(), &mut rng);
//!
//! // Walk the leaves left to right
//! let mut visitor = CollectingVisitor::new();
//! tree.walk_leaves(&mut visitor);
//! assert_eq!(visitor.areas().len(), tree.leaf_count());
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Nodes storing their area and, once split, two children
//! - [`SplitPolicy`]: Strategy trait for deciding where to cut
//! - [`LeafVisitor`]: Visitor trait for custom traversal behavior

mod node;
mod splitter;
mod tree;
mod visitor;

// Re-export main types
pub use node::BspNode;
pub use splitter::{forced_axis, RandomSplit, RatioMode, Split, SplitPolicy, ASPECT_LIMIT};
pub use tree::BspTree;
pub use visitor::{CollectingVisitor, FnVisitor, LeafVisitor};
