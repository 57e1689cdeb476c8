//! Partition tree container and construction.

use log::debug;
use rand::Rng;

use super::node::BspNode;
use super::splitter::SplitPolicy;
use super::visitor::{CollectingVisitor, LeafVisitor};
use crate::Rectangle;

/// A Binary Space Partitioning tree over a rectangular area.
///
/// The root covers the whole area. Each internal node is cut in two along
/// one axis, and its children tile it exactly: they are disjoint and their
/// union is the parent. Leaves are the partitions that rooms get carved in.
///
/// # Construction
///
/// Trees are built from an area using a [`SplitPolicy`] to decide where to
/// cut:
///
/// ```
/// use bsp_dungeon::{BspTree, RandomSplit, Rectangle};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let tree = BspTree::build(Rectangle::new(0, 0, 80, 25), 8, &RandomSplit::default(), &mut rng);
/// assert!(tree.leaf_count() >= 2);
/// ```
///
/// # Traversal
///
/// Leaves are always visited depth-first, left child before right child.
/// Room generation and corridor routing both rely on this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspTree {
    root: BspNode,
}

impl BspTree {
    /// Creates a tree with a single leaf covering `area`.
    pub fn new(area: Rectangle) -> Self {
        Self {
            root: BspNode::new(area),
        }
    }

    /// Builds a partition tree over `area`.
    ///
    /// Nodes are split recursively for as long as `policy` accepts a split.
    /// The policy is consulted for a node, then for its whole left subtree,
    /// then for its right subtree, so the random stream is consumed in a
    /// fixed order.
    pub fn build<S, R>(area: Rectangle, min_size: i32, policy: &S, rng: &mut R) -> Self
    where
        S: SplitPolicy,
        R: Rng + ?Sized,
    {
        let mut root = BspNode::new(area);
        split_recursive(&mut root, min_size, policy, rng);
        Self { root }
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &BspNode {
        &self.root
    }

    /// Returns the number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns the maximum depth of the tree (1 for an unsplit tree).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Visits every leaf, left subtree before right subtree.
    pub fn walk_leaves<V: LeafVisitor>(&self, visitor: &mut V) {
        walk_leaves_node(&self.root, visitor);
    }

    /// Calls `f` with mutable access to every leaf, in traversal order.
    pub fn for_each_leaf_mut<F: FnMut(&mut BspNode)>(&mut self, mut f: F) {
        for_each_leaf_mut_node(&mut self.root, &mut f);
    }

    /// Collects the leaf areas in traversal order.
    pub fn leaves(&self) -> Vec<Rectangle> {
        let mut visitor = CollectingVisitor::new();
        self.walk_leaves(&mut visitor);
        visitor.into_areas()
    }
}

/// Recursively splits a node and its descendants.
fn split_recursive<S, R>(node: &mut BspNode, min_size: i32, policy: &S, rng: &mut R)
where
    S: SplitPolicy,
    R: Rng + ?Sized,
{
    let Some(split) = policy.choose(node.area(), min_size, rng) else {
        return;
    };

    let (first, second) = node.area().split(split.axis, split.offset);
    debug!(
        "split {:?} {:?} at {} into {:?} and {:?}",
        node.area(),
        split.axis,
        split.offset,
        first,
        second
    );

    let mut left = BspNode::new(first);
    split_recursive(&mut left, min_size, policy, rng);
    let mut right = BspNode::new(second);
    split_recursive(&mut right, min_size, policy, rng);

    node.set_children(left, right);
}

fn walk_leaves_node<V: LeafVisitor>(node: &BspNode, visitor: &mut V) {
    match node.children() {
        Some((left, right)) => {
            walk_leaves_node(left, visitor);
            walk_leaves_node(right, visitor);
        }
        None => visitor.visit(node),
    }
}

fn for_each_leaf_mut_node<F: FnMut(&mut BspNode)>(node: &mut BspNode, f: &mut F) {
    if node.is_leaf() {
        f(node);
    } else if let Some((left, right)) = node.children_mut() {
        for_each_leaf_mut_node(left, f);
        for_each_leaf_mut_node(right, f);
    }
}
