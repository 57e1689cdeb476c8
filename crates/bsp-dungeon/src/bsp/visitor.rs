//! Visitor pattern for partition tree traversal.
//!
//! Visitors allow custom processing of leaves during tree traversal
//! without coupling traversal logic to specific use cases.

use crate::{BspNode, Rectangle};

/// Visitor for processing leaves during partition tree traversal.
///
/// Leaves are visited depth-first, left child before right child. This is
/// the order rooms are generated in, and therefore the order they are
/// chained together by corridors.
pub trait LeafVisitor {
    /// Called once for each leaf.
    fn visit(&mut self, leaf: &BspNode);
}

/// A simple visitor that collects the area of every visited leaf.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Rectangle>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected leaf areas.
    pub fn into_areas(self) -> Vec<Rectangle> {
        self.collected
    }

    /// Returns a reference to the collected leaf areas.
    pub fn areas(&self) -> &[Rectangle] {
        &self.collected
    }
}

impl LeafVisitor for CollectingVisitor {
    fn visit(&mut self, leaf: &BspNode) {
        self.collected.push(*leaf.area());
    }
}

/// A visitor that calls a closure for each leaf.
pub struct FnVisitor<F>
where
    F: FnMut(&BspNode),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&BspNode),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> LeafVisitor for FnVisitor<F>
where
    F: FnMut(&BspNode),
{
    fn visit(&mut self, leaf: &BspNode) {
        (self.func)(leaf);
    }
}
