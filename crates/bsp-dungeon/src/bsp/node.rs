//! Partition tree node implementation.

use crate::{Rectangle, RoomId};

/// A node in the partition tree.
///
/// Every node owns the rectangle it covers. An internal node owns exactly
/// two children that tile its rectangle; a leaf owns none. Rooms are not
/// stored in the tree: a leaf only records the [`RoomId`] of the room carved
/// inside it, which indexes into the room list owned by the dungeon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspNode {
    /// The area this node covers.
    area: Rectangle,

    /// `[first, second]`, where `first` holds the origin corner of `area`.
    children: Option<Box<[BspNode; 2]>>,

    /// Room carved in this leaf, if any.
    room: Option<RoomId>,
}

impl BspNode {
    /// Creates a leaf covering `area`.
    pub fn new(area: Rectangle) -> Self {
        Self {
            area,
            children: None,
            room: None,
        }
    }

    /// Returns the area covered by this node.
    #[inline]
    pub fn area(&self) -> &Rectangle {
        &self.area
    }

    /// Returns the child holding the origin corner (top or left half).
    #[inline]
    pub fn left(&self) -> Option<&BspNode> {
        self.children.as_deref().map(|[left, _]| left)
    }

    /// Returns the child away from the origin corner (bottom or right half).
    #[inline]
    pub fn right(&self) -> Option<&BspNode> {
        self.children.as_deref().map(|[_, right]| right)
    }

    /// Returns both children, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<(&BspNode, &BspNode)> {
        self.children.as_deref().map(|[left, right]| (left, right))
    }

    /// Returns both children mutably, or `None` for a leaf.
    #[inline]
    pub fn children_mut(&mut self) -> Option<(&mut BspNode, &mut BspNode)> {
        self.children
            .as_deref_mut()
            .map(|[left, right]| (left, right))
    }

    /// Turns this node into an internal node with the given children.
    ///
    /// Any room previously assigned to this node is dropped, since only
    /// leaves hold rooms.
    pub fn set_children(&mut self, left: BspNode, right: BspNode) {
        debug_assert!(
            self.area.contains(left.area()) && self.area.contains(right.area()),
            "children must lie inside their parent"
        );
        self.children = Some(Box::new([left, right]));
        self.room = None;
    }

    /// Checks if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns the room carved in this leaf.
    #[inline]
    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    /// Records the room carved in this leaf. Ignored on internal nodes.
    pub fn set_room(&mut self, room: RoomId) {
        debug_assert!(self.is_leaf(), "rooms are only assigned to leaves");
        if self.is_leaf() {
            self.room = Some(room);
        }
    }

    /// Returns the number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
            None => 1,
        }
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        }
    }
}
