//! Partition tree navigation utilities for interactive visualization.

use bsp_dungeon::{BspNode, BspTree, Rectangle};
use macroquad::prelude::*;

use crate::{area_color, draw_area_outline, MapLayout};

/// Direction taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Interactive partition tree navigator for exploring tree structure.
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl Default for TreeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Returns the current depth in the tree.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Attempts to navigate to the left child. Returns true if successful.
    pub fn go_left(&mut self, tree: &BspTree) -> bool {
        self.descend(tree, Direction::Left)
    }

    /// Attempts to navigate to the right child. Returns true if successful.
    pub fn go_right(&mut self, tree: &BspTree) -> bool {
        self.descend(tree, Direction::Right)
    }

    fn descend(&mut self, tree: &BspTree, direction: Direction) -> bool {
        let has_children = self
            .current_node(tree)
            .is_some_and(|node| !node.is_leaf());
        if has_children {
            self.path.push(direction);
        }
        has_children
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root node.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update(&mut self, tree: &BspTree) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::L) {
            changed = self.go_left(tree);
        }
        if is_key_pressed(KeyCode::R) {
            changed = self.go_right(tree);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::T) && !self.path.is_empty() {
            self.go_root();
            changed = true;
        }

        changed
    }

    /// Returns the current node, or `None` if the path does not fit the tree.
    pub fn current_node<'a>(&self, tree: &'a BspTree) -> Option<&'a BspNode> {
        get_node_at_path(tree.root(), &self.path)
    }

    /// Drops path steps that do not exist in `tree`.
    pub fn clamp_to(&mut self, tree: &BspTree) {
        let mut node = tree.root();
        let mut valid = 0;
        for dir in &self.path {
            match step(node, *dir) {
                Some(next) => {
                    node = next;
                    valid += 1;
                }
                None => break,
            }
        }
        self.path.truncate(valid);
    }

    /// Highlights the current subtree: its area, plus each leaf below it.
    pub fn render(&self, tree: &BspTree, layout: &MapLayout) {
        if let Some(node) = self.current_node(tree) {
            render_subtree(node, layout);
            draw_area_outline(node.area(), layout, 4.0, YELLOW);
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui(&self, tree: &BspTree, rooms: &[Rectangle], x: f32, y_offset: f32) {
        let (area, leaves, depth, is_leaf, room) = match self.current_node(tree) {
            Some(node) => (
                Some(*node.area()),
                node.leaf_count(),
                node.depth(),
                node.is_leaf(),
                node.room(),
            ),
            None => (None, 0, 0, true, None),
        };

        // Build path string
        let path_str = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|d| match d {
                    Direction::Left => "L",
                    Direction::Right => "R",
                })
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        let area_str = area.map_or_else(
            || "-".to_string(),
            |a| format!("{}x{} at ({}, {})", a.width(), a.height(), a.x(), a.y()),
        );

        draw_text(
            &format!("Subtree: {} leaves, depth {} | {}", leaves, depth, area_str),
            x,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_str, self.path.len()),
            x,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        let children = if is_leaf {
            match room.and_then(|id| rooms.get(id.0).map(|r| (id, r))) {
                Some((id, r)) => format!(
                    "(leaf) room #{}: {}x{} at ({}, {})",
                    id.0,
                    r.width(),
                    r.height(),
                    r.x(),
                    r.y()
                ),
                None => "(leaf)".to_string(),
            }
        } else {
            "Children: [L]eft [R]ight".to_string()
        };
        draw_text(
            &children,
            x,
            y_offset + 40.0,
            18.0,
            if is_leaf { ORANGE } else { GREEN },
        );
        draw_text("[P]arent | [T]op", x, y_offset + 60.0, 16.0, DARKGRAY);
    }
}

fn step(node: &BspNode, dir: Direction) -> Option<&BspNode> {
    match dir {
        Direction::Left => node.left(),
        Direction::Right => node.right(),
    }
}

/// Navigates to a node following the path, returns None if path is invalid.
fn get_node_at_path<'a>(root: &'a BspNode, path: &[Direction]) -> Option<&'a BspNode> {
    let mut current = root;
    for dir in path {
        current = step(current, *dir)?;
    }
    Some(current)
}

/// Recursively outlines the leaves of a subtree.
fn render_subtree(node: &BspNode, layout: &MapLayout) {
    match node.children() {
        Some((left, right)) => {
            render_subtree(left, layout);
            render_subtree(right, layout);
        }
        None => draw_area_outline(node.area(), layout, 2.0, area_color(node.area())),
    }
}
