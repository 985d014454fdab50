// Copyright (c) 2025 Mansion Mystery Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Static binary tree of rooms.
//!
//! Rooms are assembled bottom-up with a small builder and never change once
//! the tree is complete. Each room exclusively owns its two optional
//! children, so the structure is a pure tree and is released in one piece
//! when the root is dropped.
//!
//! # Example
//!
//! ```
//! use mansion_mystery_lib::data_structures::room_tree::{Direction, Room};
//!
//! let hall = Room::new("Hall")
//!     .with_left(Room::new("Library"))
//!     .with_right(Room::new("Dining Room"));
//!
//! assert_eq!(hall.child(Direction::Left).map(Room::name), Some("Library"));
//! assert!(hall.find("Dining Room").is_some());
//! ```

use std::fmt;

/// One of the two ways out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the left child
    Left,
    /// Towards the right child
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A named room with up to two child rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Creates a room with no exits.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    /// Attaches `room` as the left child, replacing any previous one.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attaches `room` as the right child, replacing any previous one.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The child in the given direction, if there is one.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Returns whether the room has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Finds a room by name in this subtree, depth-first, left before right.
    pub fn find(&self, name: &str) -> Option<&Room> {
        if self.name == name {
            return Some(self);
        }
        self.left
            .as_deref()
            .and_then(|left| left.find(name))
            .or_else(|| self.right.as_deref().and_then(|right| right.find(name)))
    }

    /// Number of rooms in this subtree, including this one.
    pub fn room_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Room::room_count)
            + self.right.as_deref().map_or(0, Room::room_count)
    }

    /// Room names of this subtree in pre-order.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.room_count());
        let mut stack = vec![self];
        while let Some(room) = stack.pop() {
            names.push(room.name());
            // Right first so the left subtree is visited first
            if let Some(right) = room.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = room.left.as_deref() {
                stack.push(left);
            }
        }
        names
    }
}
