// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained store of marks with deterministic draw ordering.

use hashbrown::HashMap;

use crate::mark::{Mark, MarkId};

#[derive(Debug)]
struct Slot {
    mark: Mark,
    /// Monotonic insertion sequence; breaks `z_index` ties in draw order.
    seq: u64,
}

/// A retained set of marks.
///
/// Draw order is `(z_index, insertion sequence)`: within a z tier, later
/// insertions paint on top. [`Scene::insert`] on an existing id restyles the
/// mark in place and keeps its position in the draw order;
/// [`Scene::raise`] moves a mark to the front of its tier.
#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    index: HashMap<MarkId, usize>,
    next_seq: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of marks in the scene.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if a mark with `id` is present.
    pub fn contains(&self, id: MarkId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the mark with `id`, if present.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.index.get(&id).map(|&i| &self.slots[i].mark)
    }

    /// Returns a mutable reference to the mark with `id`, if present.
    ///
    /// Mutating through this reference restyles the primitive in place; its
    /// draw-order position is unchanged.
    pub fn get_mut(&mut self, id: MarkId) -> Option<&mut Mark> {
        self.index.get(&id).map(|&i| &mut self.slots[i].mark)
    }

    /// Inserts a mark, replacing any existing mark with the same id.
    ///
    /// A replaced mark keeps its insertion sequence (restyle in place); a new
    /// mark is assigned the next sequence and paints on top of its z tier.
    pub fn insert(&mut self, mark: Mark) {
        match self.index.get(&mark.id) {
            Some(&i) => self.slots[i].mark = mark,
            None => {
                let seq = self.bump_seq();
                self.index.insert(mark.id, self.slots.len());
                self.slots.push(Slot { mark, seq });
            }
        }
    }

    /// Removes and returns the mark with `id`.
    ///
    /// The primitive is dropped by the caller (or immediately); the scene
    /// holds no further reference to it.
    pub fn remove(&mut self, id: MarkId) -> Option<Mark> {
        let i = self.index.remove(&id)?;
        let slot = self.slots.swap_remove(i);
        if let Some(moved) = self.slots.get(i) {
            self.index.insert(moved.mark.id, i);
        }
        Some(slot.mark)
    }

    /// Moves the mark with `id` to the front of its z tier.
    ///
    /// Returns `false` if no such mark exists.
    pub fn raise(&mut self, id: MarkId) -> bool {
        let Some(&i) = self.index.get(&id) else {
            return false;
        };
        let seq = self.bump_seq();
        self.slots[i].seq = seq;
        true
    }

    /// Returns all marks sorted by `(z_index, insertion sequence)`.
    ///
    /// Invisible marks are included; renderers decide whether to skip them.
    pub fn marks_in_draw_order(&self) -> Vec<&Mark> {
        let mut order: Vec<&Slot> = self.slots.iter().collect();
        order.sort_by_key(|s| (s.mark.z_index, s.seq));
        order.into_iter().map(|s| &s.mark).collect()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
