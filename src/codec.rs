//! Gene ↔ assignment codec.
//!
//! Translates between the genetic algorithm's integer chromosome and actual
//! schedule assignments. Each gene is an index into the flattened
//! slot × offering grid:
//!
//! - `slot_index = gene / |offerings|`
//! - `offering_index = gene % |offerings|`
//!
//! The mapping is a bijection over `[0, total_combinations)`: every valid
//! gene value decodes to exactly one (slot, offering) pair and vice versa,
//! so equal genes always mean an identical assignment. Slots are sorted by
//! (day, start time) at construction to fix the enumeration order across
//! all genetic operations; offerings keep their caller-supplied order.

use serde::Serialize;

use crate::ga::Allele;
use crate::models::{Offering, TimeSlot};

/// A decoded schedule assignment: one offering placed into one time slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotAssignment<'a> {
    /// The time period the offering is scheduled into.
    pub slot: &'a TimeSlot,
    /// The course requirement assigned to that period.
    pub offering: &'a Offering,
}

/// Deterministic translator between gene values and schedule assignments.
#[derive(Debug)]
pub struct Codec {
    slots: Vec<TimeSlot>,
    offerings: Vec<Offering>,
}

impl Codec {
    /// Creates a codec over the given slots and offerings.
    ///
    /// Slots are sorted by day (Monday first) and then by start time so the
    /// gene enumeration order is independent of input order.
    pub fn new(slots: Vec<TimeSlot>, offerings: Vec<Offering>) -> Self {
        let mut slots = slots;
        slots.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.start.cmp(&b.start)));
        Self { slots, offerings }
    }

    /// Slots in canonical (day, start) order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Offerings in caller order.
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Size of the assignment search space: `|slots| × |offerings|`.
    pub fn total_combinations(&self) -> usize {
        self.slots.len() * self.offerings.len()
    }

    /// Chromosome length: the sum of required hours over all offerings.
    pub fn total_required_hours(&self) -> usize {
        self.offerings
            .iter()
            .map(|o| o.required_hours as usize)
            .sum()
    }

    /// Decodes a gene value into its schedule assignment.
    ///
    /// Returns `None` for values at or beyond [`total_combinations`]; decode
    /// is a partial operation and an out-of-range gene simply carries no
    /// assignment.
    ///
    /// [`total_combinations`]: Codec::total_combinations
    pub fn decode(&self, index: Allele) -> Option<SlotAssignment<'_>> {
        if index >= self.total_combinations() {
            return None;
        }

        let slot_index = index / self.offerings.len();
        let offering_index = index % self.offerings.len();

        Some(SlotAssignment {
            slot: &self.slots[slot_index],
            offering: &self.offerings[offering_index],
        })
    }

    /// Decodes a whole chromosome gene by gene, preserving positions.
    ///
    /// Non-decodable genes yield `None` at their position.
    pub fn decode_chromosome(&self, chromosome: &[Allele]) -> Vec<Option<SlotAssignment<'_>>> {
        chromosome.iter().map(|&allele| self.decode(allele)).collect()
    }
}
