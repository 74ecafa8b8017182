//! The five fixed region slots.

use crate::capture::Region;
use serde::{Deserialize, Serialize};

/// One of the five places a region can be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Question,
    Option1,
    Option2,
    Option3,
    Option4,
}

impl Slot {
    /// Prompt order: the question first, then the options.
    pub const ALL: [Slot; 5] = [
        Slot::Question,
        Slot::Option1,
        Slot::Option2,
        Slot::Option3,
        Slot::Option4,
    ];

    pub fn index(self) -> usize {
        match self {
            Slot::Question => 0,
            Slot::Option1 => 1,
            Slot::Option2 => 2,
            Slot::Option3 => 3,
            Slot::Option4 => 4,
        }
    }

    /// Human label used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Question => "Question",
            Slot::Option1 => "Option 1",
            Slot::Option2 => "Option 2",
            Slot::Option3 => "Option 3",
            Slot::Option4 => "Option 4",
        }
    }
}

/// A filled slot as reported to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotRegion {
    pub slot: Slot,
    pub region: Region,
}

/// Region storage for the five slots. Re-selecting a slot replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSlots {
    regions: [Option<Region>; 5],
}

impl RegionSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<Region> {
        self.regions[slot.index()]
    }

    /// Store `region` in `slot`, returning what was there before.
    pub fn set(&mut self, slot: Slot, region: Region) -> Option<Region> {
        self.regions[slot.index()].replace(region)
    }

    /// Filled slots in prompt order; unset slots are skipped.
    pub fn filled(&self) -> Vec<SlotRegion> {
        Slot::ALL
            .iter()
            .filter_map(|&slot| self.get(slot).map(|region| SlotRegion { slot, region }))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(Option::is_none)
    }
}
