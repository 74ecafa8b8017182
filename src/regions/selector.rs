//! Drag-to-select state machine.
//!
//! The overlay window forwards pointer events here:
//!
//! ```text
//! Idle --arm(slot)--> Armed --press--> Dragging --release--> (Commit) Idle
//!   ^                   |                  |
//!   +------cancel-------+------cancel------+
//! ```
//!
//! Events that make no sense in the current state are ignored.

use super::slots::Slot;
use crate::capture::{RawRegion, Region};

/// A pointer position in logical screen points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    /// Overlay is up for `slot`, waiting for the pointer to go down.
    Armed { slot: Slot },
    Dragging {
        slot: Slot,
        anchor: Point,
        current: Point,
    },
}

/// A finished gesture: the slot it was for and its raw corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub slot: Slot,
    pub raw: RawRegion,
}

#[derive(Debug, Default)]
pub struct RegionSelector {
    phase: SelectionPhase,
}

impl RegionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Slot the current gesture will land in, if any.
    pub fn target(&self) -> Option<Slot> {
        match self.phase {
            SelectionPhase::Idle => None,
            SelectionPhase::Armed { slot } | SelectionPhase::Dragging { slot, .. } => Some(slot),
        }
    }

    /// Start a selection for `slot`, abandoning any gesture in progress.
    pub fn arm(&mut self, slot: Slot) {
        if let Some(previous) = self.target() {
            log::debug!("[SELECT] Abandoning selection for {}", previous.label());
        }
        self.phase = SelectionPhase::Armed { slot };
    }

    /// Pointer went down. Returns false if no selection is armed.
    pub fn press(&mut self, at: Point) -> bool {
        match self.phase {
            SelectionPhase::Armed { slot } => {
                self.phase = SelectionPhase::Dragging {
                    slot,
                    anchor: at,
                    current: at,
                };
                true
            }
            SelectionPhase::Dragging { slot, .. } => {
                // A second press restarts the rectangle from the new point.
                self.phase = SelectionPhase::Dragging {
                    slot,
                    anchor: at,
                    current: at,
                };
                true
            }
            SelectionPhase::Idle => false,
        }
    }

    /// Pointer moved while held. Returns the candidate rectangle.
    pub fn drag(&mut self, to: Point) -> Option<Region> {
        match &mut self.phase {
            SelectionPhase::Dragging {
                anchor, current, ..
            } => {
                *current = to;
                Some(Region::from_corners(anchor.x, anchor.y, to.x, to.y))
            }
            _ => None,
        }
    }

    /// Pointer released. Completes the gesture and returns to Idle.
    pub fn release(&mut self, at: Point) -> Option<Commit> {
        match self.phase {
            SelectionPhase::Dragging { slot, anchor, .. } => {
                self.phase = SelectionPhase::Idle;
                Some(Commit {
                    slot,
                    raw: RawRegion::new(anchor.x, anchor.y, at.x, at.y),
                })
            }
            _ => None,
        }
    }

    /// Drop any selection in progress. Returns the slot that was targeted.
    pub fn cancel(&mut self) -> Option<Slot> {
        let target = self.target();
        self.phase = SelectionPhase::Idle;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_gesture_commits_anchor_and_release_point() {
        let mut selector = RegionSelector::new();
        selector.arm(Slot::Option1);
        assert!(selector.press(Point::new(50, 80)));
        assert_eq!(
            selector.drag(Point::new(20, 40)),
            Some(Region::from_corners(20, 40, 50, 80))
        );

        let commit = selector.release(Point::new(10, 20)).unwrap();
        assert_eq!(commit.slot, Slot::Option1);
        assert_eq!(commit.raw, RawRegion::new(50, 80, 10, 20));
        assert_eq!(commit.raw.normalize().corners(), (10, 20, 50, 80));
        assert_eq!(selector.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn click_without_moving_commits_zero_area() {
        let mut selector = RegionSelector::new();
        selector.arm(Slot::Question);
        selector.press(Point::new(30, 30));
        let commit = selector.release(Point::new(30, 30)).unwrap();
        let region = commit.raw.normalize();
        assert_eq!(region.corners(), (30, 30, 30, 30));
        assert!(region.is_empty());
    }

    #[test]
    fn press_while_idle_is_ignored() {
        let mut selector = RegionSelector::new();
        assert!(!selector.press(Point::new(1, 1)));
        assert_eq!(selector.drag(Point::new(5, 5)), None);
        assert_eq!(selector.release(Point::new(5, 5)), None);
        assert_eq!(selector.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn release_before_press_keeps_waiting() {
        let mut selector = RegionSelector::new();
        selector.arm(Slot::Option2);
        assert_eq!(selector.release(Point::new(9, 9)), None);
        assert_eq!(selector.phase(), SelectionPhase::Armed { slot: Slot::Option2 });
    }

    #[test]
    fn drag_tracks_current_point() {
        let mut selector = RegionSelector::new();
        selector.arm(Slot::Option3);
        selector.press(Point::new(0, 0));
        selector.drag(Point::new(10, 10));
        selector.drag(Point::new(25, 5));
        assert_eq!(
            selector.phase(),
            SelectionPhase::Dragging {
                slot: Slot::Option3,
                anchor: Point::new(0, 0),
                current: Point::new(25, 5),
            }
        );
    }

    #[test]
    fn rearming_switches_target_slot() {
        let mut selector = RegionSelector::new();
        selector.arm(Slot::Option1);
        selector.press(Point::new(0, 0));
        selector.arm(Slot::Option4);
        assert_eq!(selector.target(), Some(Slot::Option4));
        assert_eq!(selector.release(Point::new(3, 3)), None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut selector = RegionSelector::new();
        selector.arm(Slot::Question);
        selector.press(Point::new(4, 4));
        assert_eq!(selector.cancel(), Some(Slot::Question));
        assert_eq!(selector.phase(), SelectionPhase::Idle);
        assert_eq!(selector.cancel(), None);
    }
}
