//! Region selection domain: slots plus the drag state machine.

pub mod selector;
pub mod slots;

pub use selector::{Commit, Point, RegionSelector, SelectionPhase};
pub use slots::{RegionSlots, Slot, SlotRegion};

use std::sync::Mutex;

/// Thread-safe holder for the slot table and the selector.
/// Written by the selection commands, read by show_answer.
pub struct RegionState {
    pub slots: Mutex<RegionSlots>,
    pub selector: Mutex<RegionSelector>,
    /// Held while the overlay window is being replaced.
    overlay: Mutex<()>,
}

impl RegionState {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(RegionSlots::new()),
            selector: Mutex::new(RegionSelector::new()),
            overlay: Mutex::new(()),
        }
    }

    /// Replace the overlay via `open` and arm the selector for `slot`.
    ///
    /// Calls are serialized, so two quick slot clicks cannot build two
    /// overlays at once. The selector is dropped to Idle before `open` runs
    /// and armed only once it succeeds: a failed open leaves nothing armed.
    /// The selector lock is not held across `open`, so pointer commands
    /// from the window being replaced never wait on it.
    pub fn open_selection<F>(&self, slot: Slot, open: F) -> Result<(), String>
    where
        F: FnOnce() -> Result<(), String>,
    {
        let _swap = self.overlay.lock().map_err(|e| e.to_string())?;

        let abandoned = self.selector.lock().map_err(|e| e.to_string())?.cancel();
        if let Some(previous) = abandoned {
            log::debug!("[SELECT] Abandoning selection for {}", previous.label());
        }

        open()?;

        self.selector.lock().map_err(|e| e.to_string())?.arm(slot);
        Ok(())
    }
}

impl Default for RegionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn successful_open_arms_the_slot() {
        let state = RegionState::new();
        state.open_selection(Slot::Option2, || Ok(())).unwrap();
        assert_eq!(state.selector.lock().unwrap().target(), Some(Slot::Option2));
    }

    #[test]
    fn failed_open_leaves_selector_idle() {
        let state = RegionState::new();
        state.open_selection(Slot::Question, || Ok(())).unwrap();
        state.selector.lock().unwrap().press(Point::new(5, 5));

        let result = state.open_selection(Slot::Option1, || Err("no window".to_string()));

        assert_eq!(result, Err("no window".to_string()));
        assert_eq!(state.selector.lock().unwrap().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn selector_is_idle_while_overlay_is_replaced() {
        let state = RegionState::new();
        state.open_selection(Slot::Question, || Ok(())).unwrap();
        state
            .open_selection(Slot::Option3, || {
                // Pointer events from the old overlay must find nothing armed.
                let mut selector = state.selector.lock().unwrap();
                assert!(!selector.press(Point::new(1, 1)));
                Ok(())
            })
            .unwrap();
        assert_eq!(state.selector.lock().unwrap().target(), Some(Slot::Option3));
    }

    #[test]
    fn concurrent_opens_never_overlap() {
        let state = Arc::new(RegionState::new());
        let live = Arc::new(AtomicUsize::new(0));
        let max_live = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = Slot::ALL
            .into_iter()
            .map(|slot| {
                let state = Arc::clone(&state);
                let live = Arc::clone(&live);
                let max_live = Arc::clone(&max_live);
                std::thread::spawn(move || {
                    state.open_selection(slot, || {
                        let now = live.fetch_add(1, Ordering::SeqCst) + 1;
                        max_live.fetch_max(now, Ordering::SeqCst);
                        std::thread::sleep(std::time::Duration::from_millis(5));
                        live.fetch_sub(1, Ordering::SeqCst);
                        Ok(())
                    })
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert_eq!(max_live.load(Ordering::SeqCst), 1);
        assert!(state.selector.lock().unwrap().target().is_some());
    }
}
