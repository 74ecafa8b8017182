//! Screen capture domain: public API.
//!
//! Owns the screen rectangle types and region capture. External code
//! should only use what is exported here.

mod region;
mod screenshot;

pub use region::{RawRegion, Region};
pub use screenshot::{capture_region, crop_rect, CropRect};

/// Failure to obtain pixels for a region.
///
/// Any of these aborts the current "show answer" run.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no monitor at ({x}, {y}): {source}")]
    NoMonitor {
        x: i32,
        y: i32,
        #[source]
        source: xcap::XCapError,
    },
    #[error("screen capture failed: {0}")]
    Screen(#[from] xcap::XCapError),
    #[error("screen capture unavailable: {0}")]
    Unavailable(String),
}
