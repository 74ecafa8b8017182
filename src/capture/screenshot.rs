//! Region capture via xcap.

use super::{CaptureError, Region};
use image::DynamicImage;
use xcap::Monitor;

/// Pixel rectangle inside a captured monitor frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Capture the pixels under `region`.
///
/// `region` is in logical screen coordinates, the same units xcap uses
/// for monitor placement. The monitor is chosen by the region's top-left
/// corner, then the rectangle is scaled to the frame's physical pixels and
/// clamped to it, so a region spilling past the screen edge yields only
/// its visible part. A degenerate region yields an empty image.
pub fn capture_region(region: &Region) -> Result<DynamicImage, CaptureError> {
    let start = std::time::Instant::now();

    let monitor = Monitor::from_point(region.x1(), region.y1()).map_err(|source| {
        CaptureError::NoMonitor {
            x: region.x1(),
            y: region.y1(),
            source,
        }
    })?;
    let origin_x = monitor.x()?;
    let origin_y = monitor.y()?;
    let scale = monitor.scale_factor()?;

    let frame = monitor.capture_image()?;
    if frame.width() == 0 || frame.height() == 0 {
        return Err(CaptureError::Unavailable(
            "monitor returned an empty frame".to_string(),
        ));
    }
    let capture_ms = start.elapsed().as_millis();

    let rect = crop_rect(
        region,
        (origin_x, origin_y),
        scale,
        (frame.width(), frame.height()),
    );
    let cropped =
        DynamicImage::ImageRgba8(frame).crop_imm(rect.x, rect.y, rect.width, rect.height);

    log::info!(
        "[CAPTURE] Region {} captured in {}ms ({}x{} px at scale {})",
        region,
        capture_ms,
        cropped.width(),
        cropped.height(),
        scale
    );

    Ok(cropped)
}

/// Map a logical region onto a monitor frame of `frame` physical pixels.
///
/// The offset is taken from the monitor origin, both sides are multiplied
/// by `scale`, and the result is clamped to the frame.
pub fn crop_rect(
    region: &Region,
    origin: (i32, i32),
    scale: f32,
    frame: (u32, u32),
) -> CropRect {
    let scale = if scale.is_finite() && scale > 0.0 { scale as f64 } else { 1.0 };
    let to_px = |logical: f64| (logical * scale).round().max(0.0) as u32;

    let (origin_x, origin_y) = origin;
    let (frame_w, frame_h) = frame;

    let x = to_px((region.x1() as f64 - origin_x as f64).max(0.0)).min(frame_w);
    let y = to_px((region.y1() as f64 - origin_y as f64).max(0.0)).min(frame_h);
    let width = to_px(region.width() as f64).min(frame_w - x);
    let height = to_px(region.height() as f64).min(frame_h - y);

    CropRect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HD: (u32, u32) = (1920, 1080);

    #[test]
    fn offset_is_relative_to_monitor_origin() {
        let region = Region::from_corners(2000, 150, 2400, 300);
        let rect = crop_rect(&region, (1920, 0), 1.0, FULL_HD);
        assert_eq!(rect, CropRect { x: 80, y: 150, width: 400, height: 150 });
    }

    #[test]
    fn offset_never_goes_negative() {
        let region = Region::from_corners(-10, -10, 50, 50);
        let rect = crop_rect(&region, (0, 0), 1.0, FULL_HD);
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn retina_region_is_scaled_to_physical_pixels() {
        // 1512x982 points backed by a 3024x1964 frame.
        let region = Region::from_corners(1000, 600, 1200, 700);
        let rect = crop_rect(&region, (0, 0), 2.0, (3024, 1964));
        assert_eq!(rect, CropRect { x: 2000, y: 1200, width: 400, height: 200 });
    }

    #[test]
    fn fractional_scale_rounds_to_nearest_pixel() {
        let region = Region::from_corners(101, 0, 201, 33);
        let rect = crop_rect(&region, (0, 0), 1.5, FULL_HD);
        assert_eq!(rect, CropRect { x: 152, y: 0, width: 150, height: 50 });
    }

    #[test]
    fn region_spilling_past_the_edge_is_clamped() {
        let region = Region::from_corners(1800, 1000, 2100, 1200);
        let rect = crop_rect(&region, (0, 0), 1.0, FULL_HD);
        assert_eq!(rect, CropRect { x: 1800, y: 1000, width: 120, height: 80 });
    }

    #[test]
    fn scaled_region_spilling_past_the_edge_is_clamped() {
        let region = Region::from_corners(1400, 900, 1600, 1000);
        let rect = crop_rect(&region, (0, 0), 2.0, (3024, 1964));
        assert_eq!(rect, CropRect { x: 2800, y: 1800, width: 224, height: 164 });
    }

    #[test]
    fn region_starting_past_the_frame_is_empty() {
        let region = Region::from_corners(5000, 5000, 5100, 5100);
        let rect = crop_rect(&region, (0, 0), 1.0, FULL_HD);
        assert_eq!(rect, CropRect { x: 1920, y: 1080, width: 0, height: 0 });
    }

    #[test]
    fn degenerate_region_maps_to_empty_rect() {
        let region = Region::from_corners(30, 30, 30, 30);
        let rect = crop_rect(&region, (0, 0), 2.0, FULL_HD);
        assert_eq!((rect.width, rect.height), (0, 0));
    }

    #[test]
    fn bogus_scale_falls_back_to_one() {
        let region = Region::from_corners(10, 10, 20, 20);
        let rect = crop_rect(&region, (0, 0), 0.0, FULL_HD);
        assert_eq!(rect, CropRect { x: 10, y: 10, width: 10, height: 10 });
    }
}
