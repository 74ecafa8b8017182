//! Region selection and small utility Tauri commands.
//!
//! These are thin wrappers that bridge frontend invoke() calls to the
//! selector and slot table. The show-answer flow lives in pipeline.rs.

use crate::capture::Region;
use crate::regions::{Point, RegionState, Slot, SlotRegion};
use tauri::{Emitter, Manager};

const OVERLAY_LABEL: &str = "overlay";

/// Event carrying text for the main window's display area.
pub const DISPLAY_TEXT_EVENT: &str = "display-text";

/// Status line shown while the overlay is up.
pub fn selecting_message(slot: Slot) -> String {
    format!(
        "Selecting {}...\nPlease select the region on the screen.\n",
        slot.label()
    )
}

/// Tauri command: arm the selector for `slot` and open the overlay.
///
/// Returns the status text for the main window.
#[tauri::command]
pub async fn begin_selection(
    app: tauri::AppHandle,
    state: tauri::State<'_, RegionState>,
    slot: Slot,
) -> Result<String, String> {
    state.open_selection(slot, || {
        // A leftover overlay belongs to an abandoned gesture.
        if let Some(existing) = app.get_webview_window(OVERLAY_LABEL) {
            let _ = existing.destroy();
        }

        tauri::WebviewWindowBuilder::new(
            &app,
            OVERLAY_LABEL,
            tauri::WebviewUrl::App("overlay.html".into()),
        )
        .title("QuizSnap Selection")
        .fullscreen(true)
        .transparent(true)
        .decorations(false)
        .always_on_top(true)
        .skip_taskbar(true)
        .build()
        .map(|_| ())
        .map_err(|e| format!("Failed to create overlay window: {}", e))
    })?;
    log::info!("[SELECT] Selecting {}", slot.label());

    Ok(selecting_message(slot))
}

/// Tauri command: pointer pressed on the overlay (logical screen points).
#[tauri::command]
pub fn selection_press(
    state: tauri::State<'_, RegionState>,
    x: i32,
    y: i32,
) -> Result<bool, String> {
    let mut selector = state.selector.lock().map_err(|e| e.to_string())?;
    let started = selector.press(Point::new(x, y));
    if started {
        log::debug!("[SELECT] Anchor at ({}, {})", x, y);
    }
    Ok(started)
}

/// Tauri command: pointer moved while held. Returns the candidate rectangle.
#[tauri::command]
pub fn selection_drag(
    state: tauri::State<'_, RegionState>,
    x: i32,
    y: i32,
) -> Result<Option<Region>, String> {
    let mut selector = state.selector.lock().map_err(|e| e.to_string())?;
    Ok(selector.drag(Point::new(x, y)))
}

/// Tauri command: pointer released. Stores the region and closes the overlay.
///
/// Returns the stored region, or `None` if no drag was in progress.
#[tauri::command]
pub fn selection_release(
    app: tauri::AppHandle,
    state: tauri::State<'_, RegionState>,
    x: i32,
    y: i32,
) -> Result<Option<Region>, String> {
    let commit = {
        let mut selector = state.selector.lock().map_err(|e| e.to_string())?;
        selector.release(Point::new(x, y))
    };
    let Some(commit) = commit else {
        return Ok(None);
    };

    let region = commit.raw.normalize();
    {
        let mut slots = state.slots.lock().map_err(|e| e.to_string())?;
        slots.set(commit.slot, region);
    }
    log::info!("[SELECT] {} set to {}", commit.slot.label(), region);

    close_overlay_window(&app);
    let _ = app.emit(DISPLAY_TEXT_EVENT, "Region set.\n");

    Ok(Some(region))
}

/// Tauri command: abandon the current selection (Escape on the overlay).
#[tauri::command]
pub fn cancel_selection(
    app: tauri::AppHandle,
    state: tauri::State<'_, RegionState>,
) -> Result<(), String> {
    let cancelled = {
        let mut selector = state.selector.lock().map_err(|e| e.to_string())?;
        selector.cancel()
    };
    close_overlay_window(&app);
    if let Some(slot) = cancelled {
        log::info!("[SELECT] Selection for {} cancelled", slot.label());
        let _ = app.emit(DISPLAY_TEXT_EVENT, "Selection cancelled.\n");
    }
    Ok(())
}

/// Tauri command: current slot contents, in slot order.
#[tauri::command]
pub fn get_regions(state: tauri::State<'_, RegionState>) -> Result<Vec<SlotRegion>, String> {
    let slots = state.slots.lock().map_err(|e| e.to_string())?;
    Ok(slots.filled())
}

/// Tauri command: copy text to the system clipboard.
///
/// Uses arboard for native clipboard access, which works reliably
/// unlike navigator.clipboard in webview windows.
#[tauri::command]
pub fn copy_to_clipboard(text: String) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(&text).map_err(|e| e.to_string())?;
    log::info!("[ACTION] Copied {} chars to clipboard", text.chars().count());
    Ok(())
}

fn close_overlay_window(app: &tauri::AppHandle) {
    if let Some(window) = app.get_webview_window(OVERLAY_LABEL) {
        if let Err(e) = window.destroy() {
            log::warn!("[SELECT] Failed to close overlay: {}", e);
        }
    }
}
