use cloak::config::ENV_ALLOW_FALLBACK;
use cloak::{ControlConfig, DesktopControl};
use napi_derive::napi;
use std::sync::{Once, OnceLock};

use crate::map_error;

static CONTROL: OnceLock<DesktopControl> = OnceLock::new();

fn init_logging(log_level: &str) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .try_init();
    });
}

/// Process-wide controller, created on first use from `CLOAK_*` variables.
///
/// Hosts without a native engine get the logging fallback unless
/// `CLOAK_ALLOW_FALLBACK` explicitly disables it.
fn control() -> napi::Result<&'static DesktopControl> {
    if let Some(control) = CONTROL.get() {
        return Ok(control);
    }

    let mut config = ControlConfig::from_env().map_err(map_error)?;
    if std::env::var_os(ENV_ALLOW_FALLBACK).is_none() {
        config.allow_fallback = true;
    }
    init_logging(&config.log_level);

    let control = DesktopControl::new(config).map_err(map_error)?;
    Ok(CONTROL.get_or_init(|| control))
}

/// Hide a window from screen capture and remote streaming.
///
/// @param {number} handle - The native window handle.
#[napi(js_name = "setWindowHiddenFromCapture")]
pub fn set_window_hidden_from_capture(handle: f64) -> napi::Result<()> {
    control()?
        .set_window_hidden_from_capture_raw(handle)
        .map_err(map_error)
}

/// Hide the system cursor and lock it to a single screen pixel.
///
/// Calls stack: each one needs its own `restoreCursor()` before the cursor
/// becomes visible again.
///
/// @param {number} x - The X coordinate to lock the cursor to.
/// @param {number} y - The Y coordinate to lock the cursor to.
#[napi(js_name = "hideAndLockCursor")]
pub fn hide_and_lock_cursor(x: f64, y: f64) -> napi::Result<()> {
    control()?.hide_and_lock_cursor_at(x, y).map_err(map_error)
}

/// Show the system cursor and release the lock.
#[napi(js_name = "restoreCursor")]
pub fn restore_cursor() -> napi::Result<()> {
    control()?.restore_cursor();
    Ok(())
}
