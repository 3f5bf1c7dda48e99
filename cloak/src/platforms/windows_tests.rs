// These tests drive the real cursor of the machine running them. They are
// ignored by default; run them on an interactive desktop with
// `cargo test -p cloak -- --ignored --test-threads=1`.

use super::windows::*;
use crate::platforms::DesktopEngine;
use crate::{ClipRect, ControlConfig, DesktopControl, ScreenPoint, WindowHandle};
use std::sync::{Arc, Mutex};

// The cursor is a machine-wide singleton
static DESKTOP_LOCK: Mutex<()> = Mutex::new(());

fn windows_control() -> (DesktopControl, Arc<WindowsEngine>) {
    crate::tests::init_tracing();
    let engine = Arc::new(WindowsEngine::new());
    let control = DesktopControl::with_engine(engine.clone(), ControlConfig::default());
    (control, engine)
}

#[test]
#[ignore]
fn test_hide_and_lock_pins_real_cursor() {
    let _guard = DESKTOP_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (control, engine) = windows_control();

    control.hide_and_lock_cursor_at(200.7, 150.3).unwrap();

    let pinned = ScreenPoint::new(200, 150);
    assert_eq!(engine.cursor_pos().unwrap(), pinned);
    assert_eq!(engine.clip_rect().unwrap(), ClipRect::single_pixel(pinned));

    // Programmatic moves outside the pixel are clamped back
    engine.set_cursor_pos(ScreenPoint::new(20, 20)).unwrap();
    assert_eq!(engine.cursor_pos().unwrap(), pinned);

    control.restore_cursor();

    let released = engine.clip_rect().unwrap();
    assert!(released.width() > 1 && released.height() > 1, "clip should cover the screen after restore");
    engine.set_cursor_pos(ScreenPoint::new(20, 20)).unwrap();
    assert_eq!(engine.cursor_pos().unwrap(), ScreenPoint::new(20, 20));
}

#[test]
#[ignore]
fn test_restore_without_hide_does_not_crash() {
    let _guard = DESKTOP_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (control, engine) = windows_control();

    control.restore_cursor();

    // Put the counter back where it was
    engine.hide_cursor();
}

#[test]
#[ignore]
fn test_stacked_hides_need_matching_restores() {
    let _guard = DESKTOP_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (control, engine) = windows_control();

    let baseline = engine.show_cursor() - 1;
    engine.hide_cursor();

    control.hide_and_lock_cursor_at(0.0, 0.0).unwrap();
    control.hide_and_lock_cursor_at(10.0, 10.0).unwrap();
    control.restore_cursor();

    // Clip is gone after one restore, the counter is still one below baseline
    assert!(engine.clip_rect().unwrap().width() > 1);
    let probe = engine.show_cursor();
    assert_eq!(probe, baseline);
    engine.hide_cursor();

    control.restore_cursor();
    let probe = engine.show_cursor();
    assert_eq!(probe, baseline + 1);
    engine.hide_cursor();
}

#[test]
#[ignore]
fn test_capture_exclusion_on_invalid_handle_does_not_crash() {
    let _guard = DESKTOP_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (control, engine) = windows_control();

    let bogus = WindowHandle::new(0x7fff_fff0);
    control.set_window_hidden_from_capture(bogus);
    control.set_window_hidden_from_capture_raw(0.0).unwrap();

    assert!(engine.exclude_from_capture(bogus, crate::CaptureMode::Monitor).is_err());
    assert!(engine.display_affinity(bogus).is_err());
}
