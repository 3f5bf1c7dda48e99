mod desktop;
mod exceptions;

pub use desktop::{hide_and_lock_cursor, restore_cursor, set_window_hidden_from_capture};

// Error handling - see exceptions.rs for the JS error codes
pub use exceptions::map_error;
