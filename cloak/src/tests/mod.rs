
use crate::platforms::MockEngine;
use crate::{ControlConfig, DesktopControl};
use std::sync::Arc;

// Initialize tracing for tests
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_target(true)
        .with_test_writer()
        .try_init();
}

// Test helper: a controller wired to a fresh mock engine
pub fn setup_mock_control(config: ControlConfig) -> (DesktopControl, Arc<MockEngine>) {
    init_tracing();
    let engine = Arc::new(MockEngine::new());
    let control = DesktopControl::with_engine(engine.clone(), config);
    (control, engine)
}
