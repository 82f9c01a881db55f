use gloo::console;

/// Console logger with a component tag, used wherever request failures are
/// recorded for diagnostics.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::tagged(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::tagged(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::tagged(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::tagged(component, message));
    }

    fn tagged(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
