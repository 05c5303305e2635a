use crate::domain::model::Screen;
use crate::domain::ports::{AlertSurface, Navigator};

/// Prints alerts to stdout, the terminal stand-in for a modal dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlerts;

impl AlertSurface for ConsoleAlerts {
    fn alert(&self, title: &str, message: &str) {
        tracing::debug!(title, message, "Alert shown");
        println!("[{}] {}", title, message);
    }
}

/// Records the requested screen in the log; a CLI has nothing to transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, target: Screen) {
        tracing::info!(screen = %target, "➡️ Navigate");
    }
}
