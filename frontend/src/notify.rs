use common::inventory::{ApiError, Notifier};

/// `Notifier` backed by `window.alert` and the browser console.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn trace_error(&self, context: &str, error: &ApiError) {
        gloo_console::error!(format!("{}:", context), error.to_string());
    }
}
