//! Blocking user notices.

use std::fmt::Debug;
use crate::{UiError, UiResult};

/// Show a blocking notice through `window.alert`.
///
/// Only a missing `window` is an error; a failing alert is logged.
pub fn notify_blocking(message: &str) -> UiResult<()> {
    notify_with(web_sys::window(), |window| window.alert_with_message(message))
}

fn notify_with<W, E, F>(window: Option<W>, alert: F) -> UiResult<()>
where
    E: Debug,
    F: FnOnce(&W) -> Result<(), E>,
{
    let window = window.ok_or_else(|| UiError::MissingElement("window".into()))?;
    if let Err(e) = alert(&window) {
        log::warn!("Notice not shown, alert failed: {:?}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_window() {
        let result = notify_with(None::<()>, |_| Ok::<(), String>(()));
        assert_eq!(result, Err(UiError::MissingElement("window".into())));
    }

    #[test]
    fn test_alert_failure_is_not_missing_element() {
        let result = notify_with(Some(()), |_| Err("SecurityError"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_alert_receives_window() {
        let mut shown = None;
        let result = notify_with(Some("window"), |w| {
            shown = Some(*w);
            Ok::<(), String>(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(shown, Some("window"));
    }
}
