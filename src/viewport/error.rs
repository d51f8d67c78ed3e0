use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser-side failures while wiring up viewport tracking.
///
/// None of these reach the user. Callers log them and fall back to the
/// same state they would have with a missing element.
#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
}

impl ViewportError {
    pub fn listener(event: &'static str, err: JsValue) -> Self {
        ViewportError::Listener {
            event,
            reason: format!("{:?}", err),
        }
    }

    pub fn observer(err: JsValue) -> Self {
        ViewportError::Observer(format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(ViewportError::NoWindow.to_string(), "no browser window available");
        assert_eq!(
            ViewportError::Listener { event: "scroll", reason: "denied".into() }.to_string(),
            "failed to attach `scroll` listener: denied"
        );
        assert_eq!(
            ViewportError::Observer("unsupported".into()).to_string(),
            "failed to create intersection observer: unsupported"
        );
    }
}
