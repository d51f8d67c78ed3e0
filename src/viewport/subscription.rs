//! Scoped ownership of browser subscriptions.
//!
//! Every scroll listener and intersection observer the site creates is
//! wrapped in a [`Subscription`]. Dropping it (or calling
//! [`Subscription::release`]) detaches the listener and frees the JS
//! closure, so a component only has to keep the guard alive for as long as
//! it is mounted.

use std::fmt;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::error::ViewportError;

pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Runs the release action. Calling this again is a no-op.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// One intersection measurement as the browser reported it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub ratio: f64,
    pub intersecting: bool,
}

/// What a visibility handler wants after seeing a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Stop,
}

/// Attaches `handler` to the window's `scroll` event.
pub fn listen_window_scroll(handler: impl FnMut() + 'static) -> Result<Subscription, ViewportError> {
    let window = web_sys::window().ok_or(ViewportError::NoWindow)?;

    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .map_err(|err| ViewportError::listener("scroll", err))?;

    Ok(Subscription::new(move || {
        if let Err(err) =
            window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            debug!("scroll listener already gone: {:?}", err);
        }
        drop(callback);
    }))
}

/// Watches how much of `target` is inside the viewport.
///
/// `handler` gets every measurement the browser reports. Returning
/// [`Observation::Stop`] disconnects the observer; the returned guard still
/// has to be kept until unmount so the closure stays alive for any
/// measurement already queued.
pub fn observe_visibility<F>(
    target: &Element,
    threshold: f64,
    mut handler: F,
) -> Result<Subscription, ViewportError>
where
    F: FnMut(Visibility) -> Observation + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let visibility = Visibility {
                ratio: entry.intersection_ratio(),
                intersecting: entry.is_intersecting(),
            };
            if handler(visibility) == Observation::Stop {
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(ViewportError::observer)?;
    observer.observe(target);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_subscription() -> (Subscription, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        (subscription, released)
    }

    #[test]
    fn release_runs_once() {
        let (mut subscription, released) = counting_subscription();
        assert!(subscription.is_active());

        subscription.release();
        subscription.release();

        assert_eq!(released.get(), 1);
        assert!(!subscription.is_active());
    }

    #[test]
    fn drop_releases() {
        let (subscription, released) = counting_subscription();
        drop(subscription);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_after_release_does_not_release_again() {
        let (mut subscription, released) = counting_subscription();
        subscription.release();
        drop(subscription);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn debug_shows_state() {
        let (mut subscription, _) = counting_subscription();
        assert_eq!(format!("{:?}", subscription), "Subscription { active: true }");
        subscription.release();
        assert_eq!(format!("{:?}", subscription), "Subscription { active: false }");
    }
}
