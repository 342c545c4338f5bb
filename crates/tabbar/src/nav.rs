//! Navigation seam and the cross-context dispatch handoff.
//!
//! Press handling runs on the animation context, which is not allowed
//! to call into the router directly. Navigation requests are therefore
//! marshalled to the input/navigation context as fire-and-forget
//! messages: no return value, no result surfaced back. Router failures
//! are the router's concern.

use futures::StreamExt;
use futures::channel::mpsc;

/// External navigation engine, consumed but never owned by this crate.
pub trait Router {
    /// The current navigation location.
    fn current_path(&self) -> String;
    /// Navigate to a route. Failures are not surfaced to callers.
    fn navigate(&self, route: &str);
}

/// Create a navigation handoff pair.
pub fn nav_channel() -> (NavSender, NavReceiver) {
    let (tx, rx) = mpsc::unbounded();
    (NavSender { tx }, NavReceiver { rx })
}

/// Cloneable fire-and-forget handle used from the animation context.
#[derive(Clone)]
pub struct NavSender {
    tx: mpsc::UnboundedSender<String>,
}

impl NavSender {
    /// Submit one navigate request. Safe to call from any context; a
    /// closed receiver drops the request silently.
    pub fn dispatch(&self, route: &str) {
        log::debug!("dispatching navigation to {route:?}");
        if self.tx.unbounded_send(route.to_string()).is_err() {
            log::warn!("navigation context gone, dropping navigate({route:?})");
        }
    }
}

/// Receiving half, owned by the input/navigation context.
pub struct NavReceiver {
    rx: mpsc::UnboundedReceiver<String>,
}

impl NavReceiver {
    /// Synchronously apply every pending request to the router.
    /// Returns the number of dispatches performed.
    pub fn drain(&mut self, router: &dyn Router) -> usize {
        let mut dispatched = 0;
        while let Ok(Some(route)) = self.rx.try_next() {
            router.navigate(&route);
            dispatched += 1;
        }
        dispatched
    }

    /// Apply requests until every sender is dropped. Intended to be
    /// spawned on the input context's executor.
    pub async fn run(mut self, router: impl Router) {
        while let Some(route) = self.rx.next().await {
            router.navigate(&route);
        }
    }
}
