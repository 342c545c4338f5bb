//! Execution contexts for the two halves of the controller.
//!
//! The bar's work splits cleanly in two: continuous animation sampling,
//! which must never wait on navigation or layout, and router work,
//! which owns non-`Send` state and runs on whatever thread hosts the
//! app's input handling. Each side gets its own context here.

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

/// Handle to a spawned unit of work.
pub struct Task<R> {
    receiver: oneshot::Receiver<R>,
}

impl<R> Task<R> {
    fn from_receiver(receiver: oneshot::Receiver<R>) -> Self {
        Self { receiver }
    }

    /// Take the result if the task has finished.
    pub fn try_take(&mut self) -> Option<R> {
        self.receiver.try_recv().ok().flatten()
    }
}

/// Dedicated context for the animation sampling loop.
///
/// Each spawn gets its own thread, so a sampling loop that sleeps
/// between frames never holds up input handling or navigation.
#[derive(Clone, Copy, Default)]
pub struct AnimationContext;

impl AnimationContext {
    /// Create an animation context.
    pub fn new() -> Self {
        Self
    }

    /// Run `future` to completion on its own thread.
    pub fn spawn<R>(&self, future: impl Future<Output = R> + Send + 'static) -> Task<R>
    where
        R: Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        std::thread::spawn(move || {
            let _ = sender.send(block_on(future));
        });
        Task::from_receiver(receiver)
    }
}

/// Single-threaded context for input and navigation work.
///
/// Futures spawned here may hold the router and other non-`Send` state;
/// they make progress only when the owning thread polls via
/// [`InputContext::run_until_stalled`], which is how a navigation
/// handoff stays ordered with respect to the input events around it.
pub struct InputContext {
    pool: RefCell<LocalPool>,
    _not_send: PhantomData<Rc<()>>,
}

impl InputContext {
    /// Create an input context.
    pub fn new() -> Self {
        Self {
            pool: RefCell::new(LocalPool::new()),
            _not_send: PhantomData,
        }
    }

    /// Queue a future on this context. It runs no earlier than the next
    /// [`InputContext::run_until_stalled`].
    pub fn spawn<R>(&self, future: impl Future<Output = R> + 'static) -> Task<R>
    where
        R: 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let spawner = self.pool.borrow().spawner();
        let queued = spawner.spawn_local(async move {
            let _ = sender.send(future.await);
        });
        if let Err(error) = queued {
            // Only reachable once the pool is shut down; the task
            // handle then simply never yields a result.
            log::warn!("input context rejected task: {error}");
        }
        Task::from_receiver(receiver)
    }

    /// Poll queued futures until none can make progress.
    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}

impl Default for InputContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationContext, InputContext};
    use crate::nav::{Router, nav_channel};
    use motion::{Spring, SpringParams};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct RecordingRouter {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Router for RecordingRouter {
        fn current_path(&self) -> String {
            self.calls.borrow().last().cloned().unwrap_or_default()
        }

        fn navigate(&self, route: &str) {
            self.calls.borrow_mut().push(route.to_string());
        }
    }

    #[test]
    fn animation_context_completes_sampling_work() {
        let context = AnimationContext::new();
        // Entrance profile run off-thread, like the sampling loop does.
        let mut task = context.spawn(async {
            let mut spring = Spring::new(100.0, 0.0, SpringParams::new(20.0, 300.0, 1.0));
            for _ in 0..300 {
                spring.tick(Duration::from_millis(16));
            }
            spring.current()
        });

        for _ in 0..100 {
            if let Some(settled) = task.try_take() {
                assert!(settled.abs() < 0.01);
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }

        panic!("sampling task never finished");
    }

    #[test]
    fn input_context_progress_requires_polling() {
        let context = InputContext::new();
        let (tx, rx) = nav_channel();
        let router = RecordingRouter::default();
        let mut task = context.spawn(rx.run(router.clone()));

        // A dispatch queued before the poll is not applied yet.
        tx.dispatch("/chat");
        assert!(router.calls.borrow().is_empty());
        assert_eq!(task.try_take(), None);

        context.run_until_stalled();
        assert_eq!(*router.calls.borrow(), vec!["/chat"]);

        // The run future finishes once every sender is gone.
        drop(tx);
        context.run_until_stalled();
        assert_eq!(task.try_take(), Some(()));
    }
}
