//! Background animation loop.
//!
//! Runs the controller on the animation context: drains input commands,
//! ticks the channels with wall-clock deltas, and publishes frames for
//! a renderer to pick up. The handle side is cheap and `Send`; dropping
//! it shuts the loop down.

use std::time::Duration;

use futures::channel::mpsc;
use web_time::Instant;

use crate::config::TabSet;
use crate::controller::TabBar;
use crate::executor::{AnimationContext, Task};
use crate::nav::NavSender;
use crate::style::BarFrame;

/// Target sampling cadence, roughly 60Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

enum Command {
    PathChanged(String),
    Press(String),
    Shutdown,
}

/// Handle to a running [`AnimationLoop`].
pub struct LoopHandle {
    commands: mpsc::UnboundedSender<Command>,
    frames: mpsc::UnboundedReceiver<BarFrame>,
    task: Task<()>,
}

impl LoopHandle {
    /// Forward a path change into the loop.
    pub fn set_path(&self, path: &str) {
        let _ = self
            .commands
            .unbounded_send(Command::PathChanged(path.to_string()));
    }

    /// Forward a tab press into the loop.
    pub fn press(&self, tab_id: &str) {
        let _ = self.commands.unbounded_send(Command::Press(tab_id.to_string()));
    }

    /// Take the most recent published frame, discarding older ones.
    pub fn try_frame(&mut self) -> Option<BarFrame> {
        let mut latest = None;
        while let Ok(Some(frame)) = self.frames.try_next() {
            latest = Some(frame);
        }
        latest
    }

    /// Ask the loop to stop and wait for it to exit.
    pub fn shutdown(mut self) {
        let _ = self.commands.unbounded_send(Command::Shutdown);
        for _ in 0..200 {
            if self.task.try_take().is_some() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        log::warn!("animation loop did not shut down in time");
    }
}

/// The sampling loop owning a [`TabBar`].
pub struct AnimationLoop;

impl AnimationLoop {
    /// Spawn the loop on `context`. The controller is created inside
    /// the loop, mounted, and ticked until shutdown.
    pub fn spawn(context: &AnimationContext, tabs: TabSet, nav: NavSender) -> LoopHandle {
        let (command_tx, mut command_rx) = mpsc::unbounded();
        let (frame_tx, frame_rx) = mpsc::unbounded();

        let task = context.spawn(async move {
            let mut bar = TabBar::new(tabs, nav);
            bar.mount();
            let mut last = Instant::now();

            loop {
                let mut stop = false;
                while let Ok(Some(command)) = command_rx.try_next() {
                    match command {
                        Command::PathChanged(path) => bar.on_path_changed(&path),
                        Command::Press(tab_id) => bar.press(&tab_id),
                        Command::Shutdown => stop = true,
                    }
                }
                if stop {
                    log::debug!("animation loop stopping");
                    break;
                }

                let now = Instant::now();
                bar.tick(now - last);
                last = now;

                if frame_tx.unbounded_send(bar.sample()).is_err() {
                    // Renderer gone; nothing left to animate for.
                    break;
                }
                std::thread::sleep(FRAME_INTERVAL);
            }
        });

        LoopHandle {
            commands: command_tx,
            frames: frame_rx,
            task,
        }
    }
}
