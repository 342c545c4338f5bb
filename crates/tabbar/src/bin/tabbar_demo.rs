//! Headless demo: scripted taps against the animation loop, with the
//! router living on the input context. Prints a frame summary after
//! each step.
//!
//! Run with `RUST_LOG=debug cargo run --bin tabbar_demo` for the
//! dispatch/visibility traces.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use tabbar::executor::{AnimationContext, InputContext};
use tabbar::runtime::{AnimationLoop, LoopHandle};
use tabbar::{Router, TabSet, nav_channel};

/// In-memory router: navigation just records the new path.
#[derive(Clone, Default)]
struct DemoRouter {
    path: Rc<RefCell<String>>,
}

impl Router for DemoRouter {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, route: &str) {
        println!("router: navigate -> {route}");
        *self.path.borrow_mut() = route.to_string();
    }
}

fn print_frame(label: &str, handle: &mut LoopHandle) {
    for _ in 0..100 {
        if let Some(frame) = handle.try_frame() {
            println!(
                "[{label}] bar y={:+6.1} opacity={:.2} interactive={}",
                frame.bar.translate_y, frame.bar.opacity, frame.bar.interactive
            );
            for tab in &frame.tabs {
                println!(
                    "    {:<8} scale={:.3} highlight={:.2} label_x={:+5.1}",
                    tab.id, tab.scale, tab.background.a, tab.label_offset_x
                );
            }
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    println!("[{label}] no frame available");
}

fn main() -> Result<()> {
    env_logger::init();

    let animation = AnimationContext::new();
    let (nav_tx, nav_rx) = nav_channel();
    let mut handle = AnimationLoop::spawn(&animation, TabSet::default(), nav_tx);

    // The router is not Send; it lives on the input context, which
    // only makes progress when this thread polls it.
    let input = InputContext::new();
    let router = DemoRouter::default();
    *router.path.borrow_mut() = "/home".to_string();
    let _nav_task = input.spawn(nav_rx.run(router.clone()));

    handle.set_path("/home");

    let script = ["chat", "chat", "profile"];
    for tab_id in script {
        println!("\n== press {tab_id} ==");
        handle.press(tab_id);
        std::thread::sleep(Duration::from_millis(150));

        // Input context: apply pending navigations, then report the
        // resulting path back to the loop.
        let before = router.current_path();
        input.run_until_stalled();
        let after = router.current_path();
        if after != before {
            handle.set_path(&after);
        }

        std::thread::sleep(Duration::from_millis(400));
        print_frame(tab_id, &mut handle);
    }

    // The /profile route suppresses the bar, so this tap is ignored.
    println!("\n== press home (bar hidden) ==");
    handle.press("home");
    std::thread::sleep(Duration::from_millis(150));
    input.run_until_stalled();
    print_frame("home", &mut handle);

    handle.shutdown();
    Ok(())
}
