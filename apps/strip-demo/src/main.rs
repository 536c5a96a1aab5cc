//! Headless carousel drive: scripts a drag, a fling, wheel ticks and step
//! controls over a five-card strip, logging what a render layer would see.

use std::cell::Cell;
use std::rc::Rc;

use whirl_animation::CarouselConfig;
use whirl_core::FrameDispatcher;
use whirl_foundation::gestures::{PointerAdapter, PointerEvent, PointerEventKind};
use whirl_foundation::{CarouselState, RenderTarget};

const FRAME_NANOS: u64 = 16_000_000;

struct LoggingTarget {
    writes: Cell<u32>,
}

impl RenderTarget for LoggingTarget {
    fn set_track_offset(&self, offset: f32) {
        self.writes.set(self.writes.get() + 1);
        log::debug!("track offset -> {offset:.1}");
    }
}

fn run_to_rest(dispatcher: &FrameDispatcher, frame: &mut u64) -> u32 {
    let mut frames = 0;
    while dispatcher.has_registrations() {
        *frame += 1;
        frames += 1;
        dispatcher.run_frame(*frame * FRAME_NANOS);
    }
    frames
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Whirl Strip Demo ===");
    println!("Five cards, 316 units apiece; watch the index follow the track.");
    println!();

    let dispatcher = FrameDispatcher::new();
    let state = CarouselState::new(CarouselConfig::desktop(316.0, 5), dispatcher.clone())
        .expect("demo config is valid");

    let target = Rc::new(LoggingTarget {
        writes: Cell::new(0),
    });
    state.set_render_target(Rc::clone(&target) as Rc<dyn RenderTarget>);
    state.set_on_index_changed(|index| println!("  centered card -> {index}"));
    state.set_on_drag_state_changed(|dragging| {
        println!("  drag {}", if dragging { "started" } else { "released" })
    });

    let mut frame = 0u64;

    println!("Flick left:");
    let mut pointer = PointerAdapter::new(state.clone());
    pointer.on_event_at(PointerEvent::new(PointerEventKind::Down, 500.0), 0.0);
    for (x, t) in [(470.0, 16.0), (410.0, 32.0), (320.0, 48.0), (200.0, 64.0)] {
        pointer.on_event_at(PointerEvent::new(PointerEventKind::Move, x), t);
    }
    pointer.on_event_at(PointerEvent::new(PointerEventKind::Up, 200.0), 80.0);
    let frames = run_to_rest(&dispatcher, &mut frame);
    println!(
        "  settled at {:.1} (card {}) after {frames} frames",
        state.position(),
        state.current_index()
    );

    println!("Two wheel ticks:");
    state.wheel_impulse(24.0);
    state.wheel_impulse(24.0);
    let frames = run_to_rest(&dispatcher, &mut frame);
    println!(
        "  settled at {:.1} (card {}) after {frames} frames",
        state.position(),
        state.current_index()
    );

    println!("Step next, then snap home:");
    state.step_next();
    run_to_rest(&dispatcher, &mut frame);
    println!("  step landed on card {}", state.current_index());
    state.snap_to_index(0);
    println!("  snapped to card {}", state.current_index());

    println!();
    println!("{} direct track writes total", target.writes.get());
}
