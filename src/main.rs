//! Canvas Walker entry point
//!
//! Web: binds the canvas, keyboard and start/stop button, then waits for the
//! user to press Start. Native: runs a headless autopilot session against a
//! recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use canvas_walker::Settings;
    use canvas_walker::platform::web::{AnimationFrames, bind_toggle, listen_keyboard};
    use canvas_walker::renderer::CanvasSurface;
    use canvas_walker::sim::{DefaultScene, InputState, Scheduler};

    type App = Scheduler<CanvasSurface, AnimationFrames>;

    pub fn run() -> canvas_walker::Result<()> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Canvas Walker starting...");

        let settings = Settings::load();
        let surface = CanvasSurface::from_selector(
            &settings.canvas_selector,
            settings.surface.width,
            settings.surface.height,
        )?;
        let Some(frames) = AnimationFrames::new() else {
            return Err(canvas_walker::Error::WindowUnavailable);
        };

        let app: Rc<RefCell<App>> = Rc::new(RefCell::new(Scheduler::new(
            surface,
            InputState::new(),
            frames.clone(),
            DefaultScene::new(settings.clone()),
        )));

        {
            let weak = Rc::downgrade(&app);
            frames.bind(move |handle, time| {
                if let Some(app) = weak.upgrade() {
                    app.borrow_mut().on_frame(handle, time);
                }
            });
        }

        {
            let down = app.clone();
            let up = app.clone();
            listen_keyboard(
                move |code| {
                    down.borrow_mut().key_down(code);
                },
                move |code| {
                    up.borrow_mut().key_up(code);
                },
            );
        }

        {
            let start = app.clone();
            let stop = app.clone();
            bind_toggle(
                &settings.toggle_selector,
                "Stop",
                "Start",
                move || start.borrow_mut().start(),
                move || stop.borrow_mut().stop(),
            );
        }

        log::info!("Canvas Walker ready");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = web_app::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_walker::Settings;
    use canvas_walker::consts::HEADLESS_FRAME_MS;
    use canvas_walker::demo::Autopilot;
    use canvas_walker::platform::ManualFrames;
    use canvas_walker::renderer::CommandBuffer;
    use canvas_walker::sim::{DefaultScene, InputState, Scheduler};

    env_logger::init();
    log::info!("Canvas Walker (headless) starting...");

    let settings = Settings::load();
    let surface = CommandBuffer::new(settings.surface.width, settings.surface.height);
    let mut scheduler = Scheduler::new(
        surface,
        InputState::new(),
        ManualFrames::new(),
        DefaultScene::new(settings.clone()),
    );
    let mut autopilot = Autopilot::new(settings.demo_seed);

    scheduler.start();

    let mut timestamp = 0.0;
    for _ in 0..settings.demo_frames {
        timestamp += HEADLESS_FRAME_MS;
        autopilot.drive(scheduler.input_mut());

        let Some(handle) = scheduler.frames_mut().take_due() else {
            break;
        };
        scheduler.on_frame(handle, timestamp);
    }

    scheduler.stop();

    log::info!(
        "Ran {} ticks, last frame had {} draw calls",
        scheduler.tick_count(),
        scheduler.surface().commands().len()
    );
    for text in scheduler.surface().texts() {
        log::info!("  {}", text);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
