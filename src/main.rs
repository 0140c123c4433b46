//! Windowed frontend: a winit event loop presenting through pixels.
//!
//! winit owns the outer loop, so this shell integrates at the session
//! level: window events are collected into a pending batch, each redraw
//! advances the session one frame with that batch and rasterizes the
//! scene into the pixels buffer. Pacing uses `ControlFlow::WaitUntil`
//! with the configured frame budget.

use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use concentration::render::raster;
use concentration::{GameConfig, GameRng, InputEvent, LoopControl, Point, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = GameConfig::default();
    let mut rng = GameRng::from_entropy();
    let mut session = Session::new(config.clone(), &mut rng);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Concentration")
        .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
        .with_resizable(false)
        .build(&event_loop)?;

    let surface_texture =
        SurfaceTexture::new(config.window_width, config.window_height, &window);
    let mut pixels = Pixels::new(config.window_width, config.window_height, surface_texture)?;

    let start = Instant::now();
    let frame_budget = config.frame_budget();
    let mut cursor = Point::new(0, 0);
    let mut pending: Vec<InputEvent> = Vec::new();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    pending.push(InputEvent::Quit);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point::new(position.x as i32, position.y as i32);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    button: MouseButton::Left,
                    ..
                } => {
                    pending.push(InputEvent::PointerReleased(cursor));
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let frame_start = Instant::now();

                let events = std::mem::take(&mut pending);
                if session.frame(start.elapsed(), &events) == LoopControl::Quit {
                    println!("Leaving the game!");
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                raster::draw_scene(pixels.frame_mut(), &session.scene());
                if let Err(err) = pixels.render() {
                    log::error!("surface present failed: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                *control_flow = ControlFlow::WaitUntil(frame_start + frame_budget);
            }
            _ => {}
        }
    })
}
