//! Frontend abstraction: input events in, scenes out.
//!
//! The game core never talks to a window directly. A [`Frontend`] supplies
//! the two capabilities the loop needs - a pollable event stream and a
//! place to present scenes - and [`run`] drives a [`Session`] against it
//! at the configured frame rate.
//!
//! The windowed binary does not go through [`run`]: winit owns its own
//! event loop, so it integrates at the [`Session`] level instead and
//! applies the same frame/present cycle from its redraw handler.

pub mod headless;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::geometry::Point;
use crate::render::Scene;
use crate::session::{LoopControl, Session};

pub use headless::HeadlessFrontend;

/// An input event delivered to the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The user asked to close the game.
    Quit,
    /// A pointer button was released at the given position.
    PointerReleased(Point),
}

/// A presentation and input collaborator.
pub trait Frontend {
    /// Presentation failure. Fatal to the loop; `run` propagates it.
    type Error: std::error::Error + 'static;

    /// Drain all events that arrived since the last poll.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Present one rendered scene.
    fn present(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// Drive a session against a polled frontend until quit.
///
/// Per iteration: poll events, advance the session one frame, present the
/// scene, then sleep out the remainder of the frame budget. The frame
/// clock handed to the session is real elapsed time since `run` started.
pub fn run<F: Frontend>(session: &mut Session, frontend: &mut F) -> Result<(), F::Error> {
    let start = Instant::now();
    let budget = session.config().frame_budget();

    loop {
        let frame_start = Instant::now();

        let events = frontend.poll_events();
        if session.frame(start.elapsed(), &events) == LoopControl::Quit {
            break;
        }
        frontend.present(&session.scene())?;

        if let Some(rest) = budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}
