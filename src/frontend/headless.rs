//! Scripted frontend for tests.

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::render::Scene;

use super::{Frontend, InputEvent};

/// A frontend that replays a pre-written event script and captures every
/// presented scene.
///
/// Each [`HeadlessFrontend::push_frame`] call queues the events for one
/// frame. Once the script runs out, every further poll yields
/// [`InputEvent::Quit`] so a driving loop always terminates.
#[derive(Clone, Debug, Default)]
pub struct HeadlessFrontend {
    script: VecDeque<Vec<InputEvent>>,
    /// Every scene presented so far, in order.
    pub scenes: Vec<Scene>,
}

impl HeadlessFrontend {
    /// Create a frontend with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events for the next frame. Use an empty slice for a frame
    /// with no input.
    pub fn push_frame(&mut self, events: &[InputEvent]) {
        self.script.push_back(events.to_vec());
    }

    /// Number of scenes presented so far.
    #[must_use]
    pub fn frames_presented(&self) -> usize {
        self.scenes.len()
    }
}

impl Frontend for HeadlessFrontend {
    type Error = Infallible;

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.script
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }

    fn present(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.scenes.push(scene.clone());
        Ok(())
    }
}
