//! Session recording
//!
//! The host forwards the same events it feeds the live session; the
//! recorder accumulates them into a replayable script. Timestamps come
//! from the host's clock so the library stays clock-free.

use scrawl_paint::Color;
use scrawl_session::PointerEvent;

use crate::script::{GestureScript, ScriptEvent};

/// Accumulates a gesture script alongside a live session.
pub struct SessionRecorder {
    script: GestureScript,
}

impl SessionRecorder {
    pub fn new(width: u32, height: u32, density_scale: f32) -> Self {
        Self {
            script: GestureScript::new(width, height, density_scale),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.script.background = background;
        self
    }

    /// Record one event at `at_ms` milliseconds since recording start.
    pub fn record(&mut self, at_ms: u64, event: ScriptEvent) {
        self.script.push(at_ms, event);
    }

    /// Record a pointer-stream event.
    pub fn record_pointer(&mut self, at_ms: u64, event: PointerEvent) {
        let event = match event {
            PointerEvent::Down(p) => ScriptEvent::PointerDown { x: p.x, y: p.y },
            PointerEvent::Move(p) => ScriptEvent::PointerMove { x: p.x, y: p.y },
            PointerEvent::Up => ScriptEvent::PointerUp,
            PointerEvent::Cancel => ScriptEvent::PointerCancel,
        };
        self.record(at_ms, event);
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Finish recording and take the script.
    pub fn finish(self) -> GestureScript {
        tracing::debug!(events = self.script.len(), "recording finished");
        self.script
    }
}
