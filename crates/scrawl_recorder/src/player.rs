//! Script replay
//!
//! Applies a recorded event stream to a `DrawingSession`. Replay is
//! deterministic: the same script always yields the same committed
//! strokes, which makes scripts usable as regression fixtures.

use scrawl_paint::Point;
use scrawl_session::{DrawingSession, PointerEvent};

use crate::script::{GestureScript, ScriptEvent, TimestampedEvent};

/// Stepping player over a gesture script.
pub struct ScriptPlayer {
    script: GestureScript,
    cursor: usize,
}

impl ScriptPlayer {
    pub fn new(script: GestureScript) -> Self {
        Self { script, cursor: 0 }
    }

    /// Prepare `session` with the script's canvas setup. Call once before
    /// stepping.
    pub fn prime(&self, session: &mut DrawingSession) {
        session.set_background(self.script.background);
        session.set_canvas_size(self.script.canvas.width, self.script.canvas.height);
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.script.events.len()
    }

    /// Index of the next event to apply.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn script(&self) -> &GestureScript {
        &self.script
    }

    /// Apply the next event to `session`, returning it, or `None` at the
    /// end of the script.
    pub fn step(&mut self, session: &mut DrawingSession) -> Option<TimestampedEvent> {
        let stamped = *self.script.events.get(self.cursor)?;
        self.cursor += 1;
        apply_event(session, stamped.event);
        Some(stamped)
    }

    /// Apply every remaining event, returning how many were applied.
    pub fn run_to_end(&mut self, session: &mut DrawingSession) -> usize {
        let mut applied = 0;
        while self.step(session).is_some() {
            applied += 1;
        }
        applied
    }
}

fn apply_event(session: &mut DrawingSession, event: ScriptEvent) {
    match event {
        ScriptEvent::PointerDown { x, y } => session.apply(PointerEvent::Down(Point::new(x, y))),
        ScriptEvent::PointerMove { x, y } => session.apply(PointerEvent::Move(Point::new(x, y))),
        ScriptEvent::PointerUp => session.apply(PointerEvent::Up),
        ScriptEvent::PointerCancel => session.apply(PointerEvent::Cancel),
        ScriptEvent::SelectColor { color } => session.select_color(color),
        ScriptEvent::SetStrokeWidth { width_dp } => session.set_stroke_width(width_dp),
        ScriptEvent::SetEraser { enabled } => session.set_eraser(enabled),
        ScriptEvent::Undo => session.undo(),
        ScriptEvent::Clear => session.clear(),
        ScriptEvent::Resize { width, height } => session.set_canvas_size(width, height),
    }
}

/// Replay a whole script into a fresh, primed session.
pub fn replay(script: &GestureScript) -> DrawingSession {
    let mut session = DrawingSession::new();
    let mut player = ScriptPlayer::new(script.clone());
    player.prime(&mut session);
    let applied = player.run_to_end(&mut session);
    tracing::debug!(
        applied,
        committed = session.strokes().len(),
        "script replayed"
    );
    session
}
