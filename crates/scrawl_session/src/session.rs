//! The drawing session
//!
//! Holds the committed strokes, the one in-progress stroke, the canvas
//! size, and the currently selected style. A single logical gesture stream
//! drives all mutations sequentially; nothing here needs a lock.

use scrawl_paint::{Color, Point, Stroke, StrokeStyle};

use crate::events::{ObserverSet, SessionEvent};
use crate::pointer::PointerEvent;

/// Mutable drawing state for one UI session.
///
/// The active stroke is a separately owned buffer; committing a gesture
/// snapshots it into the committed list, so observers rendering the
/// committed strokes never alias the buffer still being extended.
pub struct DrawingSession {
    committed: Vec<Stroke>,
    active: Option<Stroke>,
    canvas_size: (u32, u32),
    selected_color: Color,
    stroke_width_dp: f32,
    eraser: bool,
    background: Color,
    observers: ObserverSet,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self {
            committed: Vec::new(),
            active: None,
            canvas_size: (1, 1),
            selected_color: Color::BLACK,
            stroke_width_dp: 10.0,
            eraser: false,
            background: Color::WHITE,
            observers: ObserverSet::new(),
        }
    }
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for change deltas.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(observer);
    }

    // ------------------------------------------------------------------
    // Stroke lifecycle
    // ------------------------------------------------------------------

    /// Begin a new stroke seeded with one point.
    ///
    /// The style is snapshotted now: later palette or width changes do not
    /// restyle a stroke already in flight. Eraser strokes capture the
    /// current background color instead of the selected ink.
    pub fn start_stroke(&mut self, point: Point) {
        if self.active.is_some() {
            // The capture surface guarantees one gesture at a time, so a
            // second down without an up is a host bug.
            tracing::debug!("start_stroke ignored: a stroke is already active");
            return;
        }

        let style = StrokeStyle {
            color: if self.eraser {
                self.background
            } else {
                self.selected_color
            },
            width_dp: self.stroke_width_dp,
            is_eraser: self.eraser,
        };

        self.active = Some(Stroke::starting_at(point, style));
        self.observers.notify(&SessionEvent::StrokeStarted { at: point });
    }

    /// Extend the active stroke. No-op when none is active.
    pub fn append_point(&mut self, point: Point) {
        match self.active.as_mut() {
            Some(stroke) => stroke.push(point),
            None => tracing::debug!("append_point ignored: no active stroke"),
        }
    }

    /// Commit the active stroke.
    ///
    /// Empty strokes are discarded, never committed; the active slot is
    /// cleared either way.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.active.take() else {
            return;
        };
        if stroke.is_empty() {
            tracing::debug!("end_stroke discarded an empty stroke");
            return;
        }

        let point_count = stroke.len();
        self.committed.push(stroke);
        self.observers.notify(&SessionEvent::StrokeCommitted {
            index: self.committed.len() - 1,
            point_count,
        });
    }

    /// Discard the active stroke unconditionally.
    pub fn cancel_stroke(&mut self) {
        if self.active.take().is_some() {
            self.observers.notify(&SessionEvent::StrokeCancelled);
        }
    }

    /// Remove the most recently committed stroke. No-op on empty history.
    pub fn undo(&mut self) {
        if self.committed.pop().is_some() {
            self.observers.notify(&SessionEvent::StrokeUndone {
                remaining: self.committed.len(),
            });
        }
    }

    /// Remove every stroke, committed and active.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.active = None;
        self.observers.notify(&SessionEvent::Cleared);
    }

    /// Map one pointer-stream event onto the stroke lifecycle.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => self.start_stroke(point),
            PointerEvent::Move(point) => self.append_point(point),
            PointerEvent::Up => self.end_stroke(),
            PointerEvent::Cancel => self.cancel_stroke(),
        }
    }

    // ------------------------------------------------------------------
    // Style state
    // ------------------------------------------------------------------

    /// Select an ink color. Leaves eraser mode, matching the palette UX.
    pub fn select_color(&mut self, color: Color) {
        self.selected_color = color;
        self.eraser = false;
    }

    pub fn set_stroke_width(&mut self, width_dp: f32) {
        self.stroke_width_dp = width_dp;
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        self.eraser = enabled;
    }

    pub fn toggle_eraser(&mut self) {
        self.eraser = !self.eraser;
    }

    /// Set the canvas background color. Eraser strokes started after this
    /// call paint with the new color; existing strokes are untouched.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas_size = (width, height);
        self.observers
            .notify(&SessionEvent::Resized { width, height });
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn has_strokes(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width_dp
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Owned copy of the committed strokes for handoff to the rasterizer.
    ///
    /// Export works from this snapshot, so an undo or clear while an export
    /// is in flight cannot mutate data mid-rasterization.
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.committed.clone()
    }
}
