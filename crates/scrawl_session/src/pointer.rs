//! Pointer-gesture stream
//!
//! The input surface delivers one gesture at a time with strict
//! down-before-move-before-up/cancel ordering. The session maps these onto
//! its stroke lifecycle calls.

use scrawl_paint::Point;

/// One event in the pointer-gesture stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down(p) | PointerEvent::Move(p) => Some(*p),
            PointerEvent::Up | PointerEvent::Cancel => None,
        }
    }
}
