//! Scrawl Drawing Session
//!
//! In-memory state for one drawing surface:
//!
//! - Committed strokes in drawing/undo order
//! - At most one in-progress stroke, owned separately
//! - Canvas size and the currently selected style
//! - Undo (last-in-first-out), cancel, clear
//! - Change deltas to registered observers
//!
//! All operations are total; the single gesture stream from the input
//! surface drives them sequentially.

pub mod events;
pub mod pointer;
pub mod session;

pub use events::{ObserverSet, SessionEvent, SessionObserver};
pub use pointer::PointerEvent;
pub use session::DrawingSession;
