//! Scrawl Recorder
//!
//! Capture and replay of drawing-session input:
//!
//! - `GestureScript` - JSON-serializable canvas setup + timestamped events
//! - `SessionRecorder` - accumulate a script alongside a live session
//! - `ScriptPlayer` / `replay` - drive a `DrawingSession` deterministically
//!
//! Scripts double as regression fixtures: replaying one always produces
//! the same committed strokes, and therefore the same rasterized image.

pub mod player;
pub mod recorder;
pub mod script;

pub use player::{replay, ScriptPlayer};
pub use recorder::SessionRecorder;
pub use script::{CanvasSpec, GestureScript, ScriptError, ScriptEvent, TimestampedEvent};
