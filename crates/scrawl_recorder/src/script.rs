//! Gesture scripts
//!
//! A script is the serialized form of one drawing session's input: canvas
//! setup plus a timestamped event stream. Scripts are stored as JSON.
//! Timestamps are bookkeeping for tooling; replay applies events in
//! recorded order regardless of spacing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use scrawl_paint::Color;

/// One recorded input event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerCancel,
    SelectColor { color: Color },
    SetStrokeWidth { width_dp: f32 },
    SetEraser { enabled: bool },
    Undo,
    Clear,
    Resize { width: u32, height: u32 },
}

/// An event with its capture time in milliseconds since recording start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimestampedEvent {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

/// Canvas dimensions at recording time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

/// A complete recorded session: setup plus the event stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    pub canvas: CanvasSpec,
    pub density_scale: f32,
    pub background: Color,
    pub events: Vec<TimestampedEvent>,
}

/// Script load/save failures.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script")]
    Io(#[from] std::io::Error),
    #[error("failed to parse script")]
    Parse(#[from] serde_json::Error),
}

impl GestureScript {
    pub fn new(width: u32, height: u32, density_scale: f32) -> Self {
        Self {
            canvas: CanvasSpec { width, height },
            density_scale,
            background: Color::WHITE,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, at_ms: u64, event: ScriptEvent) {
        self.events.push(TimestampedEvent { at_ms, event });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_script() -> GestureScript {
        let mut script = GestureScript::new(100, 100, 2.0);
        script.push(0, ScriptEvent::SetStrokeWidth { width_dp: 4.0 });
        script.push(10, ScriptEvent::PointerDown { x: 10.0, y: 10.0 });
        script.push(26, ScriptEvent::PointerMove { x: 20.0, y: 10.0 });
        script.push(42, ScriptEvent::PointerUp);
        script
    }

    #[test]
    fn test_json_round_trip() {
        let script = sample_script();
        let json = serde_json::to_string(&script).unwrap();
        let back: GestureScript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
    }

    #[test]
    fn test_event_tags_are_stable() {
        let json = serde_json::to_string(&TimestampedEvent {
            at_ms: 5,
            event: ScriptEvent::PointerDown { x: 1.0, y: 2.0 },
        })
        .unwrap();
        assert!(json.contains("\"type\":\"pointer_down\""), "got {json}");
        assert!(json.contains("\"at_ms\":5"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("scrawl_script_{}.json", std::process::id()));
        let script = sample_script();
        script.save(&path).unwrap();
        let back = GestureScript::load(&path).unwrap();
        assert_eq!(back, script);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let path = std::env::temp_dir().join(format!("scrawl_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            GestureScript::load(&path),
            Err(ScriptError::Parse(_))
        ));
        let _ = std::fs::remove_file(&path);
    }
}
