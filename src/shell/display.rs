//! The display collaborator.

use crate::core::DisplaySnapshot;

/// Receives a snapshot whenever the calculator's display changes.
///
/// Implemented by the presentation layer: a DOM bridge, a terminal
/// renderer, or a test recorder.
pub trait DisplaySink {
    fn refresh(&mut self, snapshot: &DisplaySnapshot);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        (**self).refresh(snapshot);
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        (**self).refresh(snapshot);
    }
}

/// A sink that discards every refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Detached;

impl DisplaySink for Detached {
    fn refresh(&mut self, _snapshot: &DisplaySnapshot) {}
}

/// A sink that keeps every frame it is given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    frames: Vec<DisplaySnapshot>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[DisplaySnapshot] {
        &self.frames
    }

    /// The most recent frame, i.e. what the screen shows now.
    pub fn latest(&self) -> Option<&DisplaySnapshot> {
        self.frames.last()
    }

    /// Export all frames as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.frames)
    }
}

impl DisplaySink for RecordingDisplay {
    fn refresh(&mut self, snapshot: &DisplaySnapshot) {
        self.frames.push(snapshot.clone());
    }
}
