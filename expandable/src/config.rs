//! Container configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::transitions::{Easing, ProgressMode, TransitionConfig};

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Default bound on events queued between drains.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Construction-time configuration of an expandable container.
///
/// Duration and easing are fixed for the life of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Length of one expand or collapse transition.
    #[serde(rename = "duration_ms", with = "millis")]
    pub duration: Duration,

    /// Curve shared by every child in a transition.
    pub easing: Easing,

    /// Whether the container starts expanded.
    pub expanded_initially: bool,

    /// How progress is reported to the listener.
    pub progress_mode: ProgressMode,

    /// If true, transitions jump straight to their end on the first frame.
    pub reduced_motion: bool,

    /// Most events kept between drains; the oldest are dropped past this.
    /// Zero disables event recording.
    pub event_capacity: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            expanded_initially: false,
            progress_mode: ProgressMode::default(),
            reduced_motion: false,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl ExpansionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start expanded.
    pub fn expanded(mut self) -> Self {
        self.expanded_initially = true;
        self
    }

    /// Set the progress reporting mode.
    pub fn progress_mode(mut self, mode: ProgressMode) -> Self {
        self.progress_mode = mode;
        self
    }

    /// Disable animation; transitions complete on their first frame.
    pub fn reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    /// Bound the event queue. Zero turns recording off.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.duration, self.easing)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
