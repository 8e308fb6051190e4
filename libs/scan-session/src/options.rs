//! Start request options.
//!
//! Hosts send the start request as a loose key/value map. Every key is
//! optional; missing keys take the defaults below and an out-of-range
//! frequency is clamped rather than rejected.
//!
//! | Key | Default |
//! |---|---|
//! | `mode` | `"lidar"` |
//! | `enableClassification` | `true` |
//! | `enableStreaming` | `true` |
//! | `updateFrequencyHz` | `5` |

use std::fmt;

use config::constants::{StreamConfig, DEFAULT_UPDATE_FREQUENCY_HZ};
use serde::Deserialize;

/// Which scanner variant to run.
///
/// Parsed leniently: `"trueDepth"` selects face scanning and any other name
/// falls back to depth-mesh scanning.
///
/// # Examples
/// ```
/// use scan_session::ScanMode;
/// assert_eq!(ScanMode::from("trueDepth"), ScanMode::FaceDepth);
/// assert_eq!(ScanMode::from("lidar"), ScanMode::DepthMesh);
/// assert_eq!(ScanMode::from("sonar"), ScanMode::DepthMesh);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum ScanMode {
    /// Rear depth sensor, reconstructed mesh chunks.
    #[default]
    DepthMesh,
    /// Front-facing depth sensor, one tracked face.
    FaceDepth,
}

impl ScanMode {
    /// Wire name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            ScanMode::DepthMesh => "lidar",
            ScanMode::FaceDepth => "trueDepth",
        }
    }
}

impl From<&str> for ScanMode {
    fn from(name: &str) -> Self {
        match name {
            "trueDepth" => ScanMode::FaceDepth,
            _ => ScanMode::DepthMesh,
        }
    }
}

impl From<String> for ScanMode {
    fn from(name: String) -> Self {
        ScanMode::from(name.as_str())
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments of a start request.
///
/// # Examples
/// ```
/// use scan_session::{ScanMode, ScanOptions};
///
/// let options: ScanOptions =
///     serde_json::from_str(r#"{"mode": "trueDepth", "updateFrequencyHz": 90}"#).unwrap();
/// assert_eq!(options.mode, ScanMode::FaceDepth);
/// assert!(options.enable_classification);
/// assert_eq!(options.stream_config().update_frequency_hz, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanOptions {
    /// Scanner variant.
    pub mode: ScanMode,
    /// Request per-face semantic labels where the device supports them.
    pub enable_classification: bool,
    /// Push frames to the transport on every timer tick.
    pub enable_streaming: bool,
    /// Requested tick frequency, clamped to `[1, 30]` Hz.
    pub update_frequency_hz: i64,
}

impl ScanOptions {
    /// Options for `mode` with every other field at its default.
    pub fn for_mode(mode: ScanMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Streaming settings derived from these options.
    pub fn stream_config(&self) -> StreamConfig {
        StreamConfig::clamped(self.update_frequency_hz, self.enable_streaming)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::DepthMesh,
            enable_classification: true,
            enable_streaming: true,
            update_frequency_hz: i64::from(DEFAULT_UPDATE_FREQUENCY_HZ),
        }
    }
}
