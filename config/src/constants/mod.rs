//! Centralized configuration values shared across the scankit pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;
use std::time::Duration;

// =============================================================================
// BUFFER LAYOUT CONSTANTS
// =============================================================================

/// Number of `f32` components in a position or normal element.
///
/// # Examples
/// ```
/// use config::constants::FLOAT3_COMPONENT_COUNT;
/// assert_eq!(FLOAT3_COMPONENT_COUNT * 4, 12);
/// ```
pub const FLOAT3_COMPONENT_COUNT: usize = 3;

/// Byte offsets of the x, y and z components inside one strided element.
///
/// Native vertex and normal buffers pack the three floats at the start of
/// each stride unit; any padding follows them.
///
/// # Examples
/// ```
/// use config::constants::FLOAT3_COMPONENT_OFFSETS;
/// assert_eq!(FLOAT3_COMPONENT_OFFSETS, [0, 4, 8]);
/// ```
pub const FLOAT3_COMPONENT_OFFSETS: [usize; FLOAT3_COMPONENT_COUNT] = [0, 4, 8];

/// Indices per primitive for triangle geometry.
///
/// # Examples
/// ```
/// use config::constants::TRIANGLE_INDEX_COUNT;
/// let triangles = 2;
/// assert_eq!(triangles * TRIANGLE_INDEX_COUNT, 6);
/// ```
pub const TRIANGLE_INDEX_COUNT: usize = 3;

/// Classification value emitted when no semantic label is available.
///
/// # Examples
/// ```
/// use config::constants::CLASSIFICATION_NONE;
/// assert_eq!(CLASSIFICATION_NONE, 0);
/// ```
pub const CLASSIFICATION_NONE: u8 = 0;

/// Number of `f64` values in an encoded 4×4 transform.
///
/// # Examples
/// ```
/// use config::constants::TRANSFORM_ELEMENT_COUNT;
/// assert_eq!(TRANSFORM_ELEMENT_COUNT, 4 * 4);
/// ```
pub const TRANSFORM_ELEMENT_COUNT: usize = 16;

// =============================================================================
// SESSION CONSTANTS
// =============================================================================

/// Maximum number of faces tracked by the front-facing depth scanner.
///
/// # Examples
/// ```
/// use config::constants::MAX_TRACKED_FACES;
/// assert_eq!(MAX_TRACKED_FACES, 1);
/// ```
pub const MAX_TRACKED_FACES: usize = 1;

// =============================================================================
// STREAMING CONSTANTS
// =============================================================================

/// Lowest accepted streaming frequency in hertz.
///
/// # Examples
/// ```
/// use config::constants::MIN_UPDATE_FREQUENCY_HZ;
/// assert!(MIN_UPDATE_FREQUENCY_HZ >= 1);
/// ```
pub const MIN_UPDATE_FREQUENCY_HZ: u32 = 1;

/// Highest accepted streaming frequency in hertz (video rate).
///
/// # Examples
/// ```
/// use config::constants::MAX_UPDATE_FREQUENCY_HZ;
/// assert_eq!(MAX_UPDATE_FREQUENCY_HZ, 30);
/// ```
pub const MAX_UPDATE_FREQUENCY_HZ: u32 = 30;

/// Streaming frequency used when the caller does not pick one.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_UPDATE_FREQUENCY_HZ, MAX_UPDATE_FREQUENCY_HZ};
/// assert!(DEFAULT_UPDATE_FREQUENCY_HZ <= MAX_UPDATE_FREQUENCY_HZ);
/// ```
pub const DEFAULT_UPDATE_FREQUENCY_HZ: u32 = 5;

/// Streaming settings for the external poll timer.
///
/// # Examples
/// ```
/// use config::constants::StreamConfig;
/// let config = StreamConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.update_frequency_hz, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Poll frequency in hertz, always within `[MIN, MAX]_UPDATE_FREQUENCY_HZ`.
    pub update_frequency_hz: u32,
    /// Whether frames are pushed to the transport on every tick.
    pub enabled: bool,
}

impl StreamConfig {
    /// Builds a configuration enforcing strict validation of the frequency.
    ///
    /// # Examples
    /// ```
    /// use config::constants::StreamConfig;
    /// let cfg = StreamConfig::new(10, true).expect("valid config");
    /// assert_eq!(cfg.update_frequency_hz, 10);
    /// assert!(StreamConfig::new(0, true).is_err());
    /// ```
    pub fn new(update_frequency_hz: u32, enabled: bool) -> Result<Self, ConfigError> {
        if !(MIN_UPDATE_FREQUENCY_HZ..=MAX_UPDATE_FREQUENCY_HZ).contains(&update_frequency_hz) {
            return Err(ConfigError::InvalidUpdateFrequency(i64::from(
                update_frequency_hz,
            )));
        }
        Ok(Self {
            update_frequency_hz,
            enabled,
        })
    }

    /// Builds a configuration, clamping the requested frequency into range.
    ///
    /// Start requests arrive from a host that may send any integer, so this
    /// is the constructor the controller uses.
    ///
    /// # Examples
    /// ```
    /// use config::constants::StreamConfig;
    /// assert_eq!(StreamConfig::clamped(-4, true).update_frequency_hz, 1);
    /// assert_eq!(StreamConfig::clamped(60, true).update_frequency_hz, 30);
    /// ```
    pub fn clamped(update_frequency_hz: i64, enabled: bool) -> Self {
        let hz = update_frequency_hz.clamp(
            i64::from(MIN_UPDATE_FREQUENCY_HZ),
            i64::from(MAX_UPDATE_FREQUENCY_HZ),
        );
        Self {
            update_frequency_hz: u32::try_from(hz).unwrap_or(DEFAULT_UPDATE_FREQUENCY_HZ),
            enabled,
        }
    }

    /// Period between two polls.
    ///
    /// # Examples
    /// ```
    /// use config::constants::StreamConfig;
    /// use std::time::Duration;
    /// let cfg = StreamConfig::clamped(4, true);
    /// assert_eq!(cfg.interval(), Duration::from_millis(250));
    /// ```
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.update_frequency_hz.max(1)))
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: DEFAULT_UPDATE_FREQUENCY_HZ,
            enabled: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a streaming frequency falls outside `[1, 30]` Hz.
    InvalidUpdateFrequency(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUpdateFrequency(value) => write!(
                f,
                "update frequency must be within [{MIN_UPDATE_FREQUENCY_HZ}, {MAX_UPDATE_FREQUENCY_HZ}] Hz: {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
