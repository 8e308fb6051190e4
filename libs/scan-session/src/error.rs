//! # Session Errors
//!
//! Errors surfaced synchronously by scanner start-up. Extraction failures
//! never reach this layer; they stay inside a frame batch.

use thiserror::Error;

use crate::ScanMode;

/// Errors that can occur while starting a scanner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The device cannot run the requested scanning mode.
    #[error("{mode} scanning is not supported on this device")]
    UnsupportedCapability {
        /// Requested mode.
        mode: ScanMode,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_capability_names_the_mode() {
        let error = ScanError::UnsupportedCapability {
            mode: ScanMode::FaceDepth,
        };
        assert_eq!(
            error.to_string(),
            "trueDepth scanning is not supported on this device"
        );
        match error {
            ScanError::UnsupportedCapability { mode } => assert_eq!(mode, ScanMode::FaceDepth),
        }
    }
}
