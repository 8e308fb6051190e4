//! # Scan Controller
//!
//! Command surface of one scanning view: start, stop, snapshot, dispose, and
//! the periodic tick. The controller owns no timer; the host schedules
//! [`ScanController::tick`] every [`ScanController::poll_interval`].

use std::time::Duration;

use config::constants::StreamConfig;
use scan_geometry::FramePayload;

use crate::{ScanError, ScanMode, ScanOptions, Scanner};

/// Builds scanners for the controller and answers capability queries.
pub trait ScannerFactory {
    /// Whether the device supports `mode`, without starting anything.
    fn is_supported(&self, mode: ScanMode) -> bool;

    /// Creates an idle scanner for `options.mode`.
    ///
    /// # Errors
    /// [`ScanError::UnsupportedCapability`] if the scanner cannot be built
    /// on this device.
    fn create(&mut self, options: &ScanOptions) -> Result<Box<dyn Scanner>, ScanError>;
}

/// Receives streamed frame payloads (the transport boundary).
pub trait FrameSink {
    /// Delivers one poll's payload.
    fn send(&mut self, payload: FramePayload);
}

impl<F> FrameSink for F
where
    F: FnMut(FramePayload),
{
    fn send(&mut self, payload: FramePayload) {
        self(payload)
    }
}

/// Drives one scanner on behalf of a host.
pub struct ScanController<F: ScannerFactory> {
    factory: F,
    scanner: Option<Box<dyn Scanner>>,
    stream: Option<StreamConfig>,
    sink: Option<Box<dyn FrameSink>>,
}

impl<F: ScannerFactory> ScanController<F> {
    /// Creates an idle controller.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            scanner: None,
            stream: None,
            sink: None,
        }
    }

    /// Capability query for `mode`.
    pub fn is_supported(&self, mode: ScanMode) -> bool {
        self.factory.is_supported(mode)
    }

    /// Stops whatever is running, then starts a fresh scanner for `options`.
    ///
    /// # Errors
    /// Start-time errors from the factory or the scanner. On error no
    /// scanner is left running.
    pub fn start_scanning(&mut self, options: &ScanOptions) -> Result<(), ScanError> {
        self.stream = None;
        if let Some(mut previous) = self.scanner.take() {
            previous.stop();
        }

        let mut scanner = self.factory.create(options)?;
        scanner.start()?;
        self.scanner = Some(scanner);

        let stream = options.stream_config();
        if stream.enabled {
            self.stream = Some(stream);
        }
        log::info!(
            "scanning started: mode={} streaming={} hz={}",
            options.mode,
            stream.enabled,
            stream.update_frequency_hz
        );
        Ok(())
    }

    /// Stops streaming and the scanner. The scanner is kept for restarts.
    pub fn stop_scanning(&mut self) {
        self.stream = None;
        if let Some(scanner) = self.scanner.as_mut() {
            scanner.stop();
        }
    }

    /// One-off snapshot of the current geometry.
    ///
    /// Empty when no scanner exists or it is stopped.
    pub fn snapshot(&self) -> FramePayload {
        self.scanner
            .as_ref()
            .map(|scanner| scanner.current_frames().into_payload())
            .unwrap_or_default()
    }

    /// Stops everything and releases the scanner and sink.
    pub fn dispose(&mut self) {
        self.stop_scanning();
        self.scanner = None;
        self.sink = None;
    }

    /// Attaches the stream consumer.
    pub fn attach_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.sink = Some(sink);
    }

    /// Detaches the stream consumer.
    pub fn detach_sink(&mut self) {
        self.sink = None;
    }

    /// Period at which the host should call [`tick`](Self::tick), or `None`
    /// when streaming is off.
    pub fn poll_interval(&self) -> Option<Duration> {
        self.stream.as_ref().map(StreamConfig::interval)
    }

    /// Whether a scanner exists and is running.
    pub fn is_scanning(&self) -> bool {
        self.scanner.as_ref().is_some_and(|scanner| scanner.is_running())
    }

    /// Timer callback: pushes the current frames to the sink.
    ///
    /// Returns true if a payload was delivered.
    pub fn tick(&mut self) -> bool {
        if self.stream.is_none() {
            return false;
        }
        let (Some(sink), Some(scanner)) = (self.sink.as_mut(), self.scanner.as_ref()) else {
            return false;
        };
        sink.send(scanner.current_frames().into_payload());
        true
    }
}

impl<F: ScannerFactory> Drop for ScanController<F> {
    fn drop(&mut self) {
        if let Some(scanner) = self.scanner.as_mut() {
            scanner.stop();
        }
    }
}
