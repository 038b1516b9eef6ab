//! Emulator errors
//!
//! All errors the I2C memory emulator can produce

use thiserror::Error;

/// Device errors
///
/// Raised by the protocol state machine when a packet doesn't belong to the
/// closed set of tags and events the device understands
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Unrecognized packet tag 0x{tag:0>2X}")]
    UnrecognizedTag { tag: u8 },

    #[error("Unrecognized I2C event code {code}")]
    UnrecognizedEvent { code: u8 },
}

/// Transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error on the connection")]
    Io(#[from] std::io::Error),

    #[error("Line of {length} bytes exceeds the maximum length of {limit} bytes")]
    LineTooLong { length: usize, limit: usize },

    #[error("Device rejected a packet: {details}")]
    Device {
        details: String,
        #[source]
        source: DeviceError,
    },
}

/// Emulator error type
///
/// Errors surfaced to whoever runs the emulator
#[derive(Debug, Error)]
pub enum EmulatorError {
    #[error("Connection to {address} failed")]
    ConnectionFailed {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Session with {address} closed with an error")]
    Session {
        address: String,
        #[source]
        source: TransportError,
    },
}
