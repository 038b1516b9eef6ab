//! I2C memory slave emulator.
//!
//! This module ties the device to a real connection. Create an `Emulator`
//! with some settings and `run` it: it connects to the I2C master, serves it
//! until the connection is lost and returns the device so its memory can be
//! inspected afterwards.
//!
use std::net::TcpStream;

use log::{error, info};

use crate::device::MemoryDevice;
use crate::diagnostics::log_dump;
use crate::errors::EmulatorError;
use crate::settings::EmulatorSettings;
use crate::transport::Session;

pub struct Emulator {
    settings: EmulatorSettings,
    device: MemoryDevice,
}

impl Emulator {
    pub fn new(settings: EmulatorSettings) -> Self {
        Self::with_device(settings, MemoryDevice::new())
    }

    pub fn with_device(settings: EmulatorSettings, device: MemoryDevice) -> Self {
        Self { settings, device }
    }

    pub fn settings(&self) -> &EmulatorSettings {
        &self.settings
    }

    /// Blocking run, returns once the master closes the connection
    pub fn run(self) -> Result<MemoryDevice, EmulatorError> {
        let address = self.settings.address();

        if self.settings.dump_on_start {
            log_dump(&self.device.memory().snapshot());
        }

        let stream = TcpStream::connect(&address).map_err(|source| {
            error!("connection failed: {source}");
            EmulatorError::ConnectionFailed {
                address: address.clone(),
                source,
            }
        })?;
        stream
            .set_nodelay(true)
            .map_err(|source| EmulatorError::ConnectionFailed {
                address: address.clone(),
                source,
            })?;
        info!("connected to {address}");

        let mut session = Session::new(stream, self.device, self.settings.max_line_length);
        let result = session.run();

        match result {
            Ok(()) => {
                info!("connection lost: {address} closed the connection");
                Ok(session.into_device())
            }
            Err(source) => {
                error!("connection lost: {source}");
                Err(EmulatorError::Session { address, source })
            }
        }
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new(EmulatorSettings::default())
    }
}
