//! Byte stream transport.
//!
//! The master talks to the device through a byte stream where records are
//! delimited by `\r\n`. Every record received is answered with exactly one
//! record.
//!

use std::io::{ErrorKind, Read, Write};

use log::{debug, error};

use crate::device::MemoryDevice;
use crate::errors::TransportError;
use crate::hardware::{DEFAULT_MAX_LINE_LENGTH, LINE_DELIMITER};

const READ_CHUNK_SIZE: usize = 1024;

/// Split a byte stream into delimited records.
///
/// The delimiter isn't escaped, so packets carrying `\r\n` as data are split
/// in shorter records.
pub struct LineFramer {
    buffer: Vec<u8>,
    max_line_length: usize,
}

impl LineFramer {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_line_length,
        }
    }

    /// Append received bytes
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Take the next complete record (without delimiter) if there's one
    pub fn next_record(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        let position = self
            .buffer
            .windows(LINE_DELIMITER.len())
            .position(|window| window == LINE_DELIMITER);

        let Some(position) = position else {
            if self.buffer.len() > self.max_line_length {
                return Err(TransportError::LineTooLong {
                    length: self.buffer.len(),
                    limit: self.max_line_length,
                });
            }
            return Ok(None);
        };

        if position > self.max_line_length {
            return Err(TransportError::LineTooLong {
                length: position,
                limit: self.max_line_length,
            });
        }

        let mut record: Vec<u8> = self
            .buffer
            .drain(..position + LINE_DELIMITER.len())
            .collect();
        record.truncate(position);
        Ok(Some(record))
    }

    /// Bytes received but not yet part of a complete record
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

/// A connection with a master. Each session owns its own device, so sessions
/// never share memory nor cursor.
pub struct Session<S: Read + Write> {
    stream: S,
    device: MemoryDevice,
    framer: LineFramer,
}

impl<S: Read + Write> Session<S> {
    pub fn new(stream: S, device: MemoryDevice, max_line_length: usize) -> Self {
        Self {
            stream,
            device,
            framer: LineFramer::new(max_line_length),
        }
    }

    pub fn device(&self) -> &MemoryDevice {
        &self.device
    }

    /// Give the device back once the session is over
    pub fn into_device(self) -> MemoryDevice {
        self.device
    }

    /// Serve records until the master closes the stream.
    ///
    /// A record the device can't understand ends the session with an error,
    /// the connection should be closed then.
    pub fn run(&mut self) -> Result<(), TransportError> {
        let mut chunk = [0; READ_CHUNK_SIZE];

        loop {
            while let Some(record) = self.framer.next_record()? {
                self.answer(&record)?;
            }

            let received = match self.stream.read(&mut chunk) {
                Ok(received) => received,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };

            if received == 0 {
                if self.framer.pending() > 0 {
                    debug!(
                        "Stream closed with {} bytes of an incomplete record",
                        self.framer.pending()
                    );
                }
                return Ok(());
            }

            self.framer.push(&chunk[..received]);
        }
    }

    fn answer(&mut self, record: &[u8]) -> Result<(), TransportError> {
        let response = self.device.dispatch(record).map_err(|source| {
            error!("Rejecting record {record:0>2X?}: {source}");
            TransportError::Device {
                details: format!("record {record:0>2X?}"),
                source,
            }
        })?;

        self.stream.write_all(&response)?;
        self.stream.write_all(LINE_DELIMITER)?;
        self.stream.flush()?;
        Ok(())
    }
}
