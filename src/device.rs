//! I2C slave memory device.
//!
//! The device behaves as a simple 256-byte memory addressed by one byte.
//!
//! To store bytes, the master sends a transaction where the first byte is the
//! address and the following ones are data, stored at consecutive addresses.
//! To read bytes, the master first sends a single byte transaction to set the
//! start address and then starts a receive transaction. Every read and write
//! moves the cursor forward, wrapping from 0xFF to 0x00.
//!

use log::debug;

use crate::diagnostics::{LogObserver, Observation};
use crate::errors::DeviceError;
use crate::interfaces::Observer;
use crate::memory::MemoryStore;
use crate::packet::{Event, Packet, Tag};

/// What the next write packet means to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// Next write sets the cursor
    ExpectAddress,

    /// Writes store data and advance the cursor
    ExpectData,
}

pub struct MemoryDevice {
    memory: MemoryStore,

    // true until the address byte of a transaction has been received
    first_send: bool,

    // reads since the last finished transaction
    recv_count: usize,

    observer: Box<dyn Observer>,
}

impl MemoryDevice {
    pub fn new() -> Self {
        Self::with_observer(Box::new(LogObserver))
    }

    pub fn with_observer(observer: Box<dyn Observer>) -> Self {
        Self {
            memory: MemoryStore::new(),
            first_send: true,
            recv_count: 0,
            observer,
        }
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryStore {
        &mut self.memory
    }

    pub fn addressing_mode(&self) -> AddressingMode {
        if self.first_send {
            AddressingMode::ExpectAddress
        } else {
            AddressingMode::ExpectData
        }
    }

    pub fn recv_count(&self) -> usize {
        self.recv_count
    }

    /// Handle a record received from the master and return the record to
    /// answer with.
    ///
    /// Records that aren't exactly one packet long are echoed back without
    /// touching the device.
    pub fn dispatch(&mut self, record: &[u8]) -> Result<Vec<u8>, DeviceError> {
        let Some(packet) = Packet::from_record(record) else {
            self.observer.observe(Observation::PassThrough {
                length: record.len(),
            });
            return Ok(record.to_vec());
        };

        let response = self.handle(packet)?;
        Ok(response.as_bytes().to_vec())
    }

    /// Handle a single packet
    pub fn handle(&mut self, packet: Packet) -> Result<Packet, DeviceError> {
        match packet.tag()? {
            Tag::Event => self.event(packet),
            Tag::Recv => Ok(self.recv(packet)),
            Tag::Send => Ok(self.send(packet)),
        }
    }

    fn event(&mut self, packet: Packet) -> Result<Packet, DeviceError> {
        let event = Event::try_from(packet.value())?;
        self.observer.observe(Observation::Event(event));

        match event {
            Event::Finish => {
                self.recv_count = 0;
                self.first_send = true;
                self.observer.observe(Observation::Finished {
                    memory: self.memory.snapshot(),
                });
            }
            // NACK is only informational, writes are always acknowledged
            Event::StartRecv | Event::StartSend | Event::StartSendAsync | Event::Nack => {}
        }

        Ok(packet)
    }

    fn recv(&mut self, packet: Packet) -> Packet {
        let address = self.memory.cursor();
        let data = self.memory.read_at_cursor();
        self.observer.observe(Observation::DataRead {
            count: self.recv_count,
            address,
            data,
        });
        self.recv_count += 1;

        let response = packet.with_value(data);
        self.memory.advance_cursor();
        response
    }

    fn send(&mut self, packet: Packet) -> Packet {
        let value = packet.value();

        if self.first_send {
            self.memory.set_cursor(value);
            self.first_send = false;
            self.observer
                .observe(Observation::AddressSet { address: value });
        } else {
            let address = self.memory.cursor();
            self.memory.write_at_cursor(value);
            self.memory.advance_cursor();
            self.observer.observe(Observation::DataWritten {
                address,
                data: value,
            });
        }

        debug!("Device cursor at 0x{:0>2x}", self.memory.cursor());
        packet
    }
}

impl Default for MemoryDevice {
    fn default() -> Self {
        Self::new()
    }
}
