//! Device diagnostics
//!
//! The device reports everything it does as an [`Observation`] to an
//! [`Observer`]. Observers are plugged into the device, so diagnostics can be
//! logged, collected through a channel or ignored altogether.
//!

use crossbeam_channel::Sender;
use log::{debug, info, log_enabled, Level};

use crate::hardware::{DUMP_BYTES_PER_ROW, MEMORY_SIZE};
use crate::interfaces::Observer;
use crate::packet::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Bus event received from the master
    Event(Event),

    /// First write of a transaction moved the cursor
    AddressSet { address: u8 },

    /// Data byte stored in memory
    DataWritten { address: u8, data: u8 },

    /// Data byte read by the master. `count` is the byte number inside the
    /// current transaction
    DataRead { count: usize, address: u8, data: u8 },

    /// Record without packet size echoed back to the master
    PassThrough { length: usize },

    /// Transaction finished, with the memory contents at that point
    Finished { memory: [u8; MEMORY_SIZE] },
}

/// Render `memory` as rows of 32 bytes prefixed by the address of its first
/// byte, like:
///
/// ```text
/// 0x00: 00 01 02 ...
/// 0x20: 20 21 22 ...
/// ```
pub fn dump_rows(memory: &[u8]) -> Vec<String> {
    memory
        .chunks(DUMP_BYTES_PER_ROW)
        .enumerate()
        .map(|(row, bytes)| {
            let begin = row * DUMP_BYTES_PER_ROW;
            let bytes = bytes
                .iter()
                .map(|byte| format!("{byte:0>2x}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("0x{begin:0>2x}: {bytes}")
        })
        .collect()
}

/// Log a memory dump through the `log` facade
pub fn log_dump(memory: &[u8]) {
    if !log_enabled!(Level::Info) {
        return;
    }

    info!("Mem:");
    for row in dump_rows(memory) {
        info!("{row}");
    }
}

/// Observer writing observations to the log
#[derive(Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&mut self, observation: Observation) {
        match observation {
            Observation::Event(event) => info!("Event handler: {event}"),
            Observation::AddressSet { address } => {
                debug!("Send handler: address byte: 0x{address:0>2x}")
            }
            Observation::DataWritten { address, data } => {
                debug!("Send handler: data byte: 0x{data:0>2x} to addr=0x{address:0>2x}")
            }
            Observation::DataRead {
                count,
                address,
                data,
            } => debug!(
                "Recv handler: byte number {count} from addr=0x{address:0>2x}, val=0x{data:0>2x}"
            ),
            Observation::PassThrough { length } => {
                debug!("Passing through a {length}-byte record")
            }
            Observation::Finished { memory } => log_dump(&memory),
        }
    }
}

/// Observer forwarding observations through a channel
pub struct ChannelObserver {
    sender: Sender<Observation>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<Observation>) -> Self {
        Self { sender }
    }
}

impl Observer for ChannelObserver {
    fn observe(&mut self, observation: Observation) {
        // A receiver that went away only means nobody is listening anymore
        if self.sender.send(observation).is_err() {
            debug!("Observation channel disconnected, dropping observation");
        }
    }
}

/// Observer discarding everything
#[derive(Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&mut self, _observation: Observation) {}
}
