//! I2C memory slave emulator

mod device;
mod diagnostics;
mod emulator;
mod errors;
mod hardware;
mod interfaces;
mod memory;
mod packet;
mod settings;
mod transport;

pub use device::{AddressingMode, MemoryDevice};
pub use diagnostics::{dump_rows, ChannelObserver, LogObserver, NullObserver, Observation};
pub use emulator::Emulator;
pub use errors::{DeviceError, EmulatorError, TransportError};
pub use hardware::{DEFAULT_HOST, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PORT, MEMORY_SIZE};
pub use interfaces::{Memory, Observer};
pub use memory::MemoryStore;
pub use packet::{Event, Packet, Tag};
pub use settings::EmulatorSettings;
pub use transport::{LineFramer, Session};
