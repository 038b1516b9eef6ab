//! I2C memory slave constants

// Memory
// ------
//
// 256-byte memory addressed by a single byte, from 0x00 to 0xFF

pub const MEMORY_SIZE: usize = 256;

// Row width used when dumping the memory contents
pub const DUMP_BYTES_PER_ROW: usize = 32;

// Packets
// -------
//
// Every transaction is a 3-byte record: [tag][value][reserved]

pub const PACKET_SIZE: usize = 3;
pub const PACKET_TAG: usize = 0;
pub const PACKET_VALUE: usize = 1;

pub const TAG_EVENT: u8 = b'E';
pub const TAG_RECV: u8 = b'R';
pub const TAG_SEND: u8 = b'S';

pub const EVENT_START_RECV: u8 = 0;
pub const EVENT_START_SEND: u8 = 1;
pub const EVENT_START_SEND_ASYNC: u8 = 2;
pub const EVENT_FINISH: u8 = 3;
pub const EVENT_NACK: u8 = 4;

// Transport
// ---------

pub const LINE_DELIMITER: &[u8] = b"\r\n";
pub const DEFAULT_MAX_LINE_LENGTH: usize = 16384;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 16001;
