//! Packets exchanged with the I2C master.
//!
//! A packet is a fixed 3-byte record: a tag saying what the master wants, a
//! value and a reserved byte the device must give back untouched.

use std::fmt;

use crate::errors::DeviceError;
use crate::hardware::*;

/// What a packet asks the device to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Bus event notification, the value holds an [`Event`] code
    Event,

    /// Master reads a byte from the device
    Recv,

    /// Master writes a byte to the device
    Send,
}

impl TryFrom<u8> for Tag {
    type Error = DeviceError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            TAG_EVENT => Ok(Tag::Event),
            TAG_RECV => Ok(Tag::Recv),
            TAG_SEND => Ok(Tag::Send),
            _ => Err(DeviceError::UnrecognizedTag { tag }),
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Event => TAG_EVENT,
            Tag::Recv => TAG_RECV,
            Tag::Send => TAG_SEND,
        }
    }
}

/// I2C bus events signaled by the master
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    StartRecv,
    StartSend,
    StartSendAsync,
    Finish,
    Nack,
}

impl TryFrom<u8> for Event {
    type Error = DeviceError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            EVENT_START_RECV => Ok(Event::StartRecv),
            EVENT_START_SEND => Ok(Event::StartSend),
            EVENT_START_SEND_ASYNC => Ok(Event::StartSendAsync),
            EVENT_FINISH => Ok(Event::Finish),
            EVENT_NACK => Ok(Event::Nack),
            _ => Err(DeviceError::UnrecognizedEvent { code }),
        }
    }
}

impl From<Event> for u8 {
    fn from(event: Event) -> Self {
        match event {
            Event::StartRecv => EVENT_START_RECV,
            Event::StartSend => EVENT_START_SEND,
            Event::StartSendAsync => EVENT_START_SEND_ASYNC,
            Event::Finish => EVENT_FINISH,
            Event::Nack => EVENT_NACK,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::StartRecv => "I2C_START_RECV",
            Event::StartSend => "I2C_START_SEND",
            Event::StartSendAsync => "I2C_START_SEND_ASYNC",
            Event::Finish => "I2C_FINISH",
            Event::Nack => "I2C_NACK",
        };
        write!(f, "{name}")
    }
}

/// Raw 3-byte packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet([u8; PACKET_SIZE]);

impl Packet {
    pub fn new(tag: Tag, value: u8) -> Self {
        Self([tag.into(), value, 0])
    }

    pub fn event(event: Event) -> Self {
        Self::new(Tag::Event, event.into())
    }

    pub fn send(value: u8) -> Self {
        Self::new(Tag::Send, value)
    }

    pub fn recv() -> Self {
        Self::new(Tag::Recv, 0)
    }

    /// Build a packet from a record. Only 3-byte records are packets.
    pub fn from_record(record: &[u8]) -> Option<Self> {
        let bytes: [u8; PACKET_SIZE] = record.try_into().ok()?;
        Some(Self(bytes))
    }

    pub fn tag(&self) -> Result<Tag, DeviceError> {
        Tag::try_from(self.0[PACKET_TAG])
    }

    pub fn value(&self) -> u8 {
        self.0[PACKET_VALUE]
    }

    /// Same packet with its value replaced. Tag and reserved byte are kept.
    pub fn with_value(mut self, value: u8) -> Self {
        self.0[PACKET_VALUE] = value;
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PACKET_SIZE]> for Packet {
    fn from(bytes: [u8; PACKET_SIZE]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_decoding() {
        assert_eq!(Tag::try_from(b'E'), Ok(Tag::Event));
        assert_eq!(Tag::try_from(b'R'), Ok(Tag::Recv));
        assert_eq!(Tag::try_from(b'S'), Ok(Tag::Send));
        assert_eq!(
            Tag::try_from(b'X'),
            Err(DeviceError::UnrecognizedTag { tag: b'X' })
        );
    }

    #[test]
    fn test_event_decoding() {
        assert_eq!(Event::try_from(0), Ok(Event::StartRecv));
        assert_eq!(Event::try_from(3), Ok(Event::Finish));
        assert_eq!(Event::try_from(4), Ok(Event::Nack));
        assert_eq!(
            Event::try_from(5),
            Err(DeviceError::UnrecognizedEvent { code: 5 })
        );
    }

    #[test]
    fn test_from_record_requires_three_bytes() {
        assert!(Packet::from_record(b"S\x10").is_none());
        assert!(Packet::from_record(b"S\x10\x00\x00").is_none());

        let packet = Packet::from_record(b"S\x10\x7F").unwrap();
        assert_eq!(packet.tag(), Ok(Tag::Send));
        assert_eq!(packet.value(), 0x10);
    }

    #[test]
    fn test_with_value_keeps_reserved_byte() {
        let packet = Packet::from([b'R', 0x00, 0xA5]).with_value(0x42);

        assert_eq!(packet.as_bytes(), &[b'R', 0x42, 0xA5]);
    }
}
