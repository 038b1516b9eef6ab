use crate::diagnostics::Observation;

pub trait Memory {
    /// Read a byte from the specified `address`
    fn read(&self, address: u8) -> u8;

    /// Write a byte of `data` to the specified `address`
    fn write(&mut self, address: u8, data: u8);

    /// Memory size in bytes
    fn size(&self) -> usize;
}

pub trait Observer: Send {
    /// Receive an `observation` of something the device just did. Observers
    /// must not fail, the device keeps going whatever happens here.
    fn observe(&mut self, observation: Observation);
}
