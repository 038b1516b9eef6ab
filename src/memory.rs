use crate::hardware::MEMORY_SIZE;
use crate::interfaces::Memory;

/// 256-byte memory with an address cursor.
///
/// Every byte value is a valid address, so the cursor can't point outside the
/// memory and there's no way for an access to fail.
pub struct MemoryStore {
    memory: [u8; MEMORY_SIZE],
    cursor: u8,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            memory: [0; MEMORY_SIZE],
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn read_at_cursor(&self) -> u8 {
        self.read(self.cursor)
    }

    pub fn write_at_cursor(&mut self, data: u8) {
        self.write(self.cursor, data);
    }

    pub fn set_cursor(&mut self, address: u8) {
        self.cursor = address;
    }

    /// Move the cursor to the next address, wrapping from 0xFF to 0x00
    pub fn advance_cursor(&mut self) {
        self.cursor = self.cursor.wrapping_add(1);
    }

    /// Copy of the whole memory contents
    pub fn snapshot(&self) -> [u8; MEMORY_SIZE] {
        self.memory
    }

    /// Load `contents` array starting on `address`. Addresses wrap around
    /// like the cursor does. The cursor is left untouched.
    pub fn load(&mut self, address: u8, contents: &[u8]) {
        for (i, byte) in contents.iter().enumerate() {
            let i = i as u8;
            self.write(address.wrapping_add(i), *byte);
        }
    }
}

impl Memory for MemoryStore {
    fn read(&self, address: u8) -> u8 {
        self.memory[address as usize]
    }

    fn write(&mut self, address: u8, data: u8) {
        self.memory[address as usize] = data;
    }

    fn size(&self) -> usize {
        MEMORY_SIZE
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_starts_zeroed() {
        let memory = MemoryStore::new();

        assert_eq!(memory.cursor(), 0);
        assert_eq!(memory.size(), 256);
        assert!(memory.snapshot().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_cursor_accesses_do_not_move_cursor() {
        let mut memory = MemoryStore::new();

        memory.set_cursor(0x42);
        memory.write_at_cursor(0xAB);
        assert_eq!(memory.cursor(), 0x42);

        assert_eq!(memory.read_at_cursor(), 0xAB);
        assert_eq!(memory.cursor(), 0x42);
        assert_eq!(memory.read(0x42), 0xAB);
    }

    #[test]
    fn test_advance_cursor_wraps_around() {
        let mut memory = MemoryStore::new();

        memory.set_cursor(0xFF);
        memory.advance_cursor();
        assert_eq!(memory.cursor(), 0x00);
    }

    #[test]
    fn test_advance_cursor_full_cycle() {
        let mut memory = MemoryStore::new();

        for start in 0..=u8::MAX {
            memory.set_cursor(start);
            for _ in 0..256 {
                memory.advance_cursor();
            }
            assert_eq!(memory.cursor(), start);
        }
    }

    #[test]
    fn test_load_wraps_around() {
        let mut memory = MemoryStore::new();

        memory.load(0xFE, &[0x11, 0x22, 0x33]);

        assert_eq!(memory.read(0xFE), 0x11);
        assert_eq!(memory.read(0xFF), 0x22);
        assert_eq!(memory.read(0x00), 0x33);
        assert_eq!(memory.cursor(), 0);
    }
}
