use crate::hardware::{DEFAULT_HOST, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PORT};

/// Emulator configuration options
#[derive(Debug, Clone)]
pub struct EmulatorSettings {
    /// Host where the I2C master listens for slave devices
    pub host: String,

    pub port: u16,

    /// Longest record accepted from the master before closing the connection
    pub max_line_length: usize,

    /// Dump the memory contents before connecting
    pub dump_on_start: bool,
}

impl EmulatorSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            dump_on_start: true,
        }
    }
}
