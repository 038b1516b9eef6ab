use anyhow::Context;
use clap::Parser;

use i2c_memory_emulator::{
    Emulator, EmulatorSettings, DEFAULT_HOST, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PORT,
};

/// Emulate a 256-byte I2C slave memory for an I2C master bridged over TCP
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Host where the I2C master accepts slave connections
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Close the connection on records longer than this
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Don't dump the memory before connecting
    #[arg(long)]
    no_initial_dump: bool,
}

impl From<Cli> for EmulatorSettings {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            max_line_length: cli.max_line_length,
            dump_on_start: !cli.no_initial_dump,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = EmulatorSettings::from(Cli::parse());
    let address = settings.address();

    Emulator::new(settings)
        .run()
        .with_context(|| format!("I2C memory emulator stopped serving {address}"))?;

    Ok(())
}
