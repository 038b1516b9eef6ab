use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use i2c_memory_emulator::{
    DeviceError, Emulator, EmulatorError, EmulatorSettings, Event, Memory, MemoryDevice,
    NullObserver, Packet, TransportError,
};

fn test_settings(port: u16) -> EmulatorSettings {
    EmulatorSettings {
        host: "127.0.0.1".to_string(),
        port,
        dump_on_start: false,
        ..EmulatorSettings::default()
    }
}

/// Listen like an I2C master bridge would and start an emulator connecting
/// to it
fn start_emulator() -> (TcpStream, thread::JoinHandle<Result<MemoryDevice, EmulatorError>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let emulator = thread::spawn(move || {
        let device = MemoryDevice::with_observer(Box::new(NullObserver));
        Emulator::with_device(test_settings(port), device).run()
    });

    let (master, _) = listener.accept().unwrap();
    (master, emulator)
}

fn transfer(master: &mut TcpStream, packet: Packet) -> Vec<u8> {
    master.write_all(packet.as_bytes()).unwrap();
    master.write_all(b"\r\n").unwrap();

    let mut response = [0; 5];
    master.read_exact(&mut response).unwrap();
    assert_eq!(&response[3..], b"\r\n");
    response[..3].to_vec()
}

#[test]
fn test_write_and_read_back_over_tcp() {
    let (mut master, emulator) = start_emulator();

    // i2cset: address byte followed by data bytes
    transfer(&mut master, Packet::event(Event::StartSend));
    for byte in [0x20, 0x11, 0x22, 0x33] {
        let response = transfer(&mut master, Packet::send(byte));
        assert_eq!(response, Packet::send(byte).as_bytes());
    }
    transfer(&mut master, Packet::event(Event::Finish));

    // i2cget: address byte, then a receive transaction
    transfer(&mut master, Packet::event(Event::StartSend));
    transfer(&mut master, Packet::send(0x20));
    transfer(&mut master, Packet::event(Event::Finish));
    transfer(&mut master, Packet::event(Event::StartRecv));
    let values: Vec<u8> = (0..3)
        .map(|_| transfer(&mut master, Packet::recv())[1])
        .collect();
    transfer(&mut master, Packet::event(Event::Finish));

    assert_eq!(values, vec![0x11, 0x22, 0x33]);

    drop(master);
    let device = emulator.join().unwrap().unwrap();
    assert_eq!(device.memory().read(0x20), 0x11);
    assert_eq!(device.memory().read(0x22), 0x33);
}

#[test]
fn test_unknown_tag_closes_connection() {
    let (mut master, emulator) = start_emulator();

    transfer(&mut master, Packet::send(0x42));
    master.write_all(b"Q\x00\x00\r\n").unwrap();

    let mut rest = Vec::new();
    master.read_to_end(&mut rest).unwrap();
    assert!(rest.is_empty());

    let result = emulator.join().unwrap();
    assert!(matches!(
        result,
        Err(EmulatorError::Session {
            source: TransportError::Device {
                source: DeviceError::UnrecognizedTag { tag: b'Q' },
                ..
            },
            ..
        })
    ));
}

#[test]
fn test_connection_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = Emulator::new(test_settings(port)).run();

    assert!(matches!(result, Err(EmulatorError::ConnectionFailed { .. })));
}
