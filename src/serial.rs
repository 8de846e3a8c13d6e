use bitflags::bitflags;
use lazy_static::lazy_static;
use spin::Mutex;
use x86_64::instructions::port::Port;

use crate::console::{Console, LineInput};
use crate::fs::bounded::Line;

bitflags! {
    /// 16550 line status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineStatus: u8 {
        const DATA_READY = 1 << 0;
        const OVERRUN = 1 << 1;
        const TX_HOLDING_EMPTY = 1 << 5;
        const TX_IDLE = 1 << 6;
    }
}

pub struct SerialPort {
    data: Port<u8>,
    int_en: Port<u8>,
    fifo_ctrl: Port<u8>,
    line_ctrl: Port<u8>,
    modem_ctrl: Port<u8>,
    line_sts: Port<u8>,
}

impl SerialPort {
    pub unsafe fn new(base: u16) -> SerialPort {
        SerialPort {
            data: Port::new(base),
            int_en: Port::new(base + 1),
            fifo_ctrl: Port::new(base + 2),
            line_ctrl: Port::new(base + 3),
            modem_ctrl: Port::new(base + 4),
            line_sts: Port::new(base + 5),
        }
    }

    /// 38400 baud, 8N1, FIFOs on, interrupts off: the console is polled.
    pub fn init(&mut self) {
        unsafe {
            self.int_en.write(0x00);
            self.line_ctrl.write(0x80);
            self.data.write(0x03);
            self.int_en.write(0x00);
            self.line_ctrl.write(0x03);
            self.fifo_ctrl.write(0xC7);
            self.modem_ctrl.write(0x0B);
        }
    }

    fn status(&mut self) -> LineStatus {
        LineStatus::from_bits_truncate(unsafe { self.line_sts.read() })
    }

    pub fn send(&mut self, data: u8) {
        while !self.status().contains(LineStatus::TX_HOLDING_EMPTY) {
            core::hint::spin_loop();
        }
        unsafe {
            self.data.write(data);
        }
    }

    /// Block until a byte arrives.
    pub fn receive(&mut self) -> u8 {
        while !self.status().contains(LineStatus::DATA_READY) {
            core::hint::spin_loop();
        }
        unsafe { self.data.read() }
    }
}

impl core::fmt::Write for SerialPort {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.send(b'\r');
            }
            self.send(byte);
        }
        Ok(())
    }
}

lazy_static! {
    pub static ref SERIAL1: Mutex<SerialPort> = {
        let mut serial_port = unsafe { SerialPort::new(0x3F8) };
        serial_port.init();
        Mutex::new(serial_port)
    };
}

#[doc(hidden)]
#[cfg(not(test))]
pub fn _print(args: ::core::fmt::Arguments) {
    use core::fmt::Write;
    let _ = SERIAL1.lock().write_fmt(args);
}

/// Host test builds have no UART to talk to.
#[doc(hidden)]
#[cfg(test)]
pub fn _print(args: ::core::fmt::Arguments) {
    std::eprint!("{}", args);
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!("[INFO] {}\n", format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!("[WARN] {}\n", format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!("[ERROR] {}\n", format_args!($($arg)*)))
    };
}

pub fn init() {
    let _ = SERIAL1.lock();
}

/// The interactive console on COM1: output, plus line input with echo
/// and backspace.
pub struct SerialConsole;

impl Console for SerialConsole {
    fn emit(&mut self, text: &str) {
        use core::fmt::Write;
        let _ = SERIAL1.lock().write_str(text);
    }
}

impl LineInput for SerialConsole {
    fn read_line(&mut self) -> Option<Line> {
        let mut line = Line::new();
        let mut port = SERIAL1.lock();
        loop {
            match port.receive() {
                b'\r' | b'\n' => {
                    port.send(b'\r');
                    port.send(b'\n');
                    return Some(line);
                }
                0x08 | 0x7F => {
                    if line.pop().is_some() {
                        for b in [0x08, b' ', 0x08] {
                            port.send(b);
                        }
                    }
                }
                b @ 0x20..=0x7E => {
                    if line.push(char::from(b)) {
                        port.send(b);
                    }
                }
                _ => {}
            }
        }
    }
}
