#![cfg_attr(not(test), no_std)]

pub mod serial;
pub mod console;
pub mod fs;
pub mod shell;

#[cfg(not(test))]
use core::panic::PanicInfo;

#[cfg(not(test))]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    serial::init();
    log_info!("zOS Kernel started.");

    fs::init();

    let mut console = serial::SerialConsole;
    let mut input = serial::SerialConsole;
    emitln!(&mut console, "Welcome to zOS. Type 'help' for a list of commands.");
    {
        let mut ns = fs::NAMESPACE.lock();
        shell::Shell::new(&mut ns, &mut console, &mut input).run();
    }

    log_info!("Shell exited, halting.");
    loop {
        x86_64::instructions::hlt();
    }
}

#[cfg(not(test))]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log_error!("{}", info);
    loop {
        x86_64::instructions::hlt();
    }
}
