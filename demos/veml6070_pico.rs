#![no_std]
#![no_main]

#[cfg(not(target_os = "none"))]
mod other {
    extern crate std;
    use std::println;
    #[no_mangle]
    pub extern "C" fn main() {
        loop {
            println!("unsupported target");
        }
    }
}

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod arm {
    use defmt::*;
    use defmt_rtt as _;
    use fugit::RateExtU32;
    use panic_probe as _;
    use rp2040_hal::{
        clocks::init_clocks_and_plls, entry, i2c::I2C, pac, sio::Sio, watchdog::Watchdog, Timer,
    };

    use embedded_hal::delay::DelayNs;
    use unofficial_veml6070::{IntegrationTime, Veml6070};

    #[link_section = ".boot2"]
    #[used]
    pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

    #[entry]
    fn main() -> ! {
        let mut pac = pac::Peripherals::take().unwrap();
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let pins = rp2040_hal::gpio::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let i2c = I2C::i2c0(
            pac.I2C0,
            pins.gpio8.into_function(), // sda
            pins.gpio9.into_function(), // scl
            400.kHz(),
            &mut pac.RESETS,
            100_000_000.Hz(),
        );

        let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut delay = timer;

        let mut veml6070 = Veml6070::new(i2c, timer);
        veml6070.begin(IntegrationTime::It1x).unwrap();

        loop {
            // raw steps, not a UV index
            let uv = veml6070.read_uv().unwrap();
            println!("{} steps", uv);
            delay.delay_ms(1000);
        }
    }
}
