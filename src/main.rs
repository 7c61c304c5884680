//! Desk Clock Demo Firmware
//!
//! Reads a Chronodot over I2C1 once per second and shows the date, time and
//! temperature on a Matrix Orbital display attached to USART1.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz;
use embassy_stm32::usart::{self, UartTx};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use clock_display::prelude::*;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Clock display firmware v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // PB8 = SCL, PB9 = SDA for I2C1 on STM32G474
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8,
        p.PB9,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    info!("I2C1 initialized at {} Hz", I2C_FREQUENCY_HZ);

    let mut uart_config = usart::Config::default();
    uart_config.baudrate = DISPLAY_BAUD_RATE;
    let Ok(uart) = UartTx::new_blocking(p.USART1, p.PA9, uart_config) else {
        defmt::panic!("USART1 configuration rejected");
    };

    let mut rtc = Chronodot::new(i2c);
    let mut lcd = MatrixOrbital::new(uart, DISPLAY_ROWS, DISPLAY_COLUMNS);

    if let Err(e) = setup_display(&mut lcd) {
        warn!("display setup failed: {}", e);
    }
    if let Err(e) = rtc.set_sqw(SquareWaveFrequency::Hz1) {
        warn!("square wave setup failed: {}", e);
    }

    let mut tick: u32 = 0;
    loop {
        if tick % TEMPERATURE_REFRESH_TICKS == 0 {
            if let Err(e) = rtc.read_temperature() {
                warn!("temperature read failed: {}", e);
            }
        }

        match rtc.read_time_date() {
            Ok(now) => {
                if let Err(e) = render(&mut lcd, now, rtc.temperature()) {
                    warn!("display update failed: {}", e);
                }
            }
            Err(e) => warn!("clock read failed: {}", e),
        }

        tick = tick.wrapping_add(1);
        Timer::after(Duration::from_millis(REFRESH_PERIOD_MS)).await;
    }
}

/// Put the display into a known state
fn setup_display<W: embedded_io::Write>(
    lcd: &mut MatrixOrbital<W>,
) -> Result<(), Error<W::Error>> {
    lcd.clear()?;
    lcd.auto_scroll_off()?;
    lcd.auto_line_wrap_off()?;
    lcd.block_cursor_off()?;
    lcd.underline_cursor_off()?;
    lcd.set_contrast(DISPLAY_CONTRAST)?;
    lcd.backlight_on(0)
}

/// Draw date, time and temperature on the first three rows
fn render<W: embedded_io::Write>(
    lcd: &mut MatrixOrbital<W>,
    now: TimeDateElements,
    temperature: Temperature,
) -> Result<(), Error<W::Error>> {
    lcd.cursor_home()?;
    lcd.print(format_args!("20{:02}-{:02}-{:02}", now.year, now.month, now.day))?;
    lcd.cursor_set(1, 2)?;
    lcd.print(format_args!("{:02}:{:02}:{:02}", now.hours, now.minutes, now.seconds))?;
    lcd.cursor_set(1, 3)?;
    lcd.print(format_args!("{temperature}"))?;
    Ok(())
}
