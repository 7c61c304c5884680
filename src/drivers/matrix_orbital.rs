//! Matrix Orbital Character LCD Driver
//!
//! Emits the vendor command set over any byte sink (UART, or I2C through
//! [`I2cSink`](crate::hal::i2c::I2cSink)). Commands are the prefix byte
//! `0xFE` followed by a command code and optional parameters; every other
//! byte is shown as a character.
//!
//! The driver is itself a byte sink and a [`core::fmt::Write`] target, so
//! formatted text can be written straight to the display. The command prefix
//! is filtered out of text so it cannot start a command by accident.
//!
//! Nothing is read back from the display and no cursor position is tracked.

use core::fmt;

use embedded_io::{ErrorType, Write, WriteFmtError};

use crate::error::Error;

/// Display operation result
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Byte that introduces every prefixed command
pub const COMMAND_PREFIX: u8 = 0xFE;

/// Longest encoded command (prefix, code, two parameters)
pub const MAX_COMMAND_LEN: usize = 4;

/// Command codes (sent after [`COMMAND_PREFIX`])
pub mod cmd {
    /// Turn auto scroll on
    pub const AUTO_SCROLL_ON: u8 = 0x51;
    /// Turn auto scroll off
    pub const AUTO_SCROLL_OFF: u8 = 0x52;
    /// Turn auto line wrap on
    pub const AUTO_LINE_WRAP_ON: u8 = 0x43;
    /// Turn auto line wrap off
    pub const AUTO_LINE_WRAP_OFF: u8 = 0x44;
    /// Turn the blinking block cursor on
    pub const BLOCK_CURSOR_ON: u8 = 0x53;
    /// Turn the blinking block cursor off
    pub const BLOCK_CURSOR_OFF: u8 = 0x54;
    /// Turn the underline cursor on
    pub const UNDERLINE_CURSOR_ON: u8 = 0x4A;
    /// Turn the underline cursor off
    pub const UNDERLINE_CURSOR_OFF: u8 = 0x4B;
    /// Clear the screen
    pub const CLEAR: u8 = 0x58;
    /// Move the cursor to the top left
    pub const CURSOR_HOME: u8 = 0x48;
    /// Move the cursor to a column and row
    pub const CURSOR_SET: u8 = 0x47;
    /// Move the cursor one position left
    pub const CURSOR_LEFT: u8 = 0x4C;
    /// Move the cursor one position right
    pub const CURSOR_RIGHT: u8 = 0x4D;
    /// Set the contrast
    pub const SET_CONTRAST: u8 = 0x50;
    /// Turn the backlight on for a number of minutes (0 = indefinitely)
    pub const BACKLIGHT_ON: u8 = 0x42;
    /// Turn the backlight off
    pub const BACKLIGHT_OFF: u8 = 0x46;
}

/// Control characters understood without the prefix
pub mod ctrl {
    /// Backspace
    pub const BACKSPACE: u8 = 0x08;
    /// Line feed
    pub const NEW_LINE: u8 = 0x0A;
}

/// Display command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Auto scroll on/off
    AutoScroll(bool),
    /// Auto line wrap on/off
    AutoLineWrap(bool),
    /// Block cursor on/off
    BlockCursor(bool),
    /// Underline cursor on/off
    UnderlineCursor(bool),
    /// Clear the screen
    Clear,
    /// Line feed
    NewLine,
    /// Cursor to top left
    CursorHome,
    /// Cursor to column `x`, row `y`
    CursorSet {
        /// Column
        x: u8,
        /// Row
        y: u8,
    },
    /// Erase the previous character
    Backspace,
    /// Cursor one position left
    CursorLeft,
    /// Cursor one position right
    CursorRight,
    /// Contrast level
    SetContrast(u8),
    /// Backlight on for `minutes` (0 = indefinitely)
    BacklightOn {
        /// Minutes before the backlight switches off
        minutes: u8,
    },
    /// Backlight off
    BacklightOff,
}

impl Command {
    /// Encode into the bytes sent to the display
    #[must_use]
    pub fn encode(self) -> heapless::Vec<u8, MAX_COMMAND_LEN> {
        let toggle = |on: bool, on_code: u8, off_code: u8| if on { on_code } else { off_code };

        let bytes = match self {
            Self::AutoScroll(on) => heapless::Vec::from_slice(&[
                COMMAND_PREFIX,
                toggle(on, cmd::AUTO_SCROLL_ON, cmd::AUTO_SCROLL_OFF),
            ]),
            Self::AutoLineWrap(on) => heapless::Vec::from_slice(&[
                COMMAND_PREFIX,
                toggle(on, cmd::AUTO_LINE_WRAP_ON, cmd::AUTO_LINE_WRAP_OFF),
            ]),
            Self::BlockCursor(on) => heapless::Vec::from_slice(&[
                COMMAND_PREFIX,
                toggle(on, cmd::BLOCK_CURSOR_ON, cmd::BLOCK_CURSOR_OFF),
            ]),
            Self::UnderlineCursor(on) => heapless::Vec::from_slice(&[
                COMMAND_PREFIX,
                toggle(on, cmd::UNDERLINE_CURSOR_ON, cmd::UNDERLINE_CURSOR_OFF),
            ]),
            Self::Clear => heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::CLEAR]),
            Self::NewLine => heapless::Vec::from_slice(&[ctrl::NEW_LINE]),
            Self::CursorHome => heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::CURSOR_HOME]),
            Self::CursorSet { x, y } => {
                heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::CURSOR_SET, x, y])
            }
            Self::Backspace => heapless::Vec::from_slice(&[ctrl::BACKSPACE]),
            Self::CursorLeft => heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::CURSOR_LEFT]),
            Self::CursorRight => heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::CURSOR_RIGHT]),
            Self::SetContrast(value) => {
                heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::SET_CONTRAST, value])
            }
            Self::BacklightOn { minutes } => {
                heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::BACKLIGHT_ON, minutes])
            }
            Self::BacklightOff => heapless::Vec::from_slice(&[COMMAND_PREFIX, cmd::BACKLIGHT_OFF]),
        };

        // Every arm fits in MAX_COMMAND_LEN
        bytes.unwrap_or_default()
    }
}

/// Matrix Orbital display driver
pub struct MatrixOrbital<W> {
    sink: W,
    rows: u8,
    columns: u8,
}

impl<W: Write> MatrixOrbital<W> {
    /// Create a driver writing to `sink`
    ///
    /// The geometry is kept for the caller; it is not sent to the display.
    #[must_use]
    pub fn new(sink: W, rows: u8, columns: u8) -> Self {
        Self {
            sink,
            rows,
            columns,
        }
    }

    /// Number of text rows
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of text columns
    #[must_use]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Send one command in a single sink write
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn send(&mut self, command: Command) -> Result<(), W::Error> {
        let bytes = command.encode();
        self.sink.write_all(&bytes).map_err(Error::Transport)?;
        trace!("lcd command {} bytes", bytes.len());
        Ok(())
    }

    /// Turn auto scroll on
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn auto_scroll_on(&mut self) -> Result<(), W::Error> {
        self.send(Command::AutoScroll(true))
    }

    /// Turn auto scroll off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn auto_scroll_off(&mut self) -> Result<(), W::Error> {
        self.send(Command::AutoScroll(false))
    }

    /// Turn auto line wrap on
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn auto_line_wrap_on(&mut self) -> Result<(), W::Error> {
        self.send(Command::AutoLineWrap(true))
    }

    /// Turn auto line wrap off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn auto_line_wrap_off(&mut self) -> Result<(), W::Error> {
        self.send(Command::AutoLineWrap(false))
    }

    /// Turn the block cursor on
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn block_cursor_on(&mut self) -> Result<(), W::Error> {
        self.send(Command::BlockCursor(true))
    }

    /// Turn the block cursor off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn block_cursor_off(&mut self) -> Result<(), W::Error> {
        self.send(Command::BlockCursor(false))
    }

    /// Turn the underline cursor on
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn underline_cursor_on(&mut self) -> Result<(), W::Error> {
        self.send(Command::UnderlineCursor(true))
    }

    /// Turn the underline cursor off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn underline_cursor_off(&mut self) -> Result<(), W::Error> {
        self.send(Command::UnderlineCursor(false))
    }

    /// Clear the screen
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn clear(&mut self) -> Result<(), W::Error> {
        self.send(Command::Clear)
    }

    /// Move to the start of the next line
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn new_line(&mut self) -> Result<(), W::Error> {
        self.send(Command::NewLine)
    }

    /// Move the cursor to the top left
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn cursor_home(&mut self) -> Result<(), W::Error> {
        self.send(Command::CursorHome)
    }

    /// Move the cursor to column `x`, row `y` (both 1-based on the device)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn cursor_set(&mut self, x: u8, y: u8) -> Result<(), W::Error> {
        self.send(Command::CursorSet { x, y })
    }

    /// Erase the character left of the cursor
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn backspace(&mut self) -> Result<(), W::Error> {
        self.send(Command::Backspace)
    }

    /// Move the cursor one position left
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn cursor_left(&mut self) -> Result<(), W::Error> {
        self.send(Command::CursorLeft)
    }

    /// Move the cursor one position right
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn cursor_right(&mut self) -> Result<(), W::Error> {
        self.send(Command::CursorRight)
    }

    /// Set the contrast
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), W::Error> {
        self.send(Command::SetContrast(contrast))
    }

    /// Turn the backlight on for `minutes` (0 keeps it on)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn backlight_on(&mut self, minutes: u8) -> Result<(), W::Error> {
        self.send(Command::BacklightOn { minutes })
    }

    /// Turn the backlight off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn backlight_off(&mut self) -> Result<(), W::Error> {
        self.send(Command::BacklightOff)
    }

    /// Write one character byte
    ///
    /// The command prefix is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        if byte == COMMAND_PREFIX {
            warn!("lcd dropped command prefix in text");
            return Ok(());
        }
        self.sink.write_all(&[byte]).map_err(Error::Transport)
    }

    /// Write formatted text, as in `lcd.print(format_args!("{:02}", 7))`
    ///
    /// Unlike `write!` through [`core::fmt::Write`], the sink error is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the sink write fails and
    /// [`Error::Format`] if one of the formatted values fails.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), W::Error> {
        Write::write_fmt(self, args).map_err(|e| match e {
            WriteFmtError::Other(e) => e,
            WriteFmtError::FmtError => Error::Format,
        })
    }

    /// Give the sink back
    pub fn release(self) -> W {
        self.sink
    }
}

impl<W: Write> ErrorType for MatrixOrbital<W> {
    type Error = Error<W::Error>;
}

impl<W: Write> Write for MatrixOrbital<W> {
    fn write(&mut self, buf: &[u8]) -> core::result::Result<usize, Self::Error> {
        let Some(&first) = buf.first() else {
            return Ok(0);
        };
        if first == COMMAND_PREFIX {
            warn!("lcd dropped command prefix in text");
            return Ok(1);
        }

        let end = buf
            .iter()
            .position(|&b| b == COMMAND_PREFIX)
            .unwrap_or(buf.len());
        self.sink.write(&buf[..end]).map_err(Error::Transport)
    }

    fn flush(&mut self) -> core::result::Result<(), Self::Error> {
        self.sink.flush().map_err(Error::Transport)
    }
}

impl<W: Write> fmt::Write for MatrixOrbital<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Write::write_all(self, s.as_bytes()).map_err(|_| fmt::Error)
    }
}
