//! Fullscreen requests for the hosting terminal window.
//!
//! Uses the xterm window-manipulation sequence `CSI 10 ; n t`. Terminals
//! that don't understand it ignore it, so a successful write does not mean
//! the window actually changed. Failures are the caller's to log.

use std::fmt;
use std::io::{self, stdout};

use crossterm::{Command, execute};

/// Ask the terminal to enter fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterFullscreen;

/// Ask the terminal to leave fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitFullscreen;

impl Command for EnterFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;1t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "fullscreen is not available through the Windows console API",
        ))
    }
}

impl Command for ExitFullscreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[10;0t")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "fullscreen is not available through the Windows console API",
        ))
    }
}

pub fn set_fullscreen(on: bool) -> io::Result<()> {
    if on {
        execute!(stdout(), EnterFullscreen)
    } else {
        execute!(stdout(), ExitFullscreen)
    }
}
