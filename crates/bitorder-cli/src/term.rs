use std::{
    fmt,
    io::{self, IsTerminal as _},
    sync::atomic::{AtomicBool, Ordering},
};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables colored output if stderr is a terminal and `NO_COLOR` is unset.
pub fn init_color() {
    let enabled = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

fn color_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

impl Color {
    fn fg(self) -> u8 {
        match self {
            Self::DarkGray => 90,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
        }
    }
}

/// Displays a value in bold with a foreground color.
pub struct WithFg<T>(Color, T);

impl<T> fmt::Display for WithFg<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.1;
        if !color_enabled() {
            return write!(f, "{value}");
        }
        let fg = self.0.fg();
        write!(f, "\x1B[{fg};1m{value}\x1B[0m")
    }
}

impl<T> WithFg<T> {
    pub fn new(color: Color, value: T) -> Self {
        Self(color, value)
    }
}
