use std::io::IsTerminal;

use owo_colors::{AnsiColors, OwoColorize};

use crate::report::Freshness;

/// Named terminal colors used by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
}

impl Tone {
    pub fn ansi(self) -> AnsiColors {
        match self {
            Tone::Info => AnsiColors::BrightBlue,
            Tone::Success => AnsiColors::BrightGreen,
            Tone::Failure => AnsiColors::BrightRed,
        }
    }
}

impl From<Freshness> for Tone {
    fn from(freshness: Freshness) -> Self {
        match freshness {
            Freshness::Fresh => Tone::Success,
            Freshness::Stale => Tone::Failure,
        }
    }
}

/// Applies tones to text, or passes text through when colors are off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if self.enabled {
            text.color(tone.ansi()).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
