use core::fmt;
use serde::{Deserialize, Serialize};

/// Scoresheet grouping tag. Purely organizational: it drives subtotal
/// computation and display order, never scoring behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Section {
    Upper = 0,
    Lower = 1,
}

impl Section {
    pub const LOOP: [Section; 2] = [Section::Upper, Section::Lower];

    pub const fn title(self) -> &'static str {
        match self {
            Section::Upper => "Upper Section",
            Section::Lower => "Lower Section",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
