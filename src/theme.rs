use clap::ValueEnum;
use ratatui::style::Color;

/// A named snake color preset: a head/body pair.
///
/// Purely cosmetic; the simulation never sees it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub head: Color,
    pub body: Color,
}

pub const PALETTE_GREEN: Palette = Palette {
    name: "Green",
    head: Color::Rgb(0x00, 0xff, 0x00),
    body: Color::Rgb(0x00, 0xcc, 0x00),
};

pub const PALETTE_BLUE: Palette = Palette {
    name: "Blue",
    head: Color::Rgb(0x00, 0xbf, 0xff),
    body: Color::Rgb(0x00, 0x99, 0xcc),
};

pub const PALETTE_PURPLE: Palette = Palette {
    name: "Purple",
    head: Color::Rgb(0x93, 0x70, 0xdb),
    body: Color::Rgb(0x7b, 0x68, 0xee),
};

pub const PALETTE_ORANGE: Palette = Palette {
    name: "Orange",
    head: Color::Rgb(0xff, 0x8c, 0x00),
    body: Color::Rgb(0xff, 0x7f, 0x00),
};

pub const PALETTE_PINK: Palette = Palette {
    name: "Pink",
    head: Color::Rgb(0xff, 0x69, 0xb4),
    body: Color::Rgb(0xff, 0x14, 0x93),
};

/// All palettes in cycle order.
pub const PALETTES: &[Palette] = &[
    PALETTE_GREEN,
    PALETTE_BLUE,
    PALETTE_PURPLE,
    PALETTE_ORANGE,
    PALETTE_PINK,
];

/// Food color, shared by every palette.
pub const FOOD_COLOR: Color = Color::Rgb(0xff, 0x00, 0x00);

/// Play-area background.
pub const BOARD_BG: Color = Color::Black;

/// Board border color.
pub const BORDER_FG: Color = Color::DarkGray;

/// Palette selection on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum PaletteName {
    #[default]
    Green,
    Blue,
    Purple,
    Orange,
    Pink,
}

impl PaletteName {
    /// Returns the preset this name selects.
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Green => PALETTE_GREEN,
            Self::Blue => PALETTE_BLUE,
            Self::Purple => PALETTE_PURPLE,
            Self::Orange => PALETTE_ORANGE,
            Self::Pink => PALETTE_PINK,
        }
    }
}

/// Returns the palette after `current` in cycle order.
#[must_use]
pub fn next_palette(current: Palette) -> Palette {
    let index = PALETTES
        .iter()
        .position(|p| p.name == current.name)
        .unwrap_or(0);
    PALETTES[(index + 1) % PALETTES.len()]
}
