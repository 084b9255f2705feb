//! 256-color palette used by the listing
//!
//! Each ramp exists twice, once per terminal background. Ramps start from the least alarming
//! color and converge on the shared warning color 196.

use derive_new::new;

/// Warning color shared by both backgrounds for the largest sizes.
pub const WARNING: u8 = 196;
/// Gray used for owner, group and branch names.
pub const MUTED_GRAY: u8 = 241;

pub const DARK_SIZE: [u8; 11] = [46, 82, 118, 154, 190, 226, 220, 214, 208, 202, WARNING];
pub const LIGHT_SIZE: [u8; 11] = [34, 70, 106, 142, 178, 214, 208, 202, 196, 160, WARNING];

pub const DARK_TIME: [u8; 9] = [196, 255, 252, 250, 244, 244, 242, 240, 238];
pub const LIGHT_TIME: [u8; 9] = [196, 232, 235, 237, 243, 243, 245, 247, 249];
pub const DARK_TIME_OLDEST: u8 = 236;
pub const LIGHT_TIME_OLDEST: u8 = 252;

/// Color index pair and glyph drawn for one VCS status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub dark: u8,
    pub light: u8,
    pub glyph: &'static str,
}

pub const DEFAULT_MARKER: Marker = Marker {
    dark: 86,
    light: 74,
    glyph: "|",
};

pub const VCS_MARKERS: phf::Map<&'static str, Marker> = phf::phf_map! {
    // repository root seen from outside, clean
    "DG" => Marker { dark: 46, light: 34, glyph: "|" },
    " M" => Marker { dark: 1, light: 9, glyph: "+" },
    "M " => Marker { dark: 82, light: 70, glyph: "+" },
    "??" => Marker { dark: 214, light: 202, glyph: "+" },
    "!!" => Marker { dark: 238, light: 250, glyph: "|" },
    "A " => Marker { dark: 82, light: 70, glyph: "+" },
};

/// Terminal background the palette is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Background {
    #[default]
    Dark,
    Light,
}

impl Background {
    /// Guesses the background from `COLORFGBG` (`"fg;bg"`), dark when unknown.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
            .unwrap_or_default()
    }

    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;

        match bg {
            7 | 9..=15 => Some(Background::Light),
            _ => Some(Background::Dark),
        }
    }

    pub fn pick<T: Copy>(&self, dark: T, light: T) -> T {
        match self {
            Background::Dark => dark,
            Background::Light => light,
        }
    }
}

/// Foreground/background annotation of a text span, as 256-color indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Paint {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
}

impl Paint {
    pub fn none() -> Self {
        Paint::default()
    }

    pub fn fg(color: u8) -> Self {
        Paint::new(Some(color), None)
    }

    pub fn fg_on(color: u8, background: u8) -> Self {
        Paint::new(Some(color), Some(background))
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}
