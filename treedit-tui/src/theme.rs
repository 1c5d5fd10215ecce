//! Colour palettes for the light and dark display modes.

use palette::{IntoColor, Oklab, Srgb};
use treedit_lib::ThemeMode;

use crate::term::Rgb;

/// Resolved colours for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub folder: Rgb,
    pub file: Rgb,
    /// Background of the row under the cursor.
    pub cursor: Rgb,
    pub input_background: Rgb,
    pub surface: Rgb,
    pub accent: Rgb,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        let background = Rgb::hex(0x1e1e1e);
        let foreground = Rgb::hex(0xd4d4d4);
        Self {
            background,
            foreground,
            muted: Rgb::hex(0x858585),
            folder: Rgb::hex(0x569cd6),
            file: Rgb::hex(0xc678dd),
            cursor: mix(background, Rgb::hex(0xffffff), 0.1),
            input_background: Rgb::hex(0x2d2d2d),
            surface: mix(background, Rgb::hex(0xffffff), 0.05),
            accent: Rgb::hex(0x569cd6),
        }
    }

    pub fn light() -> Self {
        let background = Rgb::hex(0xffffff);
        let foreground = Rgb::hex(0x24292e);
        Self {
            background,
            foreground,
            muted: Rgb::hex(0x6a737d),
            folder: Rgb::hex(0x0366d6),
            file: Rgb::hex(0x6f42c1),
            cursor: mix(background, Rgb::hex(0x000000), 0.05),
            input_background: Rgb::hex(0xffffff),
            surface: mix(background, Rgb::hex(0x000000), 0.03),
            accent: Rgb::hex(0x0366d6),
        }
    }
}

/// Blend `a` towards `b` by `amount` (0.0 - 1.0) in Oklab space.
pub fn mix(a: Rgb, b: Rgb, amount: f32) -> Rgb {
    if amount <= 0.0 {
        return a;
    }
    if amount >= 1.0 {
        return b;
    }
    let a = to_oklab(a);
    let b = to_oklab(b);
    let mixed = Oklab::new(
        a.l + (b.l - a.l) * amount,
        a.a + (b.a - a.a) * amount,
        a.b + (b.b - a.b) * amount,
    );
    from_oklab(mixed)
}

fn to_oklab(rgb: Rgb) -> Oklab {
    Srgb::new(rgb.r, rgb.g, rgb.b)
        .into_format::<f32>()
        .into_color()
}

fn from_oklab(oklab: Oklab) -> Rgb {
    let srgb: Srgb = oklab.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
