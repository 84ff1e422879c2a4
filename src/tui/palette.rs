//! Colors and color math shared by the components.
//!
//! Every page color is `Color::Rgb` so that opacity can be expressed as a
//! blend against whatever is already in the buffer.

use ratatui::style::Color;

use crate::media::Rgb;

/// Dark wood behind the book.
pub const BACKDROP: Color = Color::Rgb(0x1b, 0x11, 0x0d);
/// Aged paper of content pages.
pub const PAPER: Color = Color::Rgb(0xf4, 0xec, 0xd8);
/// Cover board.
pub const COVER: Color = Color::Rgb(0x12, 0x12, 0x12);
pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
/// Subtitle ink and arrow badges.
pub const INK: Color = Color::Rgb(0x3e, 0x27, 0x23);
/// Small label above the subtitle.
pub const LABEL: Color = Color::Rgb(0x5d, 0x40, 0x37);
/// Body copy.
pub const BODY: Color = Color::Rgb(0x4e, 0x34, 0x2e);
/// Folio indicator.
pub const ACCENT: Color = Color::Rgb(0x8d, 0x6e, 0x63);
pub const BLACK: Color = Color::Rgb(0, 0, 0);

pub const STEEL_LIGHT: Color = Color::Rgb(0xf3, 0xf4, 0xf6);
pub const STEEL_MID: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STEEL_DARK: Color = Color::Rgb(0x4b, 0x55, 0x63);

pub fn rgb(px: Rgb) -> Color {
    Color::Rgb(px[0], px[1], px[2])
}

fn channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

/// Lays `over` on top of `under` at `alpha`. Non-RGB colors cannot be mixed,
/// so the dominant one wins.
pub fn blend(under: Color, over: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (under, over) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            channel(r1, r2, alpha),
            channel(g1, g2, alpha),
            channel(b1, b2, alpha),
        ),
        _ if alpha >= 0.5 => over,
        _ => under,
    }
}

pub fn darken(color: Color, amount: f64) -> Color {
    if amount <= 0.0 {
        return color;
    }
    blend(color, BLACK, amount)
}

pub fn blend_rgb(under: Rgb, over: Rgb, alpha: f64) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    [
        channel(under[0], over[0], alpha),
        channel(under[1], over[1], alpha),
        channel(under[2], over[2], alpha),
    ]
}

pub fn to_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some([r, g, b]),
        _ => None,
    }
}

/// Vintage photo treatment: partial sepia, then brightness.
pub fn vintage(px: Rgb, sepia: f64, brightness: f64) -> Rgb {
    let [r, g, b] = [px[0] as f64, px[1] as f64, px[2] as f64];
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    let mixc = |orig: f64, sep: f64| {
        ((orig + (sep - orig) * sepia) * brightness)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    [mixc(r, sr), mixc(g, sg), mixc(b, sb)]
}
