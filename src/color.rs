use serde::{Serialize, Serializer};
use std::fmt;

pub const TEXT_COLOR: &str = "#363636";
pub const BACKGROUND_ALPHA: f64 = 0.2;

const DEFAULT_HUE: u32 = 210;
const SATURATION: f64 = 0.65;
const LIGHTNESS: f64 = 0.45;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn with_alpha(&self, alpha: f64) -> HexColor {
        let byte = (alpha.clamp(0.0, 1.0) * 255.0).floor() as u8;
        HexColor(format!("{}{byte:02x}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventColors {
    pub text: HexColor,
    pub background: HexColor,
    pub border: HexColor,
}

impl EventColors {
    pub fn for_title(title: &str) -> Self {
        let base = generate_color(title);
        Self {
            text: HexColor(TEXT_COLOR.to_string()),
            background: base.with_alpha(BACKGROUND_ALPHA),
            border: base,
        }
    }
}

pub fn generate_color(label: &str) -> HexColor {
    let (r, g, b) = hsl_to_rgb(label_hue(label), SATURATION, LIGHTNESS);
    HexColor::from_rgb(r, g, b)
}

pub fn label_hue(label: &str) -> u32 {
    if label.is_empty() {
        return DEFAULT_HUE;
    }

    let mut hash: u32 = 0x811c_9dc5;
    for byte in label.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash % 360
}

fn hsl_to_rgb(hue: u32, s: f64, l: f64) -> (u8, u8, u8) {
    let h = f64::from(hue % 360);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hue % 360 {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
