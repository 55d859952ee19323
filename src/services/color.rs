use crate::error::{Error, Result};

/// A packed ARGB color, the representation the platform window APIs take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    /// The signed `int` form used by JNI calls.
    pub const fn to_argb_i32(self) -> i32 {
        self.0 as i32
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Parses `#RRGGBB`, `#AARRGGBB` or one of the platform's color names.
    pub fn parse(value: &str) -> Result<Self> {
        if let Some(hex) = value.strip_prefix('#') {
            let valid_len = hex.len() == 6 || hex.len() == 8;
            if !valid_len || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::InvalidColor(value.to_string()));
            }
            let raw = u32::from_str_radix(hex, 16)
                .map_err(|_| Error::InvalidColor(value.to_string()))?;
            return Ok(if hex.len() == 6 {
                Color(raw | 0xFF00_0000)
            } else {
                Color(raw)
            });
        }

        named_color(&value.to_ascii_lowercase())
            .ok_or_else(|| Error::InvalidColor(value.to_string()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

fn named_color(name: &str) -> Option<Color> {
    let argb = match name {
        "black" => 0xFF00_0000,
        "darkgray" | "darkgrey" => 0xFF44_4444,
        "gray" | "grey" => 0xFF88_8888,
        "lightgray" | "lightgrey" => 0xFFCC_CCCC,
        "white" => 0xFFFF_FFFF,
        "red" => 0xFFFF_0000,
        "green" | "lime" => 0xFF00_FF00,
        "blue" => 0xFF00_00FF,
        "yellow" => 0xFFFF_FF00,
        "cyan" | "aqua" => 0xFF00_FFFF,
        "magenta" | "fuchsia" => 0xFFFF_00FF,
        "maroon" => 0xFF80_0000,
        "navy" => 0xFF00_0080,
        "olive" => 0xFF80_8000,
        "purple" => 0xFF80_0080,
        "silver" => 0xFFC0_C0C0,
        "teal" => 0xFF00_8080,
        _ => return None,
    };
    Some(Color(argb))
}

/// Parses an optional color argument, passing `None` through.
pub(crate) fn parse_optional(value: Option<&str>) -> Result<Option<Color>> {
    value.map(Color::parse).transpose()
}
