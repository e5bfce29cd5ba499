use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::section::WiggleError;
/// A color token as the caller wrote it (`"k"`, `"red"`, `"#336699"`).
///
/// The token itself is handed to backends untouched; `rgb()` is only a
/// convenience for backends that need concrete channel values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraceColor {
    token: String,
    rgb: (u8, u8, u8),
}
impl TraceColor {
    pub fn as_str(&self) -> &str {
        &self.token
    }
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
    /// Perceived brightness in 0..=1, used to pick light/dark UI themes.
    pub fn luminance(&self) -> f32 {
        let (r, g, b) = self.rgb;
        (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
    }
}
fn resolve(token: &str) -> Option<(u8, u8, u8)> {
    let rgb = match token {
        "b" | "blue" => (0, 0, 255),
        "g" | "green" => (0, 128, 0),
        "r" | "red" => (255, 0, 0),
        "c" | "cyan" => (0, 191, 191),
        "m" | "magenta" => (191, 0, 191),
        "y" | "yellow" => (191, 191, 0),
        "k" | "black" => (0, 0, 0),
        "w" | "white" => (255, 255, 255),
        hex => return parse_hex(hex),
    };
    Some(rgb)
}
fn parse_hex(token: &str) -> Option<(u8, u8, u8)> {
    let digits = token.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
impl FromStr for TraceColor {
    type Err = WiggleError;
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let rgb = resolve(token).ok_or_else(|| WiggleError::Type {
            argument: "color",
            reason: format!("unknown color token {token:?}"),
        })?;
        Ok(Self {
            token: token.to_owned(),
            rgb,
        })
    }
}
impl TryFrom<String> for TraceColor {
    type Error = WiggleError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<TraceColor> for String {
    fn from(value: TraceColor) -> Self {
        value.token
    }
}
impl fmt::Display for TraceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
impl TraceColor {
    pub fn black() -> Self {
        Self {
            token: "k".into(),
            rgb: (0, 0, 0),
        }
    }
    pub fn white() -> Self {
        Self {
            token: "w".into(),
            rgb: (255, 255, 255),
        }
    }
}
