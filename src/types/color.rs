//! RGB color representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::Error;
use crate::types::White;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

/// Validates each channel against 0-255.
///
/// # Examples
///
/// ```
/// use wiz_udp_client::Color;
///
/// assert!(Color::try_from((0, 0, 0)).is_ok());
/// assert!(Color::try_from((255, 255, 255)).is_ok());
/// assert!(Color::try_from((-1, 0, 0)).is_err());
/// assert!(Color::try_from((0, 256, 0)).is_err());
/// ```
impl TryFrom<(i32, i32, i32)> for Color {
    type Error = Error;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Error> {
        let channel = |v: i32| u8::try_from(v).map_err(|_| Error::validation(White::RANGE_MESSAGE));
        Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse from comma-separated string (e.g., "255,128,0").
    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = s
            .split(',')
            .map(|c| c.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::validation("expected format: r,g,b"))?;
        match parts[..] {
            [r, g, b] => Self::try_from((r, g, b)),
            _ => Err(Error::validation("expected format: r,g,b")),
        }
    }
}
