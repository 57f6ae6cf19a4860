//! Brightness control for Wiz lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 10 to 100 percent.
///
/// # Examples
///
/// ```
/// use wiz_udp_client::Brightness;
///
/// assert!(Brightness::create(9).is_none());
/// assert!(Brightness::create(10).is_some());
/// assert!(Brightness::create(100).is_some());
/// assert!(Brightness::create(101).is_none());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 100;
    pub(crate) const RANGE_MESSAGE: &'static str = "brightness must be between 10 and 100";

    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (10-100).
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}
