//! Ratio control for dual-head fixtures.

use serde::{Deserialize, Serialize};

/// Ratio for dual-head fixtures, controlling the balance between up and down lights.
///
/// Valid values are 1 to 100. This only applies to fixtures with dual-head
/// lighting (e.g., floor lamps with both up-lighting and down-lighting).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub(crate) value: u8,
}

impl Ratio {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    const DEFAULT: u8 = 50;
    pub(crate) const RANGE_MESSAGE: &'static str = "ratio must be between 1 and 100";

    /// Create a new Ratio with the default value (50 = balanced).
    pub fn new() -> Self {
        Ratio {
            value: Self::DEFAULT,
        }
    }

    /// Get the ratio value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new Ratio with the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Ratio;
    ///
    /// assert!(Ratio::create(0).is_none());
    /// assert!(Ratio::create(1).is_some());
    /// assert!(Ratio::create(100).is_some());
    /// assert!(Ratio::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Ratio { value })
        } else {
            None
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::new()
    }
}
