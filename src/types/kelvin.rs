//! Color temperature control.

use serde::{Deserialize, Serialize};

/// Color temperature in Kelvin, with valid values from 2000K to 9000K.
///
/// Lower values produce warmer (more yellow/orange) light, while higher
/// values produce cooler (more blue) light. Typical values:
/// - 2700K: Warm white (incandescent-like)
/// - 4000K: Neutral white
/// - 6500K: Daylight
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Kelvin {
    pub(crate) kelvin: u16,
}

impl Kelvin {
    pub const MIN: u16 = 2000;
    pub const MAX: u16 = 9000;
    pub(crate) const RANGE_MESSAGE: &'static str =
        "temperature value must be between 2000 and 9000 (kelvin)";

    /// Create a new Kelvin with the default value (2000K).
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Kelvin;
    ///
    /// assert_eq!(Kelvin::new().kelvin(), 2000);
    /// ```
    pub fn new() -> Self {
        Kelvin { kelvin: Self::MIN }
    }

    /// Get the kelvin value.
    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Create a new Kelvin with the given value.
    ///
    /// Returns `None` if value is outside the valid range (2000-9000).
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Kelvin;
    ///
    /// assert!(Kelvin::create(1999).is_none());
    /// assert!(Kelvin::create(2000).is_some());
    /// assert!(Kelvin::create(9000).is_some());
    /// assert!(Kelvin::create(9001).is_none());
    /// ```
    pub fn create(kelvin: u16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&kelvin) {
            Some(Kelvin { kelvin })
        } else {
            None
        }
    }
}

impl Default for Kelvin {
    fn default() -> Self {
        Self::new()
    }
}
