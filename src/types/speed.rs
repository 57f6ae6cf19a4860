//! Animation speed for dynamic scenes.

use serde::{Deserialize, Serialize};

/// Animation speed for dynamic scenes, with valid values from 10 to 200 percent.
///
/// Speed only affects scenes with animation (like Party, Ocean, etc.).
/// A value of 100 is the default speed; lower values slow the animation,
/// higher values speed it up.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Speed {
    pub(crate) value: u8,
}

impl Speed {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 200;
    const DEFAULT: u8 = 100;
    pub(crate) const RANGE_MESSAGE: &'static str = "speed must be between 10 and 200";

    /// Create a new Speed with the default value (100%).
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Speed;
    ///
    /// assert_eq!(Speed::new().value(), 100);
    /// ```
    pub fn new() -> Self {
        Speed {
            value: Self::DEFAULT,
        }
    }

    /// Get the speed value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new Speed with the given value.
    ///
    /// Returns `None` if value is outside the valid range (10-200).
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_udp_client::Speed;
    ///
    /// assert!(Speed::create(9).is_none());
    /// assert!(Speed::create(10).is_some());
    /// assert!(Speed::create(200).is_some());
    /// assert!(Speed::create(201).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Speed { value })
        } else {
            None
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new()
    }
}
