//! White LED channel control.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Raw intensity of the cool or warm white LED channel, from 0 to 255.
///
/// Some Wiz bulbs have separate cool and warm white LED channels that can be
/// controlled independently of the RGB LEDs. The full `u8` domain is valid;
/// use [`TryFrom<i32>`] when starting from a wider integer.
///
/// # Examples
///
/// ```
/// use wiz_udp_client::White;
///
/// assert_eq!(White::new(128).value(), 128);
/// assert!(White::try_from(255).is_ok());
/// assert!(White::try_from(-1).is_err());
/// assert!(White::try_from(256).is_err());
/// ```
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct White {
    pub(crate) value: u8,
}

impl White {
    pub(crate) const RANGE_MESSAGE: &'static str = "LED colors must be between 0 and 255";

    pub fn new(value: u8) -> Self {
        White { value }
    }

    /// Get the white value.
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl TryFrom<i32> for White {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Error> {
        u8::try_from(value)
            .map(White::new)
            .map_err(|_| Error::validation(Self::RANGE_MESSAGE))
    }
}
