//! Device class detection and scene compatibility.

use serde::{Deserialize, Serialize};

use crate::types::SceneMode;

/// Classification of Wiz hardware by LED layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulbClass {
    RGB, // Full color plus cool and warm white
    TW,  // Tunable White
    DW,  // Dimmable White
}

/// Capability flags derived from a device's `moduleName`.
///
/// Each flag is an independent substring test, so a module name may set
/// several flags or none. A device with no flag set supports no scene.
///
/// # Examples
///
/// ```
/// use wiz_udp_client::{Capabilities, SceneMode};
///
/// let caps = Capabilities::from_module_name("ESP01_DW1_01");
/// assert!(caps.dw && !caps.rgb && !caps.tw);
/// assert!(caps.supports_scene(SceneMode::WakeUp.id()));
/// assert!(!caps.supports_scene(SceneMode::TrueColors.id()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub module_name: String,
    pub rgb: bool,
    pub tw: bool,
    pub dw: bool,
}

impl Capabilities {
    /// Parse capabilities from a module name (e.g., "ESP01_SHRGB1C_31").
    pub fn from_module_name(module_name: &str) -> Self {
        Capabilities {
            module_name: module_name.to_string(),
            rgb: module_name.contains("RGB"),
            tw: module_name.contains("TW"),
            dw: module_name.contains("DW"),
        }
    }

    /// All classes the module name matched, most capable first.
    pub fn classes(&self) -> Vec<BulbClass> {
        [
            (self.rgb, BulbClass::RGB),
            (self.tw, BulbClass::TW),
            (self.dw, BulbClass::DW),
        ]
        .into_iter()
        .filter_map(|(set, class)| set.then_some(class))
        .collect()
    }

    /// Whether the scene ID is legal for at least one matched class.
    pub fn supports_scene(&self, scene_id: u16) -> bool {
        let Some(scene) = SceneMode::create(scene_id) else {
            return false;
        };
        self.rgb
            || (self.tw && scene.is_tunable_white())
            || (self.dw && scene.is_dimmable_white())
    }

    /// Every scene the device accepts, in catalog order.
    pub fn available_scenes(&self) -> Vec<SceneMode> {
        use strum::IntoEnumIterator;
        SceneMode::iter()
            .filter(|s| self.supports_scene(s.id()))
            .collect()
    }
}
