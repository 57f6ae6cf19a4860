//! Value types for light control parameters.

mod brightness;
mod color;
mod kelvin;
mod power;
mod ratio;
mod scene;
mod speed;
mod white;

pub use brightness::Brightness;
pub use color::Color;
pub use kelvin::Kelvin;
pub use power::PowerMode;
pub use ratio::Ratio;
pub use scene::{DW_SCENES, SceneMode, TW_SCENES};
pub use speed::Speed;
pub use white::White;
