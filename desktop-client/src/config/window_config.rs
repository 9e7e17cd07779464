use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_SIZE: f32 = 200.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub dark_mode: bool,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.width >= MIN_WINDOW_SIZE && self.height >= MIN_WINDOW_SIZE) {
            return Err(format!(
                "Window must be at least {}x{}",
                MIN_WINDOW_SIZE, MIN_WINDOW_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
            dark_mode: false,
        }
    }
}
