use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Square region of the camera frame the cube face is held inside,
/// matching the guide box the front end draws.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            size: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub capture: CaptureConfig,
    pub frame_buffer_size: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            frame_buffer_size: 60,
        }
    }
}

impl Configuration {
    /// Layers an optional `cubebot.toml` and `CUBEBOT_*` environment
    /// variables over the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("cubebot").required(false))
            .add_source(Environment::with_prefix("CUBEBOT").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_capture_box() {
        let configuration = Configuration::default();
        assert_eq!(configuration.capture.x, 100);
        assert_eq!(configuration.capture.y, 100);
        assert_eq!(configuration.capture.size, 300);
        assert_eq!(configuration.frame_buffer_size, 60);
    }
}
