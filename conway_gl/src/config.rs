// config.rs - Startup configuration with environment overrides

use std::time::Duration;

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;
pub const DEFAULT_CELL_SIZE: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub steps_per_frame: u32,
    /// Minimum time between two scheduled frames.
    pub frame_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            steps_per_frame: 1,
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `CONWAY_WIDTH`, `CONWAY_HEIGHT`,
    /// `CONWAY_CELL_SIZE` and `CONWAY_STEPS_PER_FRAME`.
    pub fn from_env() -> Self {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Values that do not parse are logged
    /// and skipped; range checks are left to the engine and controller.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| -> Option<u32> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("ignoring {key}={raw:?}: not a non-negative integer");
                    None
                }
            }
        };

        if let Some(width) = number("CONWAY_WIDTH") {
            self.width = width;
        }
        if let Some(height) = number("CONWAY_HEIGHT") {
            self.height = height;
        }
        if let Some(cell_size) = number("CONWAY_CELL_SIZE") {
            self.cell_size = cell_size;
        }
        if let Some(steps) = number("CONWAY_STEPS_PER_FRAME") {
            self.steps_per_frame = steps;
        }
        self
    }

    /// Canvas size in points. Computed in floating point: the values are
    /// unvalidated here and the engine rejects sizes that overflow.
    pub fn canvas_size(&self) -> [f32; 2] {
        let pitch = self.cell_size as f32 + 1.0;
        [self.width as f32 * pitch + 1.0, self.height as f32 * pitch + 1.0]
    }

    /// Initial window size: the canvas plus room for the controls.
    pub fn window_size(&self) -> [f32; 2] {
        let [w, h] = self.canvas_size();
        [(w + 40.0).clamp(480.0, 1600.0), (h + 180.0).clamp(360.0, 1000.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overlay(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> =
            pairs.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect();
        AppConfig::default().overlay(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        assert_eq!(overlay(&[]), AppConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let config = overlay(&[
            ("CONWAY_WIDTH", "128"),
            ("CONWAY_HEIGHT", " 32 "),
            ("CONWAY_CELL_SIZE", "3"),
            ("CONWAY_STEPS_PER_FRAME", "4"),
        ]);
        assert_eq!((config.width, config.height, config.cell_size), (128, 32, 3));
        assert_eq!(config.steps_per_frame, 4);
    }

    #[test]
    fn unparsable_values_are_skipped() {
        let config = overlay(&[("CONWAY_WIDTH", "wide"), ("CONWAY_HEIGHT", "-3")]);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn canvas_matches_grid_extent() {
        assert_eq!(AppConfig::default().canvas_size(), [385.0, 385.0]);
    }

    #[test]
    fn huge_overrides_size_the_window_without_overflow() {
        let config = overlay(&[
            ("CONWAY_WIDTH", "800000000"),
            ("CONWAY_CELL_SIZE", "4294967295"),
        ]);
        assert!(config.canvas_size()[0] > u32::MAX as f32);
        assert_eq!(config.window_size(), [1600.0, 1000.0]);
    }
}
