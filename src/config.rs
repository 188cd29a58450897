//! Extraction parameters.
//!
//! All values are optional in serialized form; missing fields take the
//! defaults below, which are tuned for dark one-pixel curves on a light
//! background.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted background margin.
pub const MAX_PAD: usize = 1024;

/// Parameters for a single extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Pixels strictly darker than this become foreground.
    pub threshold: u8,
    /// Background margin added around the mask before thinning.
    pub pad: usize,
    /// Run the angle/spacing simplifier on the traced path.
    pub simplify: bool,
    /// Maximum deviation from a straight line (degrees) for a vertex to be dropped.
    pub angle_threshold_degrees: f64,
    /// Vertices closer than this to the last kept vertex are dropped.
    pub min_spacing: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            threshold: 50,
            pad: 2,
            simplify: true,
            angle_threshold_degrees: 35.0,
            min_spacing: 2.0,
        }
    }
}

impl PathConfig {
    /// Parse a JSON document; absent fields fall back to defaults.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: PathConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pad > MAX_PAD {
            return Err(Error::InvalidConfig(format!(
                "pad must be at most {MAX_PAD}, got {}",
                self.pad
            )));
        }
        let angle = self.angle_threshold_degrees;
        if !angle.is_finite() || !(0.0..=180.0).contains(&angle) {
            return Err(Error::InvalidConfig(format!(
                "angle_threshold_degrees must be within [0, 180], got {angle}"
            )));
        }
        if !self.min_spacing.is_finite() || self.min_spacing < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_spacing must be a non-negative finite number, got {}",
                self.min_spacing
            )));
        }
        Ok(())
    }
}

/// Load and validate a JSON configuration file.
pub fn load_config(path: &Path) -> Result<PathConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PathConfig::from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PathConfig::default();
        assert_eq!(config.threshold, 50);
        assert_eq!(config.pad, 2);
        assert!(config.simplify);
        assert_eq!(config.angle_threshold_degrees, 35.0);
        assert_eq!(config.min_spacing, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = PathConfig::from_json_str(r#"{"threshold": 90, "simplify": false}"#)
            .expect("valid config");
        assert_eq!(config.threshold, 90);
        assert!(!config.simplify);
        assert_eq!(config.pad, 2);
        assert_eq!(config.min_spacing, 2.0);
    }

    #[test]
    fn test_rejects_out_of_range_angle() {
        let err = PathConfig::from_json_str(r#"{"angle_threshold_degrees": 200.0}"#)
            .expect_err("angle above 180 must be rejected");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let config = PathConfig {
            min_spacing: -1.0,
            ..PathConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_oversized_pad() {
        let config = PathConfig {
            pad: usize::MAX,
            ..PathConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let at_limit = PathConfig {
            pad: MAX_PAD,
            ..PathConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = PathConfig::from_json_str("{threshold: }").expect_err("not JSON");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/pathpoints.json")).expect_err("missing");
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_serialize_roundtrip_keeps_fields() {
        let config = PathConfig {
            threshold: 128,
            pad: 4,
            ..PathConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serializable");
        assert_eq!(PathConfig::from_json_str(&json).expect("parses"), config);
    }
}
