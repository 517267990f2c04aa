//! Benchmark configuration: size sweep, tolerance, and peak bandwidth.

use super::error::{BenchError, BenchResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Problem sizes swept by default. The first entry is repeated on purpose to
/// warm up the reference library; its timing is still reported.
pub const DEFAULT_SIZES: [usize; 6] = [1024, 1024, 2048, 4096, 8192, 16384];

/// Absolute tolerance used when comparing against the reference.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Theoretical peak memory bandwidth in GB/s.
pub const DEFAULT_PEAK_BANDWIDTH_GBPS: f64 = 204.8;

/// Where the benchmark binary looks for a config file.
pub const DEFAULT_CONFIG_PATH: &str = "configs/dgemv.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub tolerance: f64,
    pub peak_bandwidth_gbps: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            tolerance: DEFAULT_TOLERANCE,
            peak_bandwidth_gbps: DEFAULT_PEAK_BANDWIDTH_GBPS,
        }
    }
}

impl BenchConfig {
    /// Largest configured problem size, which decides the workspace size.
    pub fn max_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig {
                field: "sizes".to_string(),
                message: "At least one problem size is required".to_string(),
            });
        }

        if let Some(pos) = self.sizes.iter().position(|&n| n == 0) {
            return Err(BenchError::InvalidConfig {
                field: format!("sizes[{}]", pos),
                message: "Problem sizes must be greater than 0".to_string(),
            });
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(BenchError::InvalidConfig {
                field: "tolerance".to_string(),
                message: format!("Must be a finite, non-negative number, got {}", self.tolerance),
            });
        }

        if !self.peak_bandwidth_gbps.is_finite() || self.peak_bandwidth_gbps <= 0.0 {
            return Err(BenchError::InvalidConfig {
                field: "peak_bandwidth_gbps".to_string(),
                message: format!(
                    "Must be a finite number greater than 0, got {}",
                    self.peak_bandwidth_gbps
                ),
            });
        }

        Ok(())
    }
}

/// Loads JSON configuration files, falling back to defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads and validates `path`. A missing file is not an error: the
    /// compiled-in defaults are used instead. Fields left out of the file
    /// keep their default values.
    pub fn load(path: impl AsRef<Path>) -> BenchResult<BenchConfig> {
        let path = path.as_ref();
        let config = match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, &path.display().to_string())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration",
                    path.display()
                );
                BenchConfig::default()
            }
            Err(e) => {
                return Err(BenchError::ConfigIo {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON document. `origin` only feeds error messages.
    pub fn parse(content: &str, origin: &str) -> BenchResult<BenchConfig> {
        serde_json::from_str(content).map_err(|e| BenchError::ConfigParse {
            path: origin.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![1024, 1024, 2048, 4096, 8192, 16384]);
        assert_eq!(config.tolerance, 1e-5);
        assert_eq!(config.peak_bandwidth_gbps, 204.8);
        assert_eq!(config.max_size(), 16384);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ConfigLoader::parse(r#"{ "sizes": [8, 3, 5] }"#, "inline").unwrap();
        assert_eq!(config.sizes, vec![8, 3, 5]);
        assert_eq!(config.max_size(), 8);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.peak_bandwidth_gbps, DEFAULT_PEAK_BANDWIDTH_GBPS);
    }

    #[test]
    fn test_malformed_json() {
        let err = ConfigLoader::parse("{ sizes: ", "broken.json").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse { ref path, .. } if path == "broken.json"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = ConfigLoader::load("does/not/exist/dgemv.json").unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let empty = BenchConfig {
            sizes: vec![],
            ..BenchConfig::default()
        };
        assert!(matches!(
            empty.validate(),
            Err(BenchError::InvalidConfig { ref field, .. }) if field == "sizes"
        ));

        let zero = BenchConfig {
            sizes: vec![4, 0],
            ..BenchConfig::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(BenchError::InvalidConfig { ref field, .. }) if field == "sizes[1]"
        ));

        let tol = BenchConfig {
            tolerance: -1.0,
            ..BenchConfig::default()
        };
        assert!(tol.validate().is_err());

        let peak = BenchConfig {
            peak_bandwidth_gbps: 0.0,
            ..BenchConfig::default()
        };
        assert!(peak.validate().is_err());
    }
}
