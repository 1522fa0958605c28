//! Run configuration.
//!
//! Two options, both paths. Each has a stock default so the binary runs
//! without arguments against the bundled demonstration pair:
//!
//! | Option | CLI flag | Default |
//! |---|---|---|
//! | `img1_path` | `--img1` | `./img/d[0048]TopBF1.png` |
//! | `img2_path` | `--img2` | `./result/result_2024-05-12T21-21-24_new.png` |
//!
//! CLI values override the defaults field by field via [`CompareConfig::merge`].

use std::path::PathBuf;

pub const DEFAULT_IMG1: &str = "./img/d[0048]TopBF1.png";
pub const DEFAULT_IMG2: &str = "./result/result_2024-05-12T21-21-24_new.png";

/// Paths of the two images to compare. `img1` is the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    pub img1_path: PathBuf,
    pub img2_path: PathBuf,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            img1_path: PathBuf::from(DEFAULT_IMG1),
            img2_path: PathBuf::from(DEFAULT_IMG2),
        }
    }
}

impl CompareConfig {
    /// Apply overrides on top of `self`. `None` keeps the current value.
    pub fn merge(self, img1: Option<PathBuf>, img2: Option<PathBuf>) -> Self {
        Self {
            img1_path: img1.unwrap_or(self.img1_path),
            img2_path: img2.unwrap_or(self.img2_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = CompareConfig::default();
        assert_eq!(config.img1_path, PathBuf::from("./img/d[0048]TopBF1.png"));
        assert_eq!(
            config.img2_path,
            PathBuf::from("./result/result_2024-05-12T21-21-24_new.png")
        );
    }

    #[test]
    fn merge_without_overrides_keeps_defaults() {
        let config = CompareConfig::default().merge(None, None);
        assert_eq!(config, CompareConfig::default());
    }

    #[test]
    fn merge_overrides_each_field_independently() {
        let config = CompareConfig::default().merge(Some("a.png".into()), None);
        assert_eq!(config.img1_path, PathBuf::from("a.png"));
        assert_eq!(config.img2_path, PathBuf::from(DEFAULT_IMG2));

        let config = CompareConfig::default().merge(None, Some("b.png".into()));
        assert_eq!(config.img1_path, PathBuf::from(DEFAULT_IMG1));
        assert_eq!(config.img2_path, PathBuf::from("b.png"));
    }
}
