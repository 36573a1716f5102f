//! Title sets: the built-in sample and TOML title files

use crate::core::banner::{Banner, BannerRenderer, BannerStyle};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SAMPLE_MAJOR: &[&str] = &["MANEUVER FUNCTIONS LIBRARY"];

const SAMPLE_MINOR: &[&str] = &[
    "BURN TIME FUNCTIONS",
    "ORBITAL CALCULATION",
    "MANEUVER NODES",
    "RCS CORRECTIONS",
    "EXECUTE NODE",
    "NAVIGATION",
    "WARP FUNCTIONS",
    "FLIGHT VECTORS",
    "CUSTOM WAIT",
    "INCLINATION ASCENT",
    "LANDING FUNCTIONS",
    "LINEAR DESCENT",
    "HOVER PIDS",
    "RENDEZVOUS AND DOCKING",
    "BALLISTIC TARGETING",
    "WAYPOINT GUIDANCE",
    "PLANE AUTOPILOT",
];

/// Titles to render, grouped by style
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TitleSet {
    pub major: Vec<String>,
    pub minor: Vec<String>,
}

/// The section titles of the maneuver functions library
pub fn sample_titles() -> TitleSet {
    TitleSet {
        major: SAMPLE_MAJOR.iter().map(|t| t.to_string()).collect(),
        minor: SAMPLE_MINOR.iter().map(|t| t.to_string()).collect(),
    }
}

impl TitleSet {
    pub fn new(major: Vec<String>, minor: Vec<String>) -> Self {
        Self { major, minor }
    }

    /// Load a title set from a TOML file with `major` and `minor` arrays
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            path: path.to_string_lossy().to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty()
    }

    /// Major banners first, then minor, each group in file order
    pub fn render(&self, renderer: &BannerRenderer) -> Vec<Banner> {
        let mut banners = renderer.render_banners(BannerStyle::Major, &self.major);
        banners.extend(renderer.render_banners(BannerStyle::Minor, &self.minor));
        banners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sample_titles() {
        let titles = sample_titles();
        assert_eq!(titles.major, vec!["MANEUVER FUNCTIONS LIBRARY"]);
        assert_eq!(titles.minor.len(), 17);
        assert_eq!(titles.minor.first().map(String::as_str), Some("BURN TIME FUNCTIONS"));
        assert_eq!(titles.minor.last().map(String::as_str), Some("PLANE AUTOPILOT"));
    }

    #[test]
    fn test_render_sample_line_count() {
        let banners = sample_titles().render(&BannerRenderer::default());
        assert_eq!(banners.len(), 18);
        let total: usize = banners.iter().map(|b| b.lines.len()).sum();
        // one major block of 6 lines, seventeen minor blocks of 3
        assert_eq!(total, 6 + 17 * 3);
        assert_eq!(banners[0].style, BannerStyle::Major);
        assert!(banners[1..].iter().all(|b| b.style == BannerStyle::Minor));
    }

    #[test]
    fn test_load_title_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            file,
            "major = [\"GUIDANCE\"]\nminor = [\"PITCH PROGRAM\", \"ROLL PROGRAM\"]"
        )
        .expect("Failed to write temp file");

        let titles = TitleSet::load(file.path()).expect("Failed to load titles");
        assert_eq!(titles.major, vec!["GUIDANCE"]);
        assert_eq!(titles.minor, vec!["PITCH PROGRAM", "ROLL PROGRAM"]);
    }

    #[test]
    fn test_load_title_file_missing_group_defaults_empty() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "minor = [\"ONLY MINOR\"]").expect("Failed to write temp file");

        let titles = TitleSet::load(file.path()).expect("Failed to load titles");
        assert!(titles.major.is_empty());
        assert!(!titles.is_empty());
    }

    #[test]
    fn test_load_errors() {
        let missing = TitleSet::load(Path::new("/nonexistent/titles.toml"));
        assert!(matches!(missing, Err(StorageError::FileIo { .. })));

        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "major = GUIDANCE").expect("Failed to write temp file");
        let invalid = TitleSet::load(file.path());
        assert!(matches!(invalid, Err(StorageError::ConfigParseError { .. })));
    }
}
