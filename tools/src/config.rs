use std::env;
use std::path::{Path, PathBuf};

/// Hero videos the site ships, one per device class.
pub const VIDEOS: [&str; 3] = ["hero-mobile", "hero-tablet", "hero-desktop"];

pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// The frontend's video folder, found from this crate's location so the tool
/// works from any working directory.
pub fn default_videos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("frontend")
        .join("static")
        .join("videos")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub videos_dir: PathBuf,
    pub ffmpeg: PathBuf,
}

impl Config {
    /// Defaults, overridden by `SITE_VIDEOS_DIR` and `FFMPEG_PATH` when set.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("SITE_VIDEOS_DIR").ok(), env::var("FFMPEG_PATH").ok())
    }

    fn from_vars(videos_dir: Option<String>, ffmpeg: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            videos_dir: non_empty(videos_dir).map(PathBuf::from).unwrap_or_else(default_videos_dir),
            ffmpeg: PathBuf::from(non_empty(ffmpeg).unwrap_or_else(|| DEFAULT_FFMPEG.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_vars(None, Some("  ".into()));
        assert_eq!(config.videos_dir, default_videos_dir());
        assert_eq!(config.ffmpeg, PathBuf::from(DEFAULT_FFMPEG));
    }

    #[test]
    fn env_values_override() {
        let config = Config::from_vars(Some("/srv/videos".into()), Some("/opt/ffmpeg".into()));
        assert_eq!(config.videos_dir, PathBuf::from("/srv/videos"));
        assert_eq!(config.ffmpeg, PathBuf::from("/opt/ffmpeg"));
    }

    #[test]
    fn default_dir_does_not_depend_on_working_directory() {
        let dir = default_videos_dir();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("frontend/static/videos"));
    }
}
