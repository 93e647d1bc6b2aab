//! Lookup of the audio and background files a chart refers to.
//!
//! Charts only store bare file names, and map folders are not always flat,
//! so each name is searched for anywhere below the chart's directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::chart::SourceChart;
use crate::config::defaults;

/// Find the first regular file named `file_name` below `root`.
///
/// Unreadable directories are skipped. When several files share the name,
/// which one is returned depends on directory iteration order.
pub fn find_file<P: AsRef<Path>>(root: P, file_name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .find(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
        .map(|entry| entry.into_path())
}

/// Media files found for a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAssets {
    /// Audio file name the chart refers to (or the default).
    pub audio_name: String,
    pub audio: Option<PathBuf>,
    /// Background file name the chart refers to (or the default).
    pub background_name: String,
    pub background: Option<PathBuf>,
}

impl ResolvedAssets {
    /// Name written to `AudioFilename`.
    ///
    /// The basename of the file that was found, otherwise the referenced name.
    pub fn audio_filename(&self) -> String {
        self.audio
            .as_deref()
            .and_then(file_name_of)
            .unwrap_or_else(|| self.audio_name.clone())
    }

    /// Basename of the background file, if one was found.
    pub fn background_filename(&self) -> Option<String> {
        self.background.as_deref().and_then(file_name_of)
    }
}

/// Search for the chart's audio and background below the chart's directory.
pub fn resolve_assets<P: AsRef<Path>>(chart: &SourceChart, chart_path: P) -> ResolvedAssets {
    let root = chart_directory(chart_path.as_ref());

    let audio_name = chart
        .audio_file
        .clone()
        .unwrap_or_else(|| defaults::AUDIO_FILE.to_string());
    let background_name = chart
        .background_file
        .clone()
        .unwrap_or_else(|| defaults::BACKGROUND_FILE.to_string());

    let audio = find_file(&root, &audio_name);
    if audio.is_none() {
        warn!("Audio file {} not found", audio_name);
    }

    let background = find_file(&root, &background_name);
    if background.is_none() {
        warn!("Background file {} not found", background_name);
    }

    ResolvedAssets {
        audio_name,
        audio,
        background_name,
        background,
    }
}

/// Directory holding the chart; the current directory for bare file names.
pub fn chart_directory(chart_path: &Path) -> PathBuf {
    match chart_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub(crate) fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_file_in_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("assets").join("audio");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("song.mp3"), b"ID3").unwrap();

        let found = find_file(temp_dir.path(), "song.mp3").unwrap();
        assert_eq!(found, nested.join("song.mp3"));
    }

    #[test]
    fn test_find_file_ignores_directories_with_same_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("bg.png")).unwrap();

        assert!(find_file(temp_dir.path(), "bg.png").is_none());
    }

    #[test]
    fn test_find_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_file(temp_dir.path(), "song.mp3").is_none());
    }

    #[test]
    fn test_chart_directory() {
        assert_eq!(
            chart_directory(Path::new("maps/song/chart.fsc")),
            PathBuf::from("maps/song")
        );
        assert_eq!(chart_directory(Path::new("chart.fsc")), PathBuf::from("."));
    }

    #[test]
    fn test_resolve_assets_uses_default_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("audio.mp3"), b"audio").unwrap();
        let chart_path = temp_dir.path().join("chart.fsc");

        let assets = resolve_assets(&SourceChart::default(), &chart_path);

        assert_eq!(assets.audio_name, "audio.mp3");
        assert_eq!(assets.audio, Some(temp_dir.path().join("audio.mp3")));
        assert_eq!(assets.background_name, "unknownBackground.jpg");
        assert!(assets.background.is_none());
    }

    #[test]
    fn test_audio_filename_keeps_referenced_name_when_missing() {
        let assets = ResolvedAssets {
            audio_name: "song.mp3".to_string(),
            ..Default::default()
        };
        assert_eq!(assets.audio_filename(), "song.mp3");
        assert!(assets.background_filename().is_none());
    }

    #[test]
    fn test_audio_filename_uses_found_basename() {
        let assets = ResolvedAssets {
            audio_name: "song.mp3".to_string(),
            audio: Some(PathBuf::from("maps/sub/song.mp3")),
            background_name: "bg.jpg".to_string(),
            background: Some(PathBuf::from("maps/bg.jpg")),
        };
        assert_eq!(assets.audio_filename(), "song.mp3");
        assert_eq!(assets.background_filename().as_deref(), Some("bg.jpg"));
    }
}
