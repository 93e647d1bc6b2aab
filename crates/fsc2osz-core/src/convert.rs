//! The end-to-end `.fsc` to `.osz` conversion.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::asset::resolve_assets;
use crate::beatmap::Beatmap;
use crate::chart::{TextEncoding, load_chart};
use crate::config::{ConvertOptions, osu};
use crate::error::Result;
use crate::package::{assemble, file_stem, output_path, write_document};

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub archive_path: PathBuf,
    /// Name of the `.osu` entry inside the archive.
    pub document_name: String,
    /// Archive entry names in write order.
    pub entries: Vec<String>,
    /// Files that were resolved but could not be added.
    pub skipped: Vec<PathBuf>,
    /// Referenced audio name, if no such file was found.
    pub missing_audio: Option<String>,
    /// Referenced background name, if no such file was found.
    pub missing_background: Option<String>,
    /// Encoding the chart was read with.
    pub encoding: TextEncoding,
}

/// Convert one chart into an `.osz` package.
///
/// Runs load, resolve, document generation and packaging in sequence.
/// Nothing is written unless the chart loads and every timing point is valid.
pub fn convert(options: &ConvertOptions) -> Result<ConversionReport> {
    let loaded = load_chart(&options.input)?;
    let chart = &loaded.chart;

    let assets = resolve_assets(chart, &options.input);
    let beatmap = Beatmap::from_chart(chart, &assets)?;

    ensure_output_dir(&options.output_dir)?;

    let stem = file_stem(&beatmap.metadata.title);
    let document = write_document(&beatmap, &options.output_dir, &stem)?;
    let archive_path = output_path(&options.output_dir, &stem, osu::PACKAGE_EXTENSION);

    let media: Vec<&Path> = [assets.audio.as_deref(), assets.background.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let summary = assemble(&document, &media, &archive_path)?;

    info!(
        "Conversion complete. Map saved to {}.",
        summary.archive_path.display()
    );

    Ok(ConversionReport {
        archive_path: summary.archive_path,
        document_name: format!("{}.{}", stem, osu::DOCUMENT_EXTENSION),
        entries: summary.entries,
        skipped: summary.skipped,
        missing_audio: assets.audio.is_none().then(|| assets.audio_name.clone()),
        missing_background: assets
            .background
            .is_none()
            .then(|| assets.background_name.clone()),
        encoding: loaded.encoding,
    })
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        info!("Creating output directory {}", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
