//! `.osz` package assembly.
//!
//! A package is a flat zip archive: the `.osu` document plus the media it
//! references, each stored under its basename.

use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::asset::file_name_of;
use crate::beatmap::Beatmap;
use crate::config::{defaults, osu};
use crate::error::Result;

/// Outcome of writing a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSummary {
    pub archive_path: PathBuf,
    /// Entry names in the order they were written.
    pub entries: Vec<String>,
    /// Files that could not be added.
    pub skipped: Vec<PathBuf>,
}

/// Zip writer for a single `.osz` package.
pub struct OszPackage<W: Write + Seek = File> {
    writer: ZipWriter<W>,
    options: SimpleFileOptions,
    summary: PackageSummary,
}

impl OszPackage<File> {
    /// Create (or truncate) the archive at `archive_path`.
    pub fn create<P: AsRef<Path>>(archive_path: P) -> Result<Self> {
        let archive_path = archive_path.as_ref();
        let file = File::create(archive_path)?;
        Ok(Self::from_writer(file, archive_path))
    }
}

impl<W: Write + Seek> OszPackage<W> {
    /// Write the archive into `writer`; `archive_path` is only reported back.
    pub fn from_writer<P: AsRef<Path>>(writer: W, archive_path: P) -> Self {
        Self {
            writer: ZipWriter::new(writer),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated),
            summary: PackageSummary {
                archive_path: archive_path.as_ref().to_path_buf(),
                ..Default::default()
            },
        }
    }

    /// Add a file under its basename.
    ///
    /// A file that cannot be read is logged and skipped; only archive write
    /// failures are returned as errors.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        info!("Adding {} to archive...", path.display());

        let Some(name) = file_name_of(path) else {
            warn!("Skipping {}: no file name", path.display());
            self.summary.skipped.push(path.to_path_buf());
            return Ok(false);
        };

        if self.summary.entries.contains(&name) {
            warn!("Skipping {}: {} is already in the archive", path.display(), name);
            self.summary.skipped.push(path.to_path_buf());
            return Ok(false);
        }

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                error!("Error adding {} to archive: {}", path.display(), e);
                self.summary.skipped.push(path.to_path_buf());
                return Ok(false);
            }
        };

        self.writer.start_file(name.as_str(), self.options)?;
        self.writer.write_all(&data)?;
        self.summary.entries.push(name);
        Ok(true)
    }

    /// Write the central directory and close the archive.
    pub fn finish(self) -> Result<PackageSummary> {
        self.writer.finish()?;
        Ok(self.summary)
    }
}

/// File stem for the document and package, derived from the beatmap title.
///
/// Characters that are not allowed in file names are replaced with `_`.
pub fn file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.trim().is_empty() || stem.chars().all(|c| c == '.') {
        defaults::TITLE.to_string()
    } else {
        stem
    }
}

/// Path of `<stem>.<extension>` inside `output_dir`.
pub fn output_path(output_dir: &Path, stem: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", stem, extension))
}

/// Write the intermediate `.osu` document into `output_dir`.
pub fn write_document(beatmap: &Beatmap, output_dir: &Path, stem: &str) -> Result<PathBuf> {
    let path = output_path(output_dir, stem, osu::DOCUMENT_EXTENSION);
    fs::write(&path, beatmap.render())?;
    Ok(path)
}

/// Bundle the document and media into `archive_path`, then delete the document.
///
/// The document is removed only after the archive has been written. On
/// failure both the document and any partial archive are removed.
pub fn assemble(document: &Path, media: &[&Path], archive_path: &Path) -> Result<PackageSummary> {
    let file = match File::create(archive_path) {
        Ok(file) => file,
        Err(e) => {
            discard(document);
            return Err(e.into());
        }
    };
    assemble_into(file, document, media, archive_path)
}

fn assemble_into<W: Write + Seek>(
    writer: W,
    document: &Path,
    media: &[&Path],
    archive_path: &Path,
) -> Result<PackageSummary> {
    let package = OszPackage::from_writer(writer, archive_path);
    let summary = match write_archive(package, document, media) {
        Ok(summary) => summary,
        Err(e) => {
            discard(document);
            discard(archive_path);
            return Err(e);
        }
    };

    if document.is_file() {
        fs::remove_file(document)?;
        info!("Deleted temporary file {}", document.display());
    }

    Ok(summary)
}

fn write_archive<W: Write + Seek>(
    mut package: OszPackage<W>,
    document: &Path,
    media: &[&Path],
) -> Result<PackageSummary> {
    package.add_file(document)?;
    for path in media {
        package.add_file(path)?;
    }
    package.finish()
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to remove {}: {}", path.display(), e);
    }
}
