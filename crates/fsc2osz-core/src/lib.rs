//! # fsc2osz-core
//!
//! Core library for converting fluXis charts (`.fsc`) into osu!mania
//! beatmap packages (`.osz`).
//!
//! This crate provides:
//! - Chart loading with UTF-8 / UTF-16 / Latin-1 fallback
//! - Lookup of the chart's audio and background files
//! - `.osu` document generation
//! - `.osz` archive assembly

pub mod asset;
pub mod beatmap;
pub mod chart;
pub mod config;
pub mod convert;
pub mod error;
pub mod package;

// Re-export from asset module
pub use asset::{ResolvedAssets, find_file, resolve_assets};

// Re-export from beatmap module
pub use beatmap::{Beatmap, HitObjectKind, OsuHitObject, OsuTimingPoint};

// Re-export from chart module
pub use chart::{
    ChartMetadata, FieldValue, HitObject, LoadedChart, SourceChart, TextEncoding, TimingPoint,
    decode_chart, load_chart, parse_chart,
};

// Re-export from config module
pub use config::ConvertOptions;

// Re-export from convert module
pub use convert::{ConversionReport, convert};

// Re-export from error module
pub use error::{DecodeAttempt, Error, Result};

// Re-export from package module
pub use package::{OszPackage, PackageSummary, assemble};
