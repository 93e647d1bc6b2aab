//! Conversion options and fixed value tables.
//!
//! This module contains:
//! - `ConvertOptions` - the input chart path and output directory for one run
//! - `defaults` - literals substituted for fields absent from the chart
//! - `osu` - beatmap constants written regardless of input

use std::path::{Path, PathBuf};

/// Options for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Path to the `.fsc` chart to convert.
    pub input: PathBuf,
    /// Directory that receives the `.osz` package.
    pub output_dir: PathBuf,
}

impl ConvertOptions {
    pub fn new<I: AsRef<Path>, O: AsRef<Path>>(input: I, output_dir: O) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

/// Values used when the chart leaves a field out.
pub mod defaults {
    pub const TITLE: &str = "Untitled Map";
    pub const TITLE_UNICODE: &str = "unknown";
    pub const ARTIST: &str = "Unknown Artist";
    pub const ARTIST_UNICODE: &str = "unknown";
    pub const CREATOR: &str = "Unknown Mapper";
    pub const VERSION: &str = "Unknown Difficulty";
    pub const SOURCE: &str = "unknown";
    pub const TAGS: &str = "";
    pub const PREVIEW_TIME: &str = "-1";

    pub const AUDIO_FILE: &str = "audio.mp3";
    /// Searched for when the chart names no background.
    pub const BACKGROUND_FILE: &str = "unknownBackground.jpg";

    pub const HP_DRAIN_RATE: &str = "5";
    pub const CIRCLE_SIZE: &str = "4";
    pub const OVERALL_DIFFICULTY: &str = "5";
    pub const APPROACH_RATE: &str = "5";

    pub const BPM: f64 = 60.0;
    pub const SIGNATURE: i64 = 4;
}

/// Fixed osu! beatmap values.
pub mod osu {
    pub const FORMAT_HEADER: &str = "osu file format v14";

    pub const AUDIO_LEAD_IN: i32 = 0;
    pub const COUNTDOWN: i32 = 1;
    pub const SAMPLE_SET: &str = "Normal";
    pub const STACK_LENIENCY: &str = "0.7";
    /// osu!mania
    pub const MODE: i32 = 3;
    pub const LETTERBOX_IN_BREAKS: i32 = 0;
    pub const SPECIAL_STYLE: i32 = 0;
    pub const WIDESCREEN_STORYBOARD: i32 = 0;

    pub const DISTANCE_SPACING: i32 = 1;
    pub const BEAT_DIVISOR: i32 = 4;
    pub const GRID_SIZE: i32 = 4;
    pub const TIMELINE_ZOOM: i32 = 1;

    pub const BEATMAP_ID: i32 = 0;
    pub const BEATMAP_SET_ID: i32 = -1;

    pub const SLIDER_MULTIPLIER: &str = "1.4";
    pub const SLIDER_TICK_RATE: i32 = 1;

    /// Playfield x of lane 1 and the distance between lanes.
    pub const LANE_ORIGIN_X: i64 = 64;
    pub const LANE_WIDTH: i64 = 128;
    pub const NOTE_Y: i64 = 192;

    /// Trailing timing point fields: normal sample set, default sample index,
    /// full volume, uninherited, no effects.
    pub const TIMING_POINT_SAMPLE_SET: i32 = 1;
    pub const TIMING_POINT_SAMPLE_INDEX: i32 = 0;
    pub const TIMING_POINT_VOLUME: i32 = 100;
    pub const TIMING_POINT_UNINHERITED: i32 = 1;
    pub const TIMING_POINT_EFFECTS: i32 = 0;

    pub const DOCUMENT_EXTENSION: &str = "osu";
    pub const PACKAGE_EXTENSION: &str = "osz";
}
