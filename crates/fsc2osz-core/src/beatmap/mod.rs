//! osu!mania beatmap (`.osu`) generation.
//!
//! `Beatmap::from_chart` maps a fluXis chart onto the osu! v14 sections and
//! `Beatmap::render` produces the document text.

mod objects;

pub use objects::*;

use std::fmt;

use crate::asset::ResolvedAssets;
use crate::chart::{FieldValue, SourceChart};
use crate::config::{defaults, osu};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatmapMetadata {
    pub title: String,
    pub title_unicode: String,
    pub artist: String,
    pub artist_unicode: String,
    pub creator: String,
    pub version: String,
    pub source: String,
    pub tags: String,
}

/// Difficulty values, kept as text so numbers are written as the chart spelled them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatmapDifficulty {
    pub hp_drain_rate: String,
    pub circle_size: String,
    pub overall_difficulty: String,
    pub approach_rate: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Beatmap {
    pub audio_filename: String,
    pub preview_time: String,
    pub metadata: BeatmapMetadata,
    pub difficulty: BeatmapDifficulty,
    /// Background image basename for the Events section.
    pub background: Option<String>,
    pub timing_points: Vec<OsuTimingPoint>,
    pub hit_objects: Vec<OsuHitObject>,
}

impl Beatmap {
    /// Build a beatmap from a chart and the media found for it.
    ///
    /// Fails on the first timing point with a non-positive bpm.
    pub fn from_chart(chart: &SourceChart, assets: &ResolvedAssets) -> Result<Self> {
        let meta = &chart.metadata;

        let timing_points = chart
            .timing_points
            .iter()
            .enumerate()
            .map(|(index, point)| OsuTimingPoint::from_chart(index, point))
            .collect::<Result<Vec<_>>>()?;

        let hit_objects = chart
            .hit_objects
            .iter()
            .map(OsuHitObject::from_chart)
            .collect();

        Ok(Self {
            audio_filename: assets.audio_filename(),
            preview_time: text_or(&meta.preview_time, defaults::PREVIEW_TIME),
            metadata: BeatmapMetadata {
                title: text_or(&meta.title, defaults::TITLE),
                title_unicode: text_or(&meta.title_unicode, defaults::TITLE_UNICODE),
                artist: text_or(&meta.artist, defaults::ARTIST),
                artist_unicode: text_or(&meta.artist_unicode, defaults::ARTIST_UNICODE),
                creator: text_or(&meta.mapper, defaults::CREATOR),
                version: text_or(&meta.difficulty, defaults::VERSION),
                source: text_or(&meta.source, defaults::SOURCE),
                tags: text_or(&meta.tags, defaults::TAGS),
            },
            difficulty: BeatmapDifficulty {
                hp_drain_rate: number_or(&chart.accuracy_difficulty, defaults::HP_DRAIN_RATE),
                circle_size: number_or(&chart.circle_size, defaults::CIRCLE_SIZE),
                overall_difficulty: number_or(
                    &chart.overall_difficulty,
                    defaults::OVERALL_DIFFICULTY,
                ),
                approach_rate: number_or(&chart.approach_rate, defaults::APPROACH_RATE),
            },
            background: assets.background_filename(),
            timing_points,
            hit_objects,
        })
    }

    /// Render the complete `.osu` document.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_sections<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", osu::FORMAT_HEADER)?;
        writeln!(out)?;

        writeln!(out, "[General]")?;
        writeln!(out, "AudioFilename: {}", self.audio_filename)?;
        writeln!(out, "AudioLeadIn: {}", osu::AUDIO_LEAD_IN)?;
        writeln!(out, "PreviewTime: {}", self.preview_time)?;
        writeln!(out, "Countdown: {}", osu::COUNTDOWN)?;
        writeln!(out, "SampleSet: {}", osu::SAMPLE_SET)?;
        writeln!(out, "StackLeniency: {}", osu::STACK_LENIENCY)?;
        writeln!(out, "Mode: {}", osu::MODE)?;
        writeln!(out, "LetterboxInBreaks: {}", osu::LETTERBOX_IN_BREAKS)?;
        writeln!(out, "SpecialStyle: {}", osu::SPECIAL_STYLE)?;
        writeln!(out, "WidescreenStoryboard: {}", osu::WIDESCREEN_STORYBOARD)?;
        writeln!(out)?;

        writeln!(out, "[Editor]")?;
        writeln!(out, "DistanceSpacing: {}", osu::DISTANCE_SPACING)?;
        writeln!(out, "BeatDivisor: {}", osu::BEAT_DIVISOR)?;
        writeln!(out, "GridSize: {}", osu::GRID_SIZE)?;
        writeln!(out, "TimelineZoom: {}", osu::TIMELINE_ZOOM)?;
        writeln!(out)?;

        let meta = &self.metadata;
        writeln!(out, "[Metadata]")?;
        writeln!(out, "Title:{}", meta.title)?;
        writeln!(out, "TitleUnicode:{}", meta.title_unicode)?;
        writeln!(out, "Artist:{}", meta.artist)?;
        writeln!(out, "ArtistUnicode:{}", meta.artist_unicode)?;
        writeln!(out, "Creator:{}", meta.creator)?;
        writeln!(out, "Version:{}", meta.version)?;
        writeln!(out, "Source:{}", meta.source)?;
        writeln!(out, "Tags:{}", meta.tags)?;
        writeln!(out, "BeatmapID:{}", osu::BEATMAP_ID)?;
        writeln!(out, "BeatmapSetID:{}", osu::BEATMAP_SET_ID)?;
        writeln!(out)?;

        let diff = &self.difficulty;
        writeln!(out, "[Difficulty]")?;
        writeln!(out, "HPDrainRate:{}", diff.hp_drain_rate)?;
        writeln!(out, "CircleSize:{}", diff.circle_size)?;
        writeln!(out, "OverallDifficulty:{}", diff.overall_difficulty)?;
        writeln!(out, "ApproachRate:{}", diff.approach_rate)?;
        writeln!(out, "SliderMultiplier:{}", osu::SLIDER_MULTIPLIER)?;
        writeln!(out, "SliderTickRate:{}", osu::SLIDER_TICK_RATE)?;
        writeln!(out)?;

        writeln!(out, "[Events]")?;
        if let Some(background) = &self.background {
            writeln!(out, "0,0,\"{}\",0,0", background)?;
        }
        writeln!(out)?;

        writeln!(out, "[TimingPoints]")?;
        for point in &self.timing_points {
            writeln!(out, "{}", point)?;
        }
        writeln!(out)?;

        writeln!(out, "[HitObjects]")?;
        for object in &self.hit_objects {
            writeln!(out, "{}", object)?;
        }

        Ok(())
    }
}

impl fmt::Display for Beatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sections(f)
    }
}

fn text_or(value: &Option<FieldValue>, default: &str) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| default.to_string())
}

fn number_or(value: &Option<serde_json::Number>, default: &str) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartMetadata, HitObject, TimingPoint};
    use std::path::PathBuf;

    fn full_chart() -> SourceChart {
        SourceChart {
            metadata: ChartMetadata {
                title: Some("Song".into()),
                title_unicode: Some("曲".into()),
                artist: Some("Artist".into()),
                artist_unicode: Some("アーティスト".into()),
                mapper: Some("Mapper".into()),
                difficulty: Some("Hard".into()),
                source: Some("Game".into()),
                tags: Some("tag1 tag2".into()),
                preview_time: Some(FieldValue::Number(12000.into())),
            },
            audio_file: Some("song.mp3".to_string()),
            background_file: Some("bg.png".to_string()),
            accuracy_difficulty: Some(8.into()),
            circle_size: Some(4.into()),
            overall_difficulty: Some(7.into()),
            approach_rate: Some(9.into()),
            timing_points: vec![TimingPoint {
                time: 1000.0,
                bpm: Some(120.0),
                signature: Some(4),
            }],
            hit_objects: vec![
                HitObject {
                    lane: 2,
                    time: 5000.0,
                    holdtime: None,
                },
                HitObject {
                    lane: 1,
                    time: 2000.0,
                    holdtime: Some(300.0),
                },
            ],
        }
    }

    fn found_assets() -> ResolvedAssets {
        ResolvedAssets {
            audio_name: "song.mp3".to_string(),
            audio: Some(PathBuf::from("map/song.mp3")),
            background_name: "bg.png".to_string(),
            background: Some(PathBuf::from("map/images/bg.png")),
        }
    }

    fn missing_assets(audio_name: &str) -> ResolvedAssets {
        ResolvedAssets {
            audio_name: audio_name.to_string(),
            audio: None,
            background_name: defaults::BACKGROUND_FILE.to_string(),
            background: None,
        }
    }

    #[test]
    fn test_full_chart_fields() {
        let text = Beatmap::from_chart(&full_chart(), &found_assets())
            .unwrap()
            .render();

        for line in [
            "AudioFilename: song.mp3",
            "PreviewTime: 12000",
            "Title:Song",
            "TitleUnicode:曲",
            "Artist:Artist",
            "ArtistUnicode:アーティスト",
            "Creator:Mapper",
            "Version:Hard",
            "Source:Game",
            "Tags:tag1 tag2",
            "HPDrainRate:8",
            "CircleSize:4",
            "OverallDifficulty:7",
            "ApproachRate:9",
            "0,0,\"bg.png\",0,0",
            "1000,500.0,4,1,0,100,1,0",
            "192,192,5000,1,0",
            "64,192,2000,128,0,2300:0:0:0:0:",
        ] {
            assert!(text.lines().any(|l| l == line), "missing line {line:?}");
        }
    }

    #[test]
    fn test_defaults_for_empty_chart() {
        let text = Beatmap::from_chart(&SourceChart::default(), &missing_assets("audio.mp3"))
            .unwrap()
            .render();

        for line in [
            "AudioFilename: audio.mp3",
            "PreviewTime: -1",
            "Title:Untitled Map",
            "TitleUnicode:unknown",
            "Artist:Unknown Artist",
            "ArtistUnicode:unknown",
            "Creator:Unknown Mapper",
            "Version:Unknown Difficulty",
            "Source:unknown",
            "Tags:",
            "HPDrainRate:5",
            "CircleSize:4",
            "OverallDifficulty:5",
            "ApproachRate:5",
        ] {
            assert!(text.lines().any(|l| l == line), "missing line {line:?}");
        }
    }

    #[test]
    fn test_fixed_constants() {
        let text = Beatmap::from_chart(&SourceChart::default(), &missing_assets("audio.mp3"))
            .unwrap()
            .render();

        assert!(text.starts_with("osu file format v14\n\n[General]\n"));
        for line in [
            "AudioLeadIn: 0",
            "Countdown: 1",
            "SampleSet: Normal",
            "StackLeniency: 0.7",
            "Mode: 3",
            "LetterboxInBreaks: 0",
            "SpecialStyle: 0",
            "WidescreenStoryboard: 0",
            "DistanceSpacing: 1",
            "BeatDivisor: 4",
            "GridSize: 4",
            "TimelineZoom: 1",
            "BeatmapID:0",
            "BeatmapSetID:-1",
            "SliderMultiplier:1.4",
            "SliderTickRate:1",
        ] {
            assert!(text.lines().any(|l| l == line), "missing line {line:?}");
        }
    }

    #[test]
    fn test_missing_audio_keeps_referenced_name() {
        let beatmap = Beatmap::from_chart(&full_chart(), &missing_assets("song.mp3")).unwrap();
        assert_eq!(beatmap.audio_filename, "song.mp3");
    }

    #[test]
    fn test_events_empty_without_background() {
        let text = Beatmap::from_chart(&full_chart(), &missing_assets("song.mp3"))
            .unwrap()
            .render();
        assert!(text.contains("[Events]\n\n[TimingPoints]"));
    }

    #[test]
    fn test_hit_objects_keep_input_order() {
        let beatmap = Beatmap::from_chart(&full_chart(), &found_assets()).unwrap();
        let times: Vec<i64> = beatmap.hit_objects.iter().map(|o| o.time).collect();
        assert_eq!(times, [5000, 2000]);
    }

    #[test]
    fn test_zero_bpm_is_rejected() {
        let mut chart = full_chart();
        chart.timing_points.push(TimingPoint {
            time: 2000.0,
            bpm: Some(0.0),
            signature: Some(4),
        });

        let result = Beatmap::from_chart(&chart, &found_assets());
        assert!(matches!(
            result,
            Err(crate::Error::InvalidTimingPoint { index: 1, .. })
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let beatmap = Beatmap::from_chart(&full_chart(), &found_assets()).unwrap();
        assert_eq!(beatmap.render(), beatmap.to_string());
        assert_eq!(
            beatmap.render(),
            Beatmap::from_chart(&full_chart(), &found_assets())
                .unwrap()
                .render()
        );
    }
}
