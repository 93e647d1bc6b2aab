use std::fmt;

use crate::chart::{HitObject, TimingPoint};
use crate::config::{defaults, osu};
use crate::error::{Error, Result};

/// osu! hit object type flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HitObjectKind {
    Tap = 1,
    /// osu!mania hold note.
    Hold = 128,
}

impl HitObjectKind {
    pub fn flag(&self) -> u8 {
        *self as u8
    }
}

/// An uninherited (red line) timing point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsuTimingPoint {
    pub time: i64,
    /// Milliseconds per beat.
    pub beat_length: f64,
    pub meter: i64,
}

impl OsuTimingPoint {
    /// Convert a chart timing point; `index` is only used for error reporting.
    pub fn from_chart(index: usize, point: &TimingPoint) -> Result<Self> {
        let bpm = point.bpm.unwrap_or(defaults::BPM);
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(Error::InvalidTimingPoint { index, bpm });
        }

        Ok(Self {
            time: point.time as i64,
            beat_length: 60_000.0 / bpm,
            meter: point.signature.unwrap_or(defaults::SIGNATURE),
        })
    }
}

impl fmt::Display for OsuTimingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.time,
            format_float(self.beat_length),
            self.meter,
            osu::TIMING_POINT_SAMPLE_SET,
            osu::TIMING_POINT_SAMPLE_INDEX,
            osu::TIMING_POINT_VOLUME,
            osu::TIMING_POINT_UNINHERITED,
            osu::TIMING_POINT_EFFECTS,
        )
    }
}

/// A mania note placed on the fixed 4-lane layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsuHitObject {
    pub x: i64,
    pub y: i64,
    pub time: i64,
    pub kind: HitObjectKind,
    /// Only set for holds.
    pub end_time: Option<i64>,
}

impl OsuHitObject {
    /// Lanes are not bounds-checked; lanes outside 1..=4 land off the playfield.
    pub fn from_chart(object: &HitObject) -> Self {
        let time = object.time as i64;
        let hold = object.holdtime.map(|h| h as i64).unwrap_or(0);

        let (kind, end_time) = if hold != 0 {
            (HitObjectKind::Hold, Some(time.saturating_add(hold)))
        } else {
            (HitObjectKind::Tap, None)
        };

        Self {
            x: lane_x(object.lane),
            y: osu::NOTE_Y,
            time,
            kind,
            end_time,
        }
    }
}

impl fmt::Display for OsuHitObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{},0", self.x, self.y, self.time, self.kind.flag())?;
        match (self.kind, self.end_time) {
            (HitObjectKind::Hold, Some(end)) => write!(f, ",{}:0:0:0:0:", end),
            _ => Ok(()),
        }
    }
}

/// Playfield x coordinate of a 1-based lane.
pub fn lane_x(lane: i64) -> i64 {
    lane.saturating_sub(1)
        .saturating_mul(osu::LANE_WIDTH)
        .saturating_add(osu::LANE_ORIGIN_X)
}

/// Shortest round-trip form, always with a fractional part (`500.0`).
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}
