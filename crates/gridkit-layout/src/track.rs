//! # Track Declarations
//!
//! Parsing of column/row track sizes into a typed value + unit pair.
//!
//! A declaration is either a number (pixels) or a string in one of these forms:
//! `"<number>"`, `"<number>px"`, `"<number>fr"`, `"<number>%"` or `"auto"`.
//! Parsing never fails. Malformed input is replaced by a safe default and
//! reported through a `warn!` event.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A declared track size, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TrackSizeRepr", into = "TrackSizeRepr")]
pub enum TrackSize {
    /// Fixed length in pixels.
    Px(f32),
    /// Fractional share of the residual space.
    Fr(f32),
    /// Percentage of the available space.
    Percent(f32),
    /// Takes whatever is left once fixed and flexible tracks are sized.
    #[default]
    Auto,
    /// Raw string declaration, normalized at parse time.
    Declared(String),
}

impl TrackSize {
    /// Create a fixed pixel size.
    pub fn px(value: f32) -> Self {
        TrackSize::Px(value)
    }

    /// Create a fractional size.
    pub fn fr(value: f32) -> Self {
        TrackSize::Fr(value)
    }

    /// Create a percentage size.
    pub fn percent(value: f32) -> Self {
        TrackSize::Percent(value)
    }

    /// Parse this declaration.
    pub fn parse(&self) -> ParsedTrack {
        parse_track_size(self)
    }
}

impl From<f32> for TrackSize {
    fn from(value: f32) -> Self {
        TrackSize::Px(value)
    }
}

impl From<&str> for TrackSize {
    fn from(value: &str) -> Self {
        TrackSize::Declared(value.to_string())
    }
}

impl From<String> for TrackSize {
    fn from(value: String) -> Self {
        TrackSize::Declared(value)
    }
}

impl fmt::Display for TrackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackSize::Px(v) => write!(f, "{v}"),
            TrackSize::Fr(v) => write!(f, "{v}fr"),
            TrackSize::Percent(v) => write!(f, "{v}%"),
            TrackSize::Auto => f.write_str("auto"),
            TrackSize::Declared(raw) => f.write_str(raw),
        }
    }
}

/// Wire form of a track size: a bare number or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TrackSizeRepr {
    Number(f32),
    Text(String),
}

impl From<TrackSizeRepr> for TrackSize {
    fn from(repr: TrackSizeRepr) -> Self {
        match repr {
            TrackSizeRepr::Number(v) => TrackSize::Px(v),
            TrackSizeRepr::Text(raw) => TrackSize::Declared(raw),
        }
    }
}

impl From<TrackSize> for TrackSizeRepr {
    fn from(size: TrackSize) -> Self {
        match size {
            TrackSize::Px(v) => TrackSizeRepr::Number(v),
            TrackSize::Declared(raw) => TrackSizeRepr::Text(raw),
            other => TrackSizeRepr::Text(other.to_string()),
        }
    }
}

/// Unit of a parsed track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackUnit {
    Px,
    Fr,
    Percent,
    Auto,
}

/// A normalized track size. `Auto` always carries a value of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedTrack {
    pub value: f32,
    pub unit: TrackUnit,
}

impl ParsedTrack {
    pub const AUTO: ParsedTrack = ParsedTrack {
        value: 0.0,
        unit: TrackUnit::Auto,
    };

    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: TrackUnit::Px,
        }
    }

    pub fn fr(value: f32) -> Self {
        Self {
            value,
            unit: TrackUnit::Fr,
        }
    }

    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: TrackUnit::Percent,
        }
    }

    /// Check if this is a flexible track.
    pub fn is_flexible(&self) -> bool {
        self.unit == TrackUnit::Fr
    }

    /// Check if this is an auto track.
    pub fn is_auto(&self) -> bool {
        self.unit == TrackUnit::Auto
    }
}

/// Normalize a track declaration.
pub fn parse_track_size(track: &TrackSize) -> ParsedTrack {
    match track {
        TrackSize::Px(v) => ParsedTrack::px(*v),
        TrackSize::Fr(v) => ParsedTrack::fr(*v),
        TrackSize::Percent(v) => ParsedTrack::percent(*v),
        TrackSize::Auto => ParsedTrack::AUTO,
        TrackSize::Declared(raw) => parse_declaration(raw),
    }
}

fn parse_declaration(raw: &str) -> ParsedTrack {
    let trimmed = raw.trim();

    if trimmed == "auto" {
        return ParsedTrack::AUTO;
    }

    if trimmed.ends_with("fr") {
        return match leading_number(trimmed) {
            Some(value) => ParsedTrack::fr(value),
            None => {
                warn!("Invalid fr value: {:?}, using 1fr", raw);
                ParsedTrack::fr(1.0)
            }
        };
    }

    if trimmed.ends_with('%') {
        return match leading_number(trimmed) {
            Some(value) => ParsedTrack::percent(value),
            None => {
                warn!("Invalid percentage value: {:?}, using auto", raw);
                ParsedTrack::AUTO
            }
        };
    }

    // Pixels, with or without a "px" suffix
    match leading_number(trimmed) {
        Some(value) => ParsedTrack::px(value),
        None => {
            warn!("Unrecognized track size: {:?}, using auto", raw);
            ParsedTrack::AUTO
        }
    }
}

/// Parse the longest decimal number at the start of `s`, ignoring whatever follows.
fn leading_number(s: &str) -> Option<f32> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digit_count += frac_end - (end + 1);
        if digit_count > 0 {
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f32>().ok()
}
