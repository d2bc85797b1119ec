//! # Track Sizing
//!
//! Distributes an available-space budget across a track list.
//!
//! Sizing runs in three deterministic passes:
//! 1. Fixed (`px`) and percentage tracks take their size off the top.
//! 2. Flexible (`fr`) tracks split whatever is left, proportionally.
//! 3. `auto` tracks split what the flexible tracks left over.
//!
//! Flexible tracks always consume the whole residual before auto tracks are
//! considered, so a track list containing both `fr` and `auto` leaves the auto
//! tracks at zero. This differs from CSS Grid, where auto tracks are sized to
//! their content first.

use tracing::trace;

use crate::track::{parse_track_size, ParsedTrack, TrackSize, TrackUnit};

/// Resolve pixel sizes for a list of track declarations.
///
/// The result has one entry per track, in the same order. No rounding is
/// applied. A negative `available_space` behaves as zero.
pub fn resolve_tracks(tracks: &[TrackSize], available_space: f32, gap: f32) -> Vec<f32> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let parsed: Vec<ParsedTrack> = tracks.iter().map(parse_track_size).collect();
    resolve_parsed_tracks(&parsed, available_space, gap)
}

/// Resolve pixel sizes for already-parsed tracks.
pub fn resolve_parsed_tracks(tracks: &[ParsedTrack], available_space: f32, gap: f32) -> Vec<f32> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let available_space = available_space.max(0.0);
    let total_gap = gap * tracks.len().saturating_sub(1) as f32;
    let mut remaining = available_space - total_gap;

    let mut sizes = vec![0.0_f32; tracks.len()];
    let mut total_fr = 0.0_f32;
    let mut auto_count = 0usize;

    // Step 1: Fixed and percentage tracks
    for (size, track) in sizes.iter_mut().zip(tracks) {
        let value = track.value.max(0.0);
        match track.unit {
            TrackUnit::Px => {
                *size = value;
                remaining -= value;
            }
            TrackUnit::Percent => {
                *size = available_space * value / 100.0;
                remaining -= *size;
            }
            TrackUnit::Fr => total_fr += value,
            TrackUnit::Auto => auto_count += 1,
        }
    }

    remaining = remaining.max(0.0);

    // Step 2: Flexible tracks take all of the residual space
    if total_fr > 0.0 {
        let fr_unit = remaining / total_fr;
        for (size, track) in sizes.iter_mut().zip(tracks) {
            if track.is_flexible() {
                *size = track.value.max(0.0) * fr_unit;
            }
        }
        remaining = 0.0;
    }

    // Step 3: Auto tracks split anything still left
    if auto_count > 0 && remaining > 0.0 {
        let per_track = remaining / auto_count as f32;
        for (size, track) in sizes.iter_mut().zip(tracks) {
            if track.is_auto() {
                *size = per_track;
            }
        }
    }

    trace!(
        "Resolved {} tracks in {}px (gap {}): {:?}",
        tracks.len(),
        available_space,
        gap,
        sizes
    );

    sizes
}
