//! Zones: validation, rank lookup and standings annotation.

use crate::models::{AnnotatedRow, StandingsRow, Zone, ZoneError, ZONE_PRESETS};

/// First zone containing the 1-based `rank`, if any.
pub fn zone_for_rank(zones: &[Zone], rank: u32) -> Option<&Zone> {
    zones.iter().find(|z| z.contains(rank))
}

/// Check a zone set against a table of `team_count` rows.
///
/// Each zone must lie within `1..=team_count` with end >= start, and no two zones
/// may share a position.
pub fn validate_zones(zones: &[Zone], team_count: usize) -> Result<(), ZoneError> {
    let team_count = u32::try_from(team_count).unwrap_or(u32::MAX);
    for z in zones {
        if z.start_position < 1 {
            return Err(ZoneError::StartBelowOne);
        }
        if z.end_position > team_count {
            return Err(ZoneError::EndBeyondTeamCount {
                end: z.end_position,
                team_count,
            });
        }
        if z.end_position < z.start_position {
            return Err(ZoneError::EndBeforeStart {
                start: z.start_position,
                end: z.end_position,
            });
        }
    }

    let mut sorted: Vec<&Zone> = zones.iter().collect();
    sorted.sort_by_key(|z| z.start_position);
    for pair in sorted.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if second.start_position <= first.end_position {
            return Err(ZoneError::Overlap {
                first_start: first.start_position,
                first_end: first.end_position,
                second_start: second.start_position,
                second_end: second.end_position,
            });
        }
    }
    Ok(())
}

/// Attach table positions and zones to ranked rows.
pub fn annotate_standings(rows: Vec<StandingsRow>, zones: &[Zone]) -> Vec<AnnotatedRow> {
    rows.into_iter()
        .zip(1u32..)
        .map(|(row, position)| AnnotatedRow {
            position,
            zone: zone_for_rank(zones, position).cloned(),
            row,
        })
        .collect()
}

/// Proposed next zone: two positions right after the last covered one, with the
/// next preset color. `None` once every position is covered.
pub fn suggest_next_zone(zones: &[Zone], team_count: usize) -> Option<Zone> {
    let team_count = u32::try_from(team_count).unwrap_or(u32::MAX);
    let last_end = zones.iter().map(|z| z.end_position).max().unwrap_or(0);
    let start = last_end.saturating_add(1);
    if start > team_count {
        return None;
    }
    let preset = &ZONE_PRESETS[zones.len() % ZONE_PRESETS.len()];
    Some(Zone::new(start, start.saturating_add(1).min(team_count), preset.color))
}
