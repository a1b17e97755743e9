//! Integration tests for standings zones.

use tournament_fixtures::{
    annotate_standings, compute_standings, suggest_next_zone, validate_zones, zone_for_rank, Team,
    Zone, ZoneError, ZONE_PRESETS,
};

fn gold_red() -> Vec<Zone> {
    vec![
        Zone::new(1, 2, "gold").with_label("Champions"),
        Zone::new(3, 4, "red").with_label("Relegation"),
    ]
}

#[test]
fn rank_lookup() {
    let zones = gold_red();
    assert_eq!(zone_for_rank(&zones, 1).map(|z| z.color.as_str()), Some("gold"));
    assert_eq!(zone_for_rank(&zones, 2).map(|z| z.color.as_str()), Some("gold"));
    assert_eq!(zone_for_rank(&zones, 4).map(|z| z.color.as_str()), Some("red"));
    assert_eq!(zone_for_rank(&zones, 5), None);
    assert_eq!(zone_for_rank(&[], 1), None);
}

#[test]
fn valid_zones_pass() {
    assert_eq!(validate_zones(&gold_red(), 4), Ok(()));
    assert_eq!(validate_zones(&[], 0), Ok(()));
    // Unsorted input is fine as long as ranges do not overlap.
    let zones = vec![Zone::new(5, 6, "red"), Zone::new(1, 1, "gold")];
    assert_eq!(validate_zones(&zones, 6), Ok(()));
}

#[test]
fn out_of_range_zones_fail() {
    assert_eq!(validate_zones(&[Zone::new(0, 2, "x")], 4), Err(ZoneError::StartBelowOne));
    assert_eq!(
        validate_zones(&[Zone::new(3, 5, "x")], 4),
        Err(ZoneError::EndBeyondTeamCount { end: 5, team_count: 4 })
    );
    assert_eq!(
        validate_zones(&[Zone::new(3, 2, "x")], 4),
        Err(ZoneError::EndBeforeStart { start: 3, end: 2 })
    );
}

#[test]
fn overlapping_zones_fail() {
    let zones = vec![Zone::new(3, 5, "red"), Zone::new(1, 3, "gold")];
    let err = validate_zones(&zones, 8).unwrap_err();
    assert_eq!(
        err,
        ZoneError::Overlap { first_start: 1, first_end: 3, second_start: 3, second_end: 5 }
    );
    assert_eq!(err.to_string(), "Zones overlap: 1-3 and 3-5");
}

#[test]
fn annotation_assigns_positions_and_zones() {
    let teams: Vec<Team> = ["A", "B", "C", "D", "E"].into_iter().map(Team::new).collect();
    let rows = compute_standings(&teams, &[]);
    let annotated = annotate_standings(rows, &gold_red());
    assert_eq!(annotated.len(), 5);
    assert_eq!(annotated.iter().map(|r| r.position).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(annotated[0].row.team_name, "A");
    assert_eq!(annotated[1].zone.as_ref().map(|z| z.color.as_str()), Some("gold"));
    assert_eq!(annotated[2].zone.as_ref().and_then(|z| z.label.as_deref()), Some("Relegation"));
    assert!(annotated[4].zone.is_none());
}

#[test]
fn suggestion_follows_last_zone() {
    let first = suggest_next_zone(&[], 6).unwrap();
    assert_eq!((first.start_position, first.end_position), (1, 2));
    assert_eq!(first.color, ZONE_PRESETS[0].color);

    let next = suggest_next_zone(&[Zone::new(1, 4, "gold")], 5).unwrap();
    assert_eq!((next.start_position, next.end_position), (5, 5));
    assert_eq!(next.color, ZONE_PRESETS[1].color);

    assert_eq!(suggest_next_zone(&[Zone::new(1, 5, "gold")], 5), None);
}
