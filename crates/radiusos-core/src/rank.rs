//! Radius filtering and distance ranking.

use crate::distance::distance_miles;
use crate::facility::{RadiusQuery, RankedResult, SearchPoint, Table};

/// Returns every locatable record within `radius_miles` of `search_point`,
/// nearest first.
///
/// The boundary is inclusive: a record exactly `radius_miles` away is kept.
/// Records at equal distance keep their table order. Unlocatable records are
/// skipped. An empty result is not an error.
#[must_use]
pub fn filter_within_radius(
    table: &Table,
    search_point: SearchPoint,
    radius_miles: f64,
) -> Vec<RankedResult<'_>> {
    let mut results: Vec<RankedResult<'_>> = table
        .records
        .iter()
        .filter_map(|record| {
            let distance_miles = distance_miles(search_point, record.coordinates()?);
            (distance_miles <= radius_miles).then_some(RankedResult {
                record,
                distance_miles,
            })
        })
        .collect();

    // `sort_by` is stable, which preserves input order among ties.
    results.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    results
}

/// [`filter_within_radius`] for a validated [`RadiusQuery`].
#[must_use]
pub fn rank<'a>(table: &'a Table, query: &RadiusQuery) -> Vec<RankedResult<'a>> {
    filter_within_radius(table, query.search_point, query.radius_miles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{ColumnRoles, Coordinates, FacilityRecord};

    fn facility(name: &str, coords: Option<(f64, f64)>) -> FacilityRecord {
        FacilityRecord {
            name: name.to_owned(),
            address: Some(format!("{name}, Somewhere, ZZ")),
            city: None,
            state: None,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            cells: vec![name.to_owned()],
        }
    }

    fn table(records: Vec<FacilityRecord>) -> Table {
        Table {
            columns: Vec::new(),
            roles: ColumnRoles::default(),
            records,
        }
    }

    fn origin() -> SearchPoint {
        Coordinates::new(0.0, 0.0).unwrap()
    }

    fn names<'a>(results: &[RankedResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.record.name.as_str()).collect()
    }

    #[test]
    fn keeps_near_facilities_in_distance_order() {
        // On the equator 0.1° ≈ 6.9 mi and 0.6° ≈ 41.5 mi.
        let t = table(vec![
            facility("far", Some((0.0, 0.6))),
            facility("mid", Some((0.0, 0.1))),
            facility("here", Some((0.0, 0.0))),
        ]);

        let results = filter_within_radius(&t, origin(), 25.0);

        assert_eq!(names(&results), vec!["here", "mid"]);
        assert_eq!(results[0].distance_miles, 0.0);
        assert!((results[1].distance_miles - 6.917).abs() < 0.01);
    }

    #[test]
    fn boundary_distance_is_included() {
        let t = table(vec![facility("edge", Some((0.0, 0.5)))]);
        let exact = distance_miles(origin(), Coordinates::new(0.0, 0.5).unwrap());

        assert_eq!(filter_within_radius(&t, origin(), exact).len(), 1);
        assert!(filter_within_radius(&t, origin(), exact - 1e-9).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let t = table(vec![
            facility("east", Some((0.0, 0.2))),
            facility("north", Some((0.1, 0.0))),
            facility("east annex", Some((0.0, 0.2))),
            facility("centre", Some((0.0, 0.0))),
        ]);

        let results = filter_within_radius(&t, origin(), 100.0);

        assert_eq!(names(&results), vec!["centre", "north", "east", "east annex"]);
        assert_eq!(results[2].distance_miles, results[3].distance_miles);
    }

    #[test]
    fn unlocatable_records_are_skipped() {
        let mut half = facility("half", None);
        half.latitude = Some(0.0);
        let t = table(vec![facility("none", None), half, facility("ok", Some((0.0, 0.0)))]);

        let results = filter_within_radius(&t, origin(), 10.0);
        assert_eq!(names(&results), vec!["ok"]);
    }

    #[test]
    fn empty_result_is_valid() {
        let t = table(vec![facility("far", Some((10.0, 10.0)))]);
        assert!(filter_within_radius(&t, origin(), 1.0).is_empty());
        assert!(filter_within_radius(&table(Vec::new()), origin(), 1.0).is_empty());
    }

    #[test]
    fn every_locatable_record_is_partitioned_by_radius() {
        let records: Vec<FacilityRecord> = (0..40)
            .map(|i| {
                let step = f64::from(i);
                facility(
                    &format!("f{i}"),
                    Some(((step * 0.37) % 3.0 - 1.5, (step * 0.71) % 4.0 - 2.0)),
                )
            })
            .collect();
        let t = table(records);
        let radius = 80.0;

        let results = filter_within_radius(&t, origin(), radius);

        for pair in results.windows(2) {
            assert!(pair[0].distance_miles <= pair[1].distance_miles);
        }
        for r in &results {
            assert!(r.record.is_locatable());
            assert!(r.distance_miles <= radius);
        }
        for record in t.locatable() {
            let included = results.iter().any(|r| std::ptr::eq(r.record, record));
            if !included {
                let d = distance_miles(origin(), record.coordinates().unwrap());
                assert!(d > radius, "{} excluded at {d} mi", record.name);
            }
        }
    }

    #[test]
    fn ranking_does_not_mutate_the_table() {
        let t = table(vec![facility("a", Some((0.0, 0.1)))]);
        let before = t.clone();
        let query = RadiusQuery::new(origin(), 50.0).unwrap();

        let results = rank(&t, &query);

        assert_eq!(results.len(), 1);
        assert_eq!(t, before);
    }
}
