//! Bulk geocoding of an uploaded facility table.
//!
//! Records are visited strictly in order, one provider call at a time, with
//! [`Geocoder::min_delay`] slept between consecutive calls. A failed address
//! stays unlocatable; the pass never aborts and always covers the whole table.

use radiusos_core::Table;

use crate::geocoder::Geocoder;

/// Counts for one bulk geocoding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkGeocodeReport {
    /// Provider calls made.
    pub attempted: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// Records that already had usable coordinates and were left untouched.
    pub already_located: usize,
    /// Records with neither coordinates nor an address to look up.
    pub missing_address: usize,
}

/// Geocodes every record that is not yet locatable, writing resolved
/// coordinates back into the table.
pub async fn geocode_missing<G: Geocoder>(geocoder: &G, table: &mut Table) -> BulkGeocodeReport {
    let delay = geocoder.min_delay();
    let mut report = BulkGeocodeReport::default();

    for (row, record) in table.records.iter_mut().enumerate() {
        if record.is_locatable() {
            report.already_located += 1;
            continue;
        }

        let Some(address) = record.address.clone() else {
            report.missing_address += 1;
            tracing::debug!(row, name = %record.name, "no address to geocode");
            continue;
        };

        if report.attempted > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        report.attempted += 1;

        if let Some(coordinates) = geocoder.geocode(&address).await {
            record.set_coordinates(coordinates);
            report.resolved += 1;
        } else {
            report.unresolved += 1;
            tracing::warn!(row, address = %address, "address could not be geocoded");
        }
    }

    tracing::info!(
        attempted = report.attempted,
        resolved = report.resolved,
        unresolved = report.unresolved,
        already_located = report.already_located,
        missing_address = report.missing_address,
        "bulk geocoding pass complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::{Duration, Instant};

    use radiusos_core::{normalize, Coordinates, RawTable};

    use super::*;

    /// Answers from a fixed map and records when each call happened.
    struct MapGeocoder {
        known: HashMap<&'static str, (f64, f64)>,
        delay: Duration,
        calls: RefCell<Vec<(String, Instant)>>,
    }

    impl MapGeocoder {
        fn new(known: &[(&'static str, (f64, f64))], delay: Duration) -> Self {
            Self {
                known: known.iter().copied().collect(),
                delay,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn called(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(a, _)| a.clone()).collect()
        }
    }

    impl Geocoder for MapGeocoder {
        async fn geocode(&self, address: &str) -> Option<Coordinates> {
            self.calls
                .borrow_mut()
                .push((address.to_owned(), Instant::now()));
            let (lat, lon) = self.known.get(address)?;
            Coordinates::new(*lat, *lon)
        }

        fn min_delay(&self) -> Duration {
            self.delay
        }
    }

    fn table(rows: &[[&str; 5]]) -> Table {
        normalize(&RawTable {
            headers: ["facility_name", "city", "state", "lat", "lng"]
                .map(str::to_owned)
                .to_vec(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| (*c).to_owned()).collect())
                .collect(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn resolves_unlocated_rows_and_skips_located_ones() {
        let mut t = table(&[
            ["Mercy", "Austin", "TX", "", ""],
            ["Seton", "Austin", "TX", "30.27", "-97.74"],
            ["Ghost", "Nowhere", "ZZ", "", ""],
        ]);
        let geocoder = MapGeocoder::new(
            &[("Mercy, Austin, TX", (30.2711, -97.7437))],
            Duration::ZERO,
        );

        let report = geocode_missing(&geocoder, &mut t).await;

        assert_eq!(
            report,
            BulkGeocodeReport {
                attempted: 2,
                resolved: 1,
                unresolved: 1,
                already_located: 1,
                missing_address: 0,
            }
        );
        assert_eq!(geocoder.called(), vec!["Mercy, Austin, TX", "Ghost, Nowhere, ZZ"]);
        assert_eq!(t.records[0].latitude, Some(30.2711));
        assert_eq!(t.records[1].latitude, Some(30.27));
        assert!(!t.records[2].is_locatable());
    }

    #[tokio::test]
    async fn rows_without_address_are_counted_not_called() {
        let mut t = table(&[["Mercy", "", "TX", "", ""], ["Seton", "Austin", "TX", "", ""]]);
        let geocoder = MapGeocoder::new(&[], Duration::ZERO);

        let report = geocode_missing(&geocoder, &mut t).await;

        assert_eq!(report.missing_address, 1);
        assert_eq!(report.attempted, 1);
        assert_eq!(geocoder.called(), vec!["Seton, Austin, TX"]);
    }

    #[tokio::test]
    async fn consecutive_calls_are_spaced_by_min_delay() {
        let mut t = table(&[
            ["A", "Austin", "TX", "", ""],
            ["B", "Austin", "TX", "", ""],
            ["C", "Austin", "TX", "", ""],
        ]);
        let delay = Duration::from_millis(40);
        let geocoder = MapGeocoder::new(&[], delay);

        let started = Instant::now();
        geocode_missing(&geocoder, &mut t).await;

        let calls = geocoder.calls.borrow();
        assert_eq!(calls.len(), 3);
        // No wait before the first call.
        assert!(calls[0].1.duration_since(started) < delay);
        for pair in calls.windows(2) {
            assert!(pair[1].1.duration_since(pair[0].1) >= delay);
        }
    }

    #[tokio::test]
    async fn empty_table_makes_no_calls() {
        let mut t = table(&[]);
        let geocoder = MapGeocoder::new(&[], Duration::from_secs(5));

        let report = geocode_missing(&geocoder, &mut t).await;

        assert_eq!(report, BulkGeocodeReport::default());
        assert!(geocoder.called().is_empty());
    }
}
