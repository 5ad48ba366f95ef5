//! Current-trip selection

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tanker_types::Trip;

/// Pick one current trip per vehicle
///
/// Trips are ordered by `start_date` descending, then `rank_index` ascending;
/// the first trip per vehicle wins. A missing start date sorts oldest. When
/// both keys tie, the trip seen first in `trips` is kept.
pub fn select_current<I>(trips: I) -> BTreeMap<String, Trip>
where
    I: IntoIterator<Item = Trip>,
{
    let mut current: BTreeMap<String, Trip> = BTreeMap::new();
    for trip in trips {
        match current.entry(trip.vehicle_no.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(trip);
            }
            Entry::Occupied(mut slot) => {
                if currency_order(&trip, slot.get()) == Ordering::Less {
                    slot.insert(trip);
                }
            }
        }
    }
    current
}

/// `Less` means `a` is more current than `b`
fn currency_order(a: &Trip, b: &Trip) -> Ordering {
    b.start_date
        .cmp(&a.start_date)
        .then_with(|| a.rank_index.cmp(&b.rank_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn trip(vehicle: &str, day: u32, rank: i64, end_to: &str) -> Trip {
        Trip {
            vehicle_no: vehicle.to_string(),
            start_date: Some(Utc.with_ymd_and_hms(2024, 3, day, 6, 0, 0).unwrap()),
            rank_index: rank,
            end_to: Some(end_to.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_latest_start_date_wins() {
        let trips = vec![
            trip("GJ01", 1, 0, "old"),
            trip("GJ01", 5, 0, "new"),
            trip("GJ01", 3, 0, "mid"),
        ];
        let current = select_current(trips);
        assert_eq!(current["GJ01"].end_to.as_deref(), Some("new"));
    }

    #[test]
    fn test_lower_rank_breaks_tie() {
        let trips = vec![trip("GJ01", 5, 2, "second"), trip("GJ01", 5, 1, "first")];
        let current = select_current(trips);
        assert_eq!(current["GJ01"].end_to.as_deref(), Some("first"));
    }

    #[test]
    fn test_missing_start_date_is_oldest() {
        let mut undated = trip("GJ01", 1, 0, "undated");
        undated.start_date = None;
        let trips = vec![undated, trip("GJ01", 1, 9, "dated")];
        let current = select_current(trips);
        assert_eq!(current["GJ01"].end_to.as_deref(), Some("dated"));
    }

    #[test]
    fn test_one_trip_per_vehicle_and_idempotent() {
        let trips = vec![
            trip("GJ02", 2, 0, "a"),
            trip("GJ01", 4, 1, "b"),
            trip("GJ01", 4, 0, "c"),
            trip("GJ02", 7, 3, "d"),
        ];
        let first = select_current(trips.clone());
        let second = select_current(trips.into_iter().rev());
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first["GJ01"].end_to.as_deref(), Some("c"));
        assert_eq!(first["GJ02"].end_to.as_deref(), Some("d"));
    }
}
