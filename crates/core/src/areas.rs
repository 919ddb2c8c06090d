//! Grouping of venues into areas (one per distinct city + state pair).

use std::collections::BTreeMap;

use serde::Serialize;

/// Anything that sits in a city within a state.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// One city/state bucket of the venue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group `items` by their exact `(city, state)` pair.
///
/// Two venues in cities with the same name but different states land in
/// separate areas. Areas are ordered by state then city; items keep their
/// input order inside each area.
pub fn group_by_area<T: Located>(items: Vec<T>) -> Vec<Area<T>> {
    let mut buckets: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();
    for item in items {
        let key = (item.state().to_string(), item.city().to_string());
        buckets.entry(key).or_default().push(item);
    }

    buckets
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}
