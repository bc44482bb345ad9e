use crate::model::plant::Plant;

/// Returns `true` if `plant` should be listed for `query`.
///
/// Matching is a case-insensitive substring test on the name. Plants without a
/// name, or with an empty one, never match.
pub fn matches_query(plant: &Plant, query: &str) -> bool {
    match plant.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_lowercase().contains(&query.to_lowercase()),
        _ => false,
    }
}

/// Filtered view over `plants`, in collection order.
pub fn filter_plants<'a>(plants: &'a [Plant], query: &str) -> Vec<&'a Plant> {
    plants.iter().filter(|plant| matches_query(plant, query)).collect()
}
