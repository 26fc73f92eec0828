//! Current financial profile resolution.

use chrono::{Datelike, Utc};

use crate::models::FinancialProfile;

use super::repository::Repository;

/// Resolves a collaborator's profile for `year`.
///
/// A profile whose year matches wins; otherwise the most recently inserted
/// profile for the collaborator is used. Returns `None` when the
/// collaborator has no profiles at all.
///
/// # Examples
///
/// ```
/// use budget_engine::models::FinancialProfile;
/// use budget_engine::store::{current_profile, InMemoryRepository};
///
/// let profiles: InMemoryRepository<FinancialProfile> = vec![
///     FinancialProfile::new("p-2023", "collab-1", 2023),
///     FinancialProfile::new("p-2024", "collab-1", 2024),
///     FinancialProfile::new("p-2022", "collab-1", 2022),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(current_profile(&profiles, "collab-1", 2024).unwrap().id, "p-2024");
/// assert_eq!(current_profile(&profiles, "collab-1", 2030).unwrap().id, "p-2022");
/// ```
pub fn current_profile(
    profiles: &dyn Repository<FinancialProfile>,
    collaborator_id: &str,
    year: i32,
) -> Option<FinancialProfile> {
    let mut owned = profiles.query(&|p| p.collaborator_id == collaborator_id);
    match owned.iter().position(|p| p.year == year) {
        Some(index) => Some(owned.swap_remove(index)),
        None => owned.pop(),
    }
}

/// The calendar year used to resolve current profiles.
pub fn current_year() -> i32 {
    Utc::now().year()
}
