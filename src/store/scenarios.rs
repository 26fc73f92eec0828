//! Scenario lifecycle helpers.

use tracing::info;

use crate::models::{LineItem, Scenario};

use super::repository::InMemoryRepository;

/// Deletes a scenario together with every line item it owns.
///
/// Returns the number of line items removed, or `None` if the scenario did
/// not exist. Line items are removed even when the scenario record is
/// already gone, so orphans never survive a delete.
pub fn delete_scenario(
    scenarios: &mut InMemoryRepository<Scenario>,
    line_items: &mut InMemoryRepository<LineItem>,
    scenario_id: &str,
) -> Option<usize> {
    let removed_items = line_items.remove_where(|item| item.scenario_id() == scenario_id);
    let removed = scenarios.remove(scenario_id);

    info!(
        scenario_id = %scenario_id,
        line_items_removed = removed_items,
        scenario_existed = removed.is_some(),
        "Deleted scenario"
    );

    removed.map(|_| removed_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Repository;
    use rust_decimal::Decimal;

    fn scenario(id: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            project_id: "project-1".to_string(),
            name: id.to_string(),
            description: None,
            wage_floor: Decimal::new(80, 0),
            percentage_of_goal: Decimal::new(50, 0),
        }
    }

    fn expense(id: &str, scenario_id: &str) -> LineItem {
        LineItem::expense(id, scenario_id, "Travel", "", Decimal::new(100, 0))
    }

    #[test]
    fn test_delete_cascades_to_line_items() {
        let mut scenarios: InMemoryRepository<Scenario> =
            vec![scenario("scenario-1"), scenario("scenario-2")].into_iter().collect();
        let mut items: InMemoryRepository<LineItem> = vec![
            expense("line-1", "scenario-1"),
            expense("line-2", "scenario-2"),
            expense("line-3", "scenario-1"),
        ]
        .into_iter()
        .collect();

        let removed = delete_scenario(&mut scenarios, &mut items, "scenario-1");

        assert_eq!(removed, Some(2));
        assert!(scenarios.get("scenario-1").is_none());
        assert_eq!(items.len(), 1);
        assert_eq!(items.all()[0].id(), "line-2");
    }

    #[test]
    fn test_delete_unknown_scenario_still_removes_orphans() {
        let mut scenarios: InMemoryRepository<Scenario> = InMemoryRepository::new();
        let mut items: InMemoryRepository<LineItem> =
            vec![expense("line-1", "ghost")].into_iter().collect();

        let removed = delete_scenario(&mut scenarios, &mut items, "ghost");

        assert_eq!(removed, None);
        assert!(items.is_empty());
    }
}
