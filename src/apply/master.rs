use crate::calendar::CATEGORY_DEFINITIONS;
use crate::host::{MasterCategory, MasterCategoryRegistry};

/// Registers every known category in the mailbox-wide list, leaving entries
/// that already exist (compared case-insensitively) alone.
///
/// Returns how many categories were added. Registry failures are logged and
/// count as nothing added; naming still works without colors.
pub async fn ensure_master_categories<R>(registry: &mut R) -> usize
where
    R: MasterCategoryRegistry + ?Sized,
{
    let existing = match registry.master_categories().await {
        Ok(existing) => existing,
        Err(e) => {
            tracing::warn!("Failed to read master categories: {}", e);
            return 0;
        }
    };

    let existing_names: Vec<String> = existing
        .iter()
        .map(|c| c.display_name.to_uppercase())
        .collect();

    let to_add: Vec<MasterCategory> = CATEGORY_DEFINITIONS
        .iter()
        .filter(|def| !existing_names.iter().any(|name| name == def.name))
        .map(|def| MasterCategory {
            display_name: def.name.to_string(),
            color: def.color.to_string(),
        })
        .collect();

    if to_add.is_empty() {
        tracing::debug!("All master categories already registered");
        return 0;
    }

    match registry.add_master_categories(&to_add).await {
        Ok(()) => {
            tracing::info!("Registered {} master categories", to_add.len());
            to_add.len()
        }
        Err(e) => {
            tracing::warn!("Failed to add master categories: {}", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarItem;
    use crate::host::{HostOperation, InMemoryItem};
    use chrono::Utc;

    fn registry() -> InMemoryItem {
        let now = Utc::now();
        InMemoryItem::new(CalendarItem::new(now, now))
    }

    fn category(name: &str, color: &str) -> MasterCategory {
        MasterCategory { display_name: name.to_string(), color: color.to_string() }
    }

    #[test]
    fn empty_registry_receives_all_categories() {
        let mut registry = registry();

        let added = tokio_test::block_on(ensure_master_categories(&mut registry));

        assert_eq!(added, 12);
        assert!(registry.master_categories.contains(&category("STUDIO", "Preset7")));
        assert!(registry.master_categories.contains(&category("REST", "Preset14")));
    }

    #[test]
    fn existing_names_match_case_insensitively() {
        let mut registry = registry().with_master_categories(vec![
            category("Studio", "Preset19"),
            category("release day", "Preset1"),
        ]);

        let added = tokio_test::block_on(ensure_master_categories(&mut registry));

        assert_eq!(added, 10);
        let studios = registry
            .master_categories
            .iter()
            .filter(|c| c.display_name.eq_ignore_ascii_case("STUDIO"))
            .count();
        assert_eq!(studios, 1);
    }

    #[test]
    fn complete_registry_is_left_alone() {
        let all = CATEGORY_DEFINITIONS
            .iter()
            .map(|d| category(d.name, d.color))
            .collect();
        let mut registry = registry().with_master_categories(all);

        let added = tokio_test::block_on(ensure_master_categories(&mut registry));

        assert_eq!(added, 0);
        assert_eq!(registry.calls(), vec![HostOperation::GetMasterCategories]);
    }

    #[test]
    fn unreadable_registry_is_skipped() {
        let mut registry = registry().failing_on(HostOperation::GetMasterCategories);

        let added = tokio_test::block_on(ensure_master_categories(&mut registry));

        assert_eq!(added, 0);
        assert!(!registry.calls().contains(&HostOperation::AddMasterCategories));
    }

    #[test]
    fn failed_add_reports_nothing_added() {
        let mut registry = registry().failing_on(HostOperation::AddMasterCategories);

        let added = tokio_test::block_on(ensure_master_categories(&mut registry));

        assert_eq!(added, 0);
        assert!(registry.master_categories.is_empty());
    }
}
