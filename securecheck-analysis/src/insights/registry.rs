//! Ordered registry of insight descriptors.

use tracing::info;

use securecheck_core::errors::{SecureCheckError, SecureCheckResult};
use securecheck_core::traits::StopStore;
use securecheck_core::types::table::TableResult;

use super::catalog;
use super::{InsightCategory, InsightDescriptor};

/// Registry of all insights, in registration order.
pub struct InsightRegistry {
    insights: Vec<InsightDescriptor>,
}

impl InsightRegistry {
    /// Registry holding the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            insights: catalog::BUILTIN.to_vec(),
        }
    }

    /// All insights, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &InsightDescriptor> {
        self.insights.iter()
    }

    /// Look up an insight by id.
    pub fn get(&self, id: &str) -> Option<&InsightDescriptor> {
        self.insights.iter().find(|insight| insight.id == id)
    }

    /// Insights in one category, preserving registration order.
    pub fn by_category(
        &self,
        category: InsightCategory,
    ) -> impl Iterator<Item = &InsightDescriptor> {
        self.insights
            .iter()
            .filter(move |insight| insight.category == category)
    }

    /// Execute an insight against the store and return its result table.
    pub fn run(&self, store: &dyn StopStore, id: &str) -> SecureCheckResult<TableResult> {
        let insight = self.get(id).ok_or_else(|| SecureCheckError::UnknownInsight {
            id: id.to_string(),
        })?;
        let table = store.table(insight.sql)?;
        info!(id = insight.id, rows = table.row_count(), "insight executed");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}

impl Default for InsightRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_has_twenty_unique_ids() {
        let registry = InsightRegistry::builtin();
        assert_eq!(registry.len(), 20);

        let ids: HashSet<&str> = registry.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 20, "insight ids must be unique");
    }

    #[test]
    fn lookup_by_id() {
        let registry = InsightRegistry::builtin();
        let insight = registry.get("drug-stop-vehicles").unwrap();
        assert_eq!(
            insight.label,
            "What are the top 10 vehicles involved in drug-related stops?"
        );
        assert!(registry.get("nonsense").is_none());
    }

    #[test]
    fn every_category_is_populated() {
        let registry = InsightRegistry::builtin();
        for category in InsightCategory::ALL {
            assert!(
                registry.by_category(category).next().is_some(),
                "category {category} has no insights"
            );
        }
    }

    #[test]
    fn registration_order_is_stable() {
        let registry = InsightRegistry::builtin();
        let first_two: Vec<&str> = registry.iter().take(2).map(|i| i.id).collect();
        assert_eq!(first_two, vec!["drug-stop-vehicles", "most-searched-vehicles"]);
    }
}
