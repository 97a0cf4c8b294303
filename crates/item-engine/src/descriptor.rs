//! Item descriptor trait and metadata types
//!
//! This module provides the `ItemDescriptor` trait that allows item
//! factories to self-describe their metadata (type string, label, category,
//! icon). This creates a single source of truth: the factory defines both
//! how to build the item AND how the host presents it.

use serde::{Deserialize, Serialize};

/// Category of a project item, used for palette grouping in the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Items that hold data (databases, files)
    Store,
    /// Items that transform or merge data
    Manipulator,
    /// Items that export data to external formats
    Exporter,
    /// Items that display data without producing anything
    Visualization,
}

/// Complete metadata for an item type
///
/// This describes everything the host needs to list the item in its palette
/// and draw its icon; no rendering happens in this crate. Icon paths and
/// colors are opaque strings consumed by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    /// Unique type identifier (e.g. "Combiner")
    pub item_type: String,
    /// Category for palette grouping
    pub category: ItemCategory,
    /// Human-readable label
    pub label: String,
    /// Description of what the item does
    pub description: String,
    /// Icon resource path (e.g. ":/icons/item_icons/database.svg")
    pub icon: String,
    /// Icon foreground color, hex
    pub icon_color: String,
    /// Icon background color, hex
    pub background_color: String,
}

/// Trait for factories that can describe their item type's metadata
pub trait ItemDescriptor {
    /// Get the static metadata for this item type
    fn descriptor() -> ItemMetadata
    where
        Self: Sized;
}

/// Link-time collected descriptor function
///
/// Item crates submit their descriptors with `inventory`:
///
/// ```ignore
/// inventory::submit!(item_engine::DescriptorFn(CombinerFactory::descriptor));
/// ```
///
/// The registry picks them all up via
/// [`ItemRegistry::with_builtin_metadata`](crate::ItemRegistry::with_builtin_metadata).
pub struct DescriptorFn(pub fn() -> ItemMetadata);

inventory::collect!(DescriptorFn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_serialization() {
        let metadata = ItemMetadata {
            item_type: "Data Store".to_string(),
            category: ItemCategory::Store,
            label: "Data Store".to_string(),
            description: "Holds a database".to_string(),
            icon: ":/icons/item_icons/database.svg".to_string(),
            icon_color: "#cc33ff".to_string(),
            background_color: "#f9e6ff".to_string(),
        };

        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("\"store\"")); // snake_case category
        assert!(json.contains("itemType")); // camelCase keys
        assert!(json.contains("#cc33ff"));
    }
}
