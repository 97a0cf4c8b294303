//! Item type registry for plugin discovery
//!
//! The host application discovers project items through this registry: it
//! maps item type strings to metadata (for the palette) and to factories
//! (for constructing executable counterparts from project configuration).
//!
//! # Usage
//!
//! ```ignore
//! use item_engine::{ItemRegistry, ItemFactory};
//!
//! let mut registry = ItemRegistry::new();
//! registry.register(Arc::new(CombinerFactory::new(backend)));
//!
//! let executable = registry.make_executable("Combiner", &context)?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::{DescriptorFn, ItemCategory, ItemMetadata};
use crate::error::{ItemEngineError, Result};
use crate::executable::ExecutableItem;
use crate::project::ItemContext;

/// Factory for one item type
///
/// A factory knows its type's metadata and how to build the executable
/// counterpart from an [`ItemContext`].
pub trait ItemFactory: Send + Sync {
    /// Metadata for the item type this factory builds
    fn metadata(&self) -> ItemMetadata;

    /// Build the executable counterpart for one item instance
    fn make_executable(&self, context: &ItemContext) -> Result<Arc<dyn ExecutableItem>>;
}

/// A registration entry combining metadata with an optional factory
struct RegistryEntry {
    metadata: ItemMetadata,
    factory: Option<Arc<dyn ItemFactory>>,
}

/// Registry of item types with their metadata and factories
///
/// # Composability
///
/// Registries can be composed by merging:
/// ```ignore
/// let mut registry = ItemRegistry::with_builtin_metadata();
/// registry.merge(plugin_registry); // Add externally loaded items
/// ```
pub struct ItemRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl ItemRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the metadata of every item
    /// descriptor submitted via `inventory`
    ///
    /// Factories still need to be registered explicitly, since they may
    /// carry injected collaborators (e.g. a merge backend).
    pub fn with_builtin_metadata() -> Self {
        let mut registry = Self::new();
        for descriptor in inventory::iter::<DescriptorFn> {
            registry.register_metadata((descriptor.0)());
        }
        registry
    }

    /// Register a factory, taking its metadata from the factory itself
    pub fn register(&mut self, factory: Arc<dyn ItemFactory>) {
        let metadata = factory.metadata();
        self.entries.insert(
            metadata.item_type.clone(),
            RegistryEntry {
                metadata,
                factory: Some(factory),
            },
        );
    }

    /// Register an item type with metadata only (no factory)
    ///
    /// Used for metadata-only registrations (e.g. palette listing).
    pub fn register_metadata(&mut self, metadata: ItemMetadata) {
        self.entries.insert(
            metadata.item_type.clone(),
            RegistryEntry {
                metadata,
                factory: None,
            },
        );
    }

    /// Get metadata for an item type
    pub fn get_metadata(&self, item_type: &str) -> Option<&ItemMetadata> {
        self.entries.get(item_type).map(|e| &e.metadata)
    }

    /// Get all registered metadata
    pub fn all_metadata(&self) -> Vec<&ItemMetadata> {
        self.entries.values().map(|e| &e.metadata).collect()
    }

    /// Get metadata grouped by category
    pub fn metadata_by_category(&self) -> HashMap<ItemCategory, Vec<&ItemMetadata>> {
        let mut grouped: HashMap<ItemCategory, Vec<&ItemMetadata>> = HashMap::new();
        for entry in self.entries.values() {
            grouped
                .entry(entry.metadata.category)
                .or_default()
                .push(&entry.metadata);
        }
        grouped
    }

    /// Check if an item type is registered
    pub fn has_item_type(&self, item_type: &str) -> bool {
        self.entries.contains_key(item_type)
    }

    /// List all registered item type strings
    pub fn item_types(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// Build the executable counterpart for an item instance
    ///
    /// Fails if the type is unknown or registered metadata-only.
    pub fn make_executable(
        &self,
        item_type: &str,
        context: &ItemContext,
    ) -> Result<Arc<dyn ExecutableItem>> {
        let entry = self
            .entries
            .get(item_type)
            .ok_or_else(|| ItemEngineError::UnknownItemType(item_type.to_string()))?;
        let factory = entry
            .factory
            .as_ref()
            .ok_or_else(|| ItemEngineError::NoFactory(item_type.to_string()))?;
        factory.make_executable(context)
    }

    /// Merge another registry into this one
    ///
    /// Entries from `other` override entries in `self` if they share the
    /// same item type.
    pub fn merge(&mut self, other: ItemRegistry) {
        self.entries.extend(other.entries);
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
