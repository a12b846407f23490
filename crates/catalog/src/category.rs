use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use serde::{Serialize, Serializer};

use warehouse_core::{DomainError, DomainResult, ValueObject};

/// A canonicalized label used to group products.
///
/// Equality, ordering and hashing use the normalized name, so grouping works
/// by value. Categories resolved through the same [`CategoryRegistry`] also
/// share one allocation; see [`Category::same_instance`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity comparison: true when both handles point at the instance the
    /// registry created.
    pub fn same_instance(a: &Category, b: &Category) -> bool {
        Arc::ptr_eq(&a.name, &b.name)
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Normalize a category name: first character upper-cased, the rest
/// lower-cased. Returns `None` for the empty string.
pub fn normalize_category_name(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    let mut normalized: String = first.to_uppercase().collect();
    normalized.push_str(&chars.as_str().to_lowercase());
    Some(normalized)
}

/// Canonicalizing factory for [`Category`] values.
///
/// For every normalized name the registry hands out exactly one instance.
/// Entries are never removed. Lookup-or-insert runs under a single lock so
/// concurrent callers cannot create two instances for the same name.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: Mutex<HashMap<String, Category>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, created on first use and kept for the process
    /// lifetime. Prefer an owned registry where test isolation matters.
    pub fn global() -> &'static CategoryRegistry {
        static GLOBAL: OnceLock<CategoryRegistry> = OnceLock::new();
        GLOBAL.get_or_init(CategoryRegistry::new)
    }

    /// Return the category for `name`, creating it on first request.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when the name is absent or
    /// empty.
    pub fn resolve<'a>(&self, name: impl Into<Option<&'a str>>) -> DomainResult<Category> {
        let name = name
            .into()
            .ok_or_else(|| DomainError::invalid_argument("category name can't be absent"))?;
        let normalized = normalize_category_name(name)
            .ok_or_else(|| DomainError::invalid_argument("category name can't be empty"))?;

        let mut categories = self.lock();
        if let Some(existing) = categories.get(&normalized) {
            return Ok(existing.clone());
        }

        tracing::debug!(category = %normalized, "registering category");
        let category = Category {
            name: Arc::from(normalized.as_str()),
        };
        categories.insert(normalized, category.clone());
        Ok(category)
    }

    /// Look up a category without registering it.
    pub fn get(&self, name: &str) -> Option<Category> {
        let normalized = normalize_category_name(name)?;
        self.lock().get(&normalized).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Registered category names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    // The map is only touched by single insert/get calls, so a poisoned lock
    // still guards a consistent map.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Category>> {
        self.categories.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
