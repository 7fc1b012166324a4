//! Category taxonomy
//!
//! The facet values are compiled in and owned by the filter configuration;
//! they are never inferred from the dataset.

use serde::Serialize;

use crate::ids::CategoryId;

/// A facet value with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Built-in categories as `(id, display name)`, wildcard first.
const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Projects"),
    ("web", "Web Development"),
    ("mobile", "Mobile Apps"),
    ("backend", "Backend"),
    ("desktop", "Desktop Apps"),
];

/// Ordered, fixed set of categories that always contains the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    categories: Vec<Category>,
}

impl CategoryTaxonomy {
    /// The taxonomy shipped with the application.
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES
                .iter()
                .map(|(id, name)| Category::new(*id, *name))
                .collect(),
        }
    }

    pub fn wildcard(&self) -> &Category {
        // The builtin table lists the wildcard first.
        self.categories
            .iter()
            .find(|c| c.id.is_wildcard())
            .unwrap_or(&self.categories[0])
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}
