//! Class hierarchy data model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single known class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub class_name: String,
    /// Header path as it appears inside `#include <...>`.
    pub include_path: String,
    /// Direct subclasses, in declaration order.
    #[serde(default)]
    pub subclasses: Vec<String>,
}

impl ClassInfo {
    pub fn new(class_name: impl Into<String>, include_path: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            include_path: include_path.into(),
            subclasses: Vec::new(),
        }
    }

    pub fn with_subclasses<I, S>(mut self, subclasses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subclasses = subclasses.into_iter().map(Into::into).collect();
        self
    }
}

/// All known classes keyed by name.
///
/// Serializes as the plain JSON object `{ "<class_name>": ClassInfo, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassHierarchy {
    classes: BTreeMap<String, ClassInfo>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class_name: &str) -> Option<&ClassInfo> {
        self.classes.get(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Insert a class, replacing any previous entry with the same name.
    pub fn insert(&mut self, info: ClassInfo) -> Option<ClassInfo> {
        self.classes.insert(info.class_name.clone(), info)
    }
}

impl FromIterator<ClassInfo> for ClassHierarchy {
    fn from_iter<I: IntoIterator<Item = ClassInfo>>(iter: I) -> Self {
        let mut hierarchy = Self::new();
        for info in iter {
            hierarchy.insert(info);
        }
        hierarchy
    }
}
