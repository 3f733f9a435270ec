use hashbrown::HashSet;

/// Distinct extensions in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionRegistry {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ExtensionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ext`. Returns `true` if it had not been seen before.
    pub fn insert(&mut self, ext: &str) -> bool {
        if self.seen.contains(ext) {
            return false;
        }
        self.seen.insert(ext.to_owned());
        self.order.push(ext.to_owned());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
