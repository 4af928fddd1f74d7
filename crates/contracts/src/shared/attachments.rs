/// Identity of a picked file: the browser gives no stable id, so two picks of
/// the same file are recognised by name, size and modification time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentKey {
    pub name: String,
    pub size: u64,
    pub last_modified: i64,
}

impl AttachmentKey {
    /// "{name} ({kb:.1} KB)"
    pub fn label(&self) -> String {
        format!("{} ({:.1} KB)", self.name, self.size as f64 / 1024.0)
    }
}

/// Ordered list of attachments without duplicates.
///
/// Generic over the file handle so the browser `File` stays out of this crate.
#[derive(Debug, Clone)]
pub struct AttachmentSet<F> {
    entries: Vec<(AttachmentKey, F)>,
}

impl<F> Default for AttachmentSet<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> AttachmentSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `file` unless an entry with the same key exists. Returns whether it was added.
    pub fn add(&mut self, key: AttachmentKey, file: F) -> bool {
        if self.entries.iter().any(|(k, _)| *k == key) {
            return false;
        }
        self.entries.push((key, file));
        true
    }

    /// Appends every file of a multi-select, returns how many were new.
    pub fn extend<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = (AttachmentKey, F)>,
    {
        files
            .into_iter()
            .map(|(key, file)| self.add(key, file))
            .filter(|added| *added)
            .count()
    }

    pub fn remove(&mut self, index: usize) -> Option<(AttachmentKey, F)> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AttachmentKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.entries.iter().map(|(_, f)| f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, size: u64, last_modified: i64) -> AttachmentKey {
        AttachmentKey {
            name: name.to_string(),
            size,
            last_modified,
        }
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut set = AttachmentSet::new();
        assert!(set.add(key("f931.pdf", 2048, 1), "a"));
        assert!(!set.add(key("f931.pdf", 2048, 1), "b"));
        // same name, different content
        assert!(set.add(key("f931.pdf", 4096, 2), "c"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.files().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_extend_counts_new_files() {
        let mut set = AttachmentSet::new();
        set.add(key("a.pdf", 1, 1), 1);
        let added = set.extend(vec![(key("a.pdf", 1, 1), 2), (key("b.pdf", 1, 1), 3)]);
        assert_eq!(added, 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_by_index() {
        let mut set = AttachmentSet::new();
        set.add(key("a.pdf", 1, 1), 1);
        set.add(key("b.pdf", 1, 1), 2);
        assert_eq!(set.remove(0).map(|(k, _)| k.name), Some("a.pdf".to_string()));
        assert!(set.remove(5).is_none());
        assert_eq!(set.keys().map(|k| k.name.as_str()).collect::<Vec<_>>(), vec!["b.pdf"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(key("balance.xlsx", 1536, 0).label(), "balance.xlsx (1.5 KB)");
    }
}
