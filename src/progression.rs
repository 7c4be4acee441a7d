//! Character catalog and score-driven unlocks
//!
//! The catalog outlives individual runs. Unlocks are evaluated per entry, so
//! thresholds in any order (or duplicated) are handled without assumptions.

/// A cosmetic flyer variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    /// Run score needed to unlock
    pub threshold: u64,
    pub unlocked: bool,
    /// 0xRRGGBB
    pub color: u32,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, threshold: u64, color: u32) -> Self {
        Self {
            name: name.into(),
            threshold,
            unlocked: false,
            color,
        }
    }

    /// Caption for the selection grid
    pub fn label(&self) -> String {
        if self.unlocked {
            "Click to Select".to_string()
        } else {
            format!("Score {} to unlock", self.threshold)
        }
    }
}

/// Ordered collection of unlockable variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    selected: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry::new("Red Bird", 0, 0xFF0000),
            CatalogEntry::new("Blue Bird", 10, 0x0000FF),
            CatalogEntry::new("Golden Bird", 20, 0xFFD700),
            CatalogEntry::new("Robot Bird", 30, 0x808080),
            CatalogEntry::new("Ninja Bird", 40, 0x000000),
            CatalogEntry::new("Rainbow Bird", 50, 0xFF69B4),
            CatalogEntry::new("Ghost Bird", 60, 0x8A2BE2),
            CatalogEntry::new("Dragon Bird", 70, 0x228B22),
            CatalogEntry::new("Phoenix Bird", 80, 0xFFA500),
            CatalogEntry::new("Space Bird", 100, 0x4169E1),
        ])
    }
}

impl Catalog {
    /// Build a catalog; the first entry always starts unlocked
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        for entry in entries.iter_mut() {
            entry.unlocked = false;
        }
        if let Some(first) = entries.first_mut() {
            first.unlocked = true;
        }
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Colour of the selected variant (red if the catalog is empty)
    pub fn selected_color(&self) -> u32 {
        self.get(self.selected).map(|e| e.color).unwrap_or(0xFF0000)
    }

    /// Unlock every locked entry whose threshold `score` meets.
    ///
    /// Returns the indices that flipped on this call, in catalog order.
    pub fn check_unlocks(&mut self, score: u64) -> Vec<usize> {
        let mut newly = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if !entry.unlocked && score >= entry.threshold {
                entry.unlocked = true;
                log::info!("Unlocked {} at score {}", entry.name, score);
                newly.push(index);
            }
        }
        newly
    }

    /// Select an unlocked variant. Locked or out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) if entry.unlocked => {
                self.selected = index;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.entries()[0].unlocked);
        assert!(catalog.entries()[1..].iter().all(|e| !e.unlocked));
        assert_eq!(catalog.selected_color(), 0xFF0000);
    }

    #[test]
    fn test_unlock_exactly_at_threshold() {
        let mut catalog = Catalog::default();
        for score in 1..10 {
            assert!(catalog.check_unlocks(score).is_empty());
        }
        assert_eq!(catalog.check_unlocks(10), vec![1]);
        assert!(catalog.entries()[1].unlocked);
        // Never re-fires
        assert!(catalog.check_unlocks(10).is_empty());
    }

    #[test]
    fn test_multiple_unlocks_in_one_call() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.check_unlocks(35), vec![1, 2, 3]);
    }

    #[test]
    fn test_unordered_and_duplicate_thresholds() {
        let mut catalog = Catalog::new(vec![
            CatalogEntry::new("a", 0, 0),
            CatalogEntry::new("b", 5, 0),
            CatalogEntry::new("c", 2, 0),
            CatalogEntry::new("d", 2, 0),
        ]);
        assert_eq!(catalog.check_unlocks(2), vec![2, 3]);
        assert_eq!(catalog.check_unlocks(5), vec![1]);
    }

    #[test]
    fn test_select_requires_unlocked() {
        let mut catalog = Catalog::default();
        assert!(!catalog.select(1));
        assert!(!catalog.select(99));
        assert_eq!(catalog.selected(), 0);

        catalog.check_unlocks(10);
        assert!(catalog.select(1));
        assert_eq!(catalog.selected_color(), 0x0000FF);
    }

    #[test]
    fn test_labels() {
        let catalog = Catalog::default();
        assert_eq!(catalog.entries()[0].label(), "Click to Select");
        assert_eq!(catalog.entries()[9].label(), "Score 100 to unlock");
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.check_unlocks(1000).is_empty());
        assert!(!catalog.select(0));
    }

    proptest! {
        #[test]
        fn prop_unlocks_are_monotonic(scores in proptest::collection::vec(0u64..120, 1..40)) {
            let mut catalog = Catalog::default();
            for score in scores {
                let before: Vec<bool> = catalog.entries().iter().map(|e| e.unlocked).collect();
                let flipped = catalog.check_unlocks(score);
                for (i, entry) in catalog.entries().iter().enumerate() {
                    // Never re-locks
                    prop_assert!(!before[i] || entry.unlocked);
                    if flipped.contains(&i) {
                        prop_assert!(!before[i]);
                        prop_assert!(score >= entry.threshold);
                    }
                }
            }
        }
    }
}
