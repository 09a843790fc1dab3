use std::collections::HashSet;

use crate::types::Category;

/// The set of categories currently visible in the grid. Empty is valid and
/// renders the empty state.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    visible: HashSet<Category>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            visible: Category::ALL.into_iter().collect(),
        }
    }
}

impl CategoryFilter {
    pub fn shows(&self, cat: Category) -> bool {
        self.visible.contains(&cat)
    }

    /// Flips membership of `cat` in the visible set.
    pub fn toggle(&mut self, cat: Category) {
        if !self.visible.remove(&cat) {
            self.visible.insert(cat);
        }
    }

    pub fn count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn shows_all(&self) -> bool {
        self.visible.len() == Category::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_all_visible() {
        let f = CategoryFilter::default();
        assert!(f.shows_all());
        for cat in Category::ALL {
            assert!(f.shows(cat));
        }
    }

    #[test]
    fn toggle_flips_membership() {
        let mut f = CategoryFilter::default();
        f.toggle(Category::Work);
        assert!(!f.shows(Category::Work));
        assert_eq!(f.count(), 3);
        f.toggle(Category::Work);
        assert!(f.shows(Category::Work));
        assert!(f.shows_all());
    }

    #[test]
    fn empty_set_is_reachable() {
        let mut f = CategoryFilter::default();
        for cat in Category::ALL {
            f.toggle(cat);
        }
        assert!(f.is_empty());
        assert_eq!(f.count(), 0);
    }
}
