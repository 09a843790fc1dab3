use eframe::egui::Color32;

/// The four fixed value domains every card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Category {
    Work,
    Virtue,
    Relationship,
    SelfLife,
}

/// Per-category presentation descriptor, resolved at render time.
/// Icon glyphs come from egui's built-in emoji font.
pub struct CategoryStyle {
    /// Fluent message id for the category label
    pub label_key: &'static str,
    pub icon: &'static str,
    pub accent: Color32,
}

const WORK_STYLE: CategoryStyle = CategoryStyle {
    label_key: "category-work",
    icon: "💼",
    accent: Color32::from_rgb(0x59, 0x57, 0x57),
};
const VIRTUE_STYLE: CategoryStyle = CategoryStyle {
    label_key: "category-virtue",
    icon: "✨",
    accent: Color32::from_rgb(0x37, 0xA6, 0xA9),
};
const RELATIONSHIP_STYLE: CategoryStyle = CategoryStyle {
    label_key: "category-relationship",
    icon: "❤",
    accent: Color32::from_rgb(0xF9, 0xC0, 0x4C),
};
const SELF_STYLE: CategoryStyle = CategoryStyle {
    label_key: "category-self",
    icon: "👤",
    accent: Color32::from_rgb(0x2A, 0x5D, 0xAC),
};

impl Category {
    /// Order used by the filter dropdown and the export legend.
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Relationship,
        Category::Virtue,
        Category::SelfLife,
    ];

    pub fn style(self) -> &'static CategoryStyle {
        match self {
            Category::Work => &WORK_STYLE,
            Category::Virtue => &VIRTUE_STYLE,
            Category::Relationship => &RELATIONSHIP_STYLE,
            Category::SelfLife => &SELF_STYLE,
        }
    }

    /// Localized display label.
    pub fn label(self) -> String {
        crate::localization::translate(self.style().label_key)
    }

    /// Accent color mixed towards the page background, used as the fill of
    /// selected grid cards.
    pub fn tint(self) -> Color32 {
        let a = self.style().accent;
        let mix = |c: u8| -> u8 { ((c as u16 * 25 + 255 * 230) / 255) as u8 };
        Color32::from_rgb(mix(a.r()), mix(a.g()), mix(a.b()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn style_lookup_is_total() {
        for cat in Category::iter() {
            let style = cat.style();
            assert!(!style.label_key.is_empty());
            assert!(!style.icon.is_empty());
        }
    }

    #[test]
    fn all_lists_each_category_once() {
        assert_eq!(Category::ALL.len(), Category::iter().count());
        for cat in Category::iter() {
            assert_eq!(Category::ALL.iter().filter(|c| **c == cat).count(), 1);
        }
    }
}
