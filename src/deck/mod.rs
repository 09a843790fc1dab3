// Deck model: the fixed set of 70 cards plus a separately shuffled display
// order. Card ids are assigned once at generation and never change; shuffling
// only permutes the display order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Category;

mod texts;

pub type CardId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub text: &'static str,
    pub category: Category,
}

pub struct Deck {
    /// All cards, indexed by `id - 1`.
    cards: Vec<Card>,
    /// Current display order of the grid; a permutation of all ids.
    display: Vec<CardId>,
}

impl Deck {
    /// Builds the full deck from the static category lists, concatenated in
    /// the fixed generation order, with sequential ids starting at 1.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(70);
        let mut push = |list: &[&'static str], category: Category| {
            for &text in list {
                cards.push(Card {
                    id: cards.len() as CardId + 1,
                    text,
                    category,
                });
            }
        };
        push(&texts::WORK_TEXTS, Category::Work);
        push(&texts::SELF_TEXTS, Category::SelfLife);
        push(&texts::VIRTUE_TEXTS, Category::Virtue);
        push(&texts::RELATIONSHIP_TEXTS, Category::Relationship);

        let display = cards.iter().map(|c| c.id).collect();
        Self { cards, display }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Stable id -> card lookup.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.checked_sub(1)? as usize)
    }

    /// Re-orders the display order uniformly at random (Fisher-Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.display.shuffle(rng);
    }

    /// Cards in current display order.
    pub fn display_order(&self) -> impl Iterator<Item = &Card> + '_ {
        self.display.iter().filter_map(move |&id| self.card(id))
    }

    /// Cards visible under `filter`, preserving the current display order.
    pub fn visible<'a>(
        &'a self,
        filter: &'a crate::model::CategoryFilter,
    ) -> impl Iterator<Item = &'a Card> + 'a {
        self.display_order().filter(|c| filter.shows(c.category))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryFilter;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn deck_has_seventy_cards_with_sequential_ids() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 70);
        for (i, card) in deck.cards.iter().enumerate() {
            assert_eq!(card.id, i as CardId + 1);
            assert_eq!(deck.card(card.id), Some(card));
        }
        assert!(deck.card(0).is_none());
        assert!(deck.card(71).is_none());
    }

    #[test]
    fn category_counts_match_source_lists() {
        let deck = Deck::new();
        let count = |cat| deck.cards.iter().filter(|c| c.category == cat).count();
        assert_eq!(count(Category::Work), 30);
        assert_eq!(count(Category::SelfLife), 19);
        assert_eq!(count(Category::Virtue), 11);
        assert_eq!(count(Category::Relationship), 10);
    }

    #[test]
    fn shuffle_is_a_permutation_and_keeps_ids_stable() {
        let mut deck = Deck::new();
        let before: Vec<Card> = deck.cards.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        // id -> card mapping untouched
        assert_eq!(deck.cards, before);

        // display order is a permutation of all ids
        let mut ids: Vec<CardId> = deck.display.clone();
        ids.sort_unstable();
        let expected: Vec<CardId> = (1..=70).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn repeated_shuffles_move_every_position() {
        // Weak uniformity check: over many shuffles the first display slot
        // should see many distinct ids.
        let mut deck = Deck::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            deck.shuffle(&mut rng);
            seen.insert(deck.display[0]);
        }
        assert!(seen.len() > 40, "first slot saw only {} ids", seen.len());
    }

    #[test]
    fn virtue_filter_shows_exactly_the_virtue_cards() {
        let mut deck = Deck::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        deck.shuffle(&mut rng);

        let mut filter = CategoryFilter::default();
        for cat in Category::ALL {
            if cat != Category::Virtue && filter.shows(cat) {
                filter.toggle(cat);
            }
        }

        let visible: Vec<&Card> = deck.visible(&filter).collect();
        assert_eq!(visible.len(), 11);
        let mut ids: Vec<CardId> = visible.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 11);
        assert!(visible.iter().all(|c| c.category == Category::Virtue));
    }

    #[test]
    fn visible_preserves_display_order() {
        let mut deck = Deck::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        deck.shuffle(&mut rng);

        let filter = CategoryFilter::default(); // everything visible
        let visible: Vec<CardId> = deck.visible(&filter).map(|c| c.id).collect();
        assert_eq!(visible, deck.display);
    }
}
