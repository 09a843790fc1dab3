use std::collections::HashSet;

use crate::deck::CardId;
use crate::model::{DropTarget, Side};

/// The user-curated result of the exercise: an ordered, duplicate-free
/// sequence of card ids. A parallel set gives O(1) membership checks for the
/// grid highlight.
#[derive(Debug, Clone, Default)]
pub struct SelectionOrder {
    order: Vec<CardId>,
    members: HashSet<CardId>,
}

impl SelectionOrder {
    pub fn contains(&self, id: CardId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    /// Removes `id` if selected (keeping the rest in order), otherwise
    /// appends it to the end.
    pub fn toggle(&mut self, id: CardId) {
        if self.members.remove(&id) {
            self.order.retain(|x| *x != id);
        } else {
            self.members.insert(id);
            self.order.push(id);
        }
    }

    pub fn remove(&mut self, id: CardId) {
        if self.members.remove(&id) {
            self.order.retain(|x| *x != id);
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Moves `dragged` next to `target`: removed from its current position
    /// and re-inserted immediately before (Left) or after (Right) the
    /// target's new index. A no-op when either id is missing or both are the
    /// same card; membership never changes.
    pub fn move_relative(&mut self, dragged: CardId, target: &DropTarget) -> bool {
        if dragged == target.id {
            return false;
        }
        let Some(from) = self.order.iter().position(|x| *x == dragged) else {
            return false;
        };
        self.order.remove(from);
        let Some(anchor) = self.order.iter().position(|x| *x == target.id) else {
            // Target vanished; restore and bail.
            self.order.insert(from, dragged);
            return false;
        };
        let at = match target.side {
            Side::Left => anchor,
            Side::Right => anchor + 1,
        };
        self.order.insert(at, dragged);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(ids: &[CardId]) -> SelectionOrder {
        let mut s = SelectionOrder::default();
        for &id in ids {
            s.toggle(id);
        }
        s
    }

    fn order(s: &SelectionOrder) -> Vec<CardId> {
        s.iter().collect()
    }

    #[test]
    fn toggle_appends_in_click_order() {
        let s = selected(&[5, 12, 40]);
        assert_eq!(order(&s), vec![5, 12, 40]);
        assert!(s.contains(12));
        assert!(!s.contains(13));
    }

    #[test]
    fn toggle_again_removes_keeping_order() {
        let mut s = selected(&[5, 12, 40]);
        s.toggle(12);
        assert_eq!(order(&s), vec![5, 40]);
        assert!(!s.contains(12));
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut s = selected(&[1, 2, 3]);
        let before = order(&s);
        s.toggle(9);
        s.toggle(9);
        assert_eq!(order(&s), before);
        assert!(!s.contains(9));
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut s = selected(&[4, 8]);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(4));
    }

    #[test]
    fn move_left_of_first() {
        // [A,B,C], drag C onto A side=Left -> [C,A,B]
        let mut s = selected(&[1, 2, 3]);
        let moved = s.move_relative(3, &DropTarget { id: 1, side: Side::Left });
        assert!(moved);
        assert_eq!(order(&s), vec![3, 1, 2]);
    }

    #[test]
    fn move_right_of_first() {
        // [A,B,C], drag C onto A side=Right -> [A,C,B]
        let mut s = selected(&[1, 2, 3]);
        let moved = s.move_relative(3, &DropTarget { id: 1, side: Side::Right });
        assert!(moved);
        assert_eq!(order(&s), vec![1, 3, 2]);
    }

    #[test]
    fn move_preserves_membership() {
        let mut s = selected(&[10, 20, 30, 40]);
        s.move_relative(10, &DropTarget { id: 40, side: Side::Right });
        let mut ids = order(&s);
        ids.sort_unstable();
        assert_eq!(ids, vec![10, 20, 30, 40]);
        assert_eq!(order(&s), vec![20, 30, 40, 10]);
    }

    #[test]
    fn move_onto_self_is_noop() {
        let mut s = selected(&[1, 2, 3]);
        let moved = s.move_relative(2, &DropTarget { id: 2, side: Side::Left });
        assert!(!moved);
        assert_eq!(order(&s), vec![1, 2, 3]);
    }

    #[test]
    fn move_of_unselected_card_is_noop() {
        let mut s = selected(&[1, 2, 3]);
        let moved = s.move_relative(99, &DropTarget { id: 2, side: Side::Left });
        assert!(!moved);
        assert_eq!(order(&s), vec![1, 2, 3]);
    }

    #[test]
    fn move_with_vanished_target_restores_order() {
        let mut s = selected(&[1, 2, 3]);
        let moved = s.move_relative(1, &DropTarget { id: 99, side: Side::Right });
        assert!(!moved);
        assert_eq!(order(&s), vec![1, 2, 3]);
    }
}
