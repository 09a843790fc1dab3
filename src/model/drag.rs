use crate::deck::CardId;
use crate::model::SelectionOrder;

/// Which side of the hover target the dragged tile would be inserted on,
/// decided by the pointer x position relative to the target's horizontal
/// midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub id: CardId,
    pub side: Side,
}

/// Reorder gesture state machine over the selection order. At most one drag
/// session exists at a time; a fresh drag-start replaces the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: CardId,
        target: Option<DropTarget>,
    },
}

impl DragState {
    /// Starts a session for `id`. Last drag-start wins.
    pub fn begin(&mut self, id: CardId) {
        *self = DragState::Dragging {
            dragged: id,
            target: None,
        };
    }

    /// Records the hovered tile and insertion side. Ignored when idle and for
    /// self-targets.
    pub fn hover(&mut self, id: CardId, side: Side) {
        if let DragState::Dragging { dragged, target } = self {
            if *dragged != id {
                *target = Some(DropTarget { id, side });
            }
        }
    }

    /// Clears the hover target (pointer left the tiles onto empty bar space).
    pub fn clear_target(&mut self) {
        if let DragState::Dragging { target, .. } = self {
            *target = None;
        }
    }

    pub fn dragged(&self) -> Option<CardId> {
        match self {
            DragState::Dragging { dragged, .. } => Some(*dragged),
            DragState::Idle => None,
        }
    }

    pub fn target(&self) -> Option<DropTarget> {
        match self {
            DragState::Dragging { target, .. } => *target,
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Finishes the session: applies the reorder when a valid target exists,
    /// otherwise drops the gesture silently. Always returns to `Idle`.
    pub fn drop_onto(&mut self, selection: &mut SelectionOrder) -> bool {
        let moved = match *self {
            DragState::Dragging {
                dragged,
                target: Some(target),
            } => selection.move_relative(dragged, &target),
            _ => false,
        };
        *self = DragState::Idle;
        moved
    }

    /// Abandons the session without touching the selection.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(ids: &[CardId]) -> SelectionOrder {
        let mut s = SelectionOrder::default();
        for &id in ids {
            s.toggle(id);
        }
        s
    }

    #[test]
    fn begin_then_hover_sets_target() {
        let mut d = DragState::default();
        assert!(!d.is_dragging());
        d.begin(3);
        assert_eq!(d.dragged(), Some(3));
        assert_eq!(d.target(), None);
        d.hover(1, Side::Left);
        assert_eq!(d.target(), Some(DropTarget { id: 1, side: Side::Left }));
    }

    #[test]
    fn self_hover_is_ignored() {
        let mut d = DragState::default();
        d.begin(3);
        d.hover(1, Side::Right);
        d.hover(3, Side::Left);
        // keeps the previous target instead of targeting itself
        assert_eq!(d.target(), Some(DropTarget { id: 1, side: Side::Right }));
    }

    #[test]
    fn hover_while_idle_does_nothing() {
        let mut d = DragState::default();
        d.hover(1, Side::Left);
        assert_eq!(d, DragState::Idle);
    }

    #[test]
    fn restart_replaces_session() {
        let mut d = DragState::default();
        d.begin(3);
        d.hover(1, Side::Left);
        d.begin(2);
        assert_eq!(d.dragged(), Some(2));
        assert_eq!(d.target(), None);
    }

    #[test]
    fn drop_with_target_reorders_and_resets() {
        let mut s = selection(&[1, 2, 3]);
        let mut d = DragState::default();
        d.begin(3);
        d.hover(1, Side::Left);
        assert!(d.drop_onto(&mut s));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(d, DragState::Idle);
    }

    #[test]
    fn drop_without_target_is_noop() {
        let mut s = selection(&[1, 2, 3]);
        let mut d = DragState::default();
        d.begin(3);
        assert!(!d.drop_onto(&mut s));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(d, DragState::Idle);
    }

    #[test]
    fn cleared_target_makes_drop_a_noop() {
        let mut s = selection(&[1, 2, 3]);
        let mut d = DragState::default();
        d.begin(3);
        d.hover(1, Side::Left);
        d.clear_target();
        assert!(!d.drop_onto(&mut s));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn cancel_abandons_without_reorder() {
        let mut s = selection(&[1, 2, 3]);
        let mut d = DragState::default();
        d.begin(2);
        d.hover(3, Side::Right);
        d.cancel();
        assert_eq!(d, DragState::Idle);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
