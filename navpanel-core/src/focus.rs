use crate::view::ElementId;

/// Interactive elements inside the panel, in tab order.
///
/// Queried from the view every time a trap decision is made, so it always
/// reflects the panel's current content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusableSet {
    elements: Vec<ElementId>,
}

impl FocusableSet {
    pub fn new(elements: Vec<ElementId>) -> Self {
        Self { elements }
    }

    pub fn first(&self) -> Option<ElementId> {
        self.elements.first().copied()
    }

    pub fn last(&self) -> Option<ElementId> {
        self.elements.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().copied()
    }
}

impl FromIterator<ElementId> for FocusableSet {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Direction of a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

/// Element that must receive focus to keep Tab cycling inside `set`.
///
/// Returns `None` when the native tab order already does the right thing,
/// i.e. unless focus sits on the boundary element being tabbed past.
pub fn wrap_target(
    set: &FocusableSet,
    focused: Option<ElementId>,
    direction: TabDirection,
) -> Option<ElementId> {
    let focused = focused?;
    let (boundary, wrap_to) = match direction {
        TabDirection::Forward => (set.last()?, set.first()?),
        TabDirection::Backward => (set.first()?, set.last()?),
    };

    (focused == boundary).then_some(wrap_to)
}

#[cfg(test)]
mod tests {
    use super::{FocusableSet, TabDirection, wrap_target};
    use crate::view::ElementId;

    fn set() -> FocusableSet {
        (1..=4).map(ElementId).collect()
    }

    #[test]
    fn given_focus_on_last_when_tabbing_forward_then_wraps_to_first() {
        let target =
            wrap_target(&set(), Some(ElementId(4)), TabDirection::Forward);

        assert_eq!(target, Some(ElementId(1)));
    }

    #[test]
    fn given_focus_on_first_when_tabbing_backward_then_wraps_to_last() {
        let target =
            wrap_target(&set(), Some(ElementId(1)), TabDirection::Backward);

        assert_eq!(target, Some(ElementId(4)));
    }

    #[test]
    fn given_focus_in_middle_when_tabbing_then_native_order_applies() {
        for direction in [TabDirection::Forward, TabDirection::Backward] {
            assert_eq!(
                wrap_target(&set(), Some(ElementId(2)), direction),
                None
            );
        }
    }

    #[test]
    fn given_empty_set_or_no_focus_when_tabbing_then_nothing_is_trapped() {
        let empty = FocusableSet::default();

        assert_eq!(
            wrap_target(&empty, Some(ElementId(1)), TabDirection::Forward),
            None
        );
        assert_eq!(wrap_target(&set(), None, TabDirection::Backward), None);
    }
}
