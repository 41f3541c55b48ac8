use std::collections::BTreeSet;

use crate::view::PanelView;

/// Tooltip affordance for navigation entries of a collapsed desktop panel.
///
/// Tracks which entries currently carry a tooltip so they can all be
/// cleared when the affordance goes away.
#[derive(Debug, Default)]
pub(crate) struct HoverAffordance {
    active: bool,
    titled: BTreeSet<usize>,
}

impl HoverAffordance {
    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn deactivate<V: PanelView>(&mut self, view: &mut V) {
        self.active = false;
        self.clear(view);
    }

    pub(crate) fn show<V: PanelView>(
        &mut self,
        view: &mut V,
        index: usize,
        label: &str,
    ) {
        if !self.active {
            return;
        }
        view.set_entry_title(index, Some(label));
        self.titled.insert(index);
    }

    pub(crate) fn clear<V: PanelView>(&mut self, view: &mut V) {
        for index in std::mem::take(&mut self.titled) {
            view.set_entry_title(index, None);
        }
    }
}
