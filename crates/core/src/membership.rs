//! Collection membership editing.

use crate::types::ProductId;

/// Toggle `id` in the selection: remove it when present, append it otherwise.
pub fn toggle(selected: &mut Vec<ProductId>, id: ProductId) {
    if let Some(pos) = selected.iter().position(|&s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

/// Requests needed to turn one membership set into another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembershipDiff {
    /// In `original` but not selected, in original order.
    pub to_remove: Vec<ProductId>,
    /// Selected but not in `original`, in selection order.
    pub to_add: Vec<ProductId>,
}

impl MembershipDiff {
    #[must_use]
    pub fn between(original: &[ProductId], selected: &[ProductId]) -> Self {
        let to_remove = original
            .iter()
            .filter(|id| !selected.contains(id))
            .copied()
            .collect();

        let mut to_add: Vec<ProductId> = Vec::new();
        for id in selected {
            if !original.contains(id) && !to_add.contains(id) {
                to_add.push(*id);
            }
        }

        Self { to_remove, to_add }
    }

    /// No request is needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }
}
