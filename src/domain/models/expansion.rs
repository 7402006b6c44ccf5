use std::collections::HashMap;

/// Visibility of an entry's children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }
}

/// Per-id expand/collapse view state, kept apart from the menu tree.
/// Ids absent from the map are collapsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    entries: HashMap<String, Expansion>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Expansion {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.get(id).is_expanded()
    }

    /// Flip one id, returning its new state
    pub fn toggle(&mut self, id: &str) -> Expansion {
        let next = self.get(id).toggled();
        self.entries.insert(id.to_string(), next);
        next
    }

    /// Number of ids ever toggled
    pub fn tracked(&self) -> usize {
        self.entries.len()
    }
}
