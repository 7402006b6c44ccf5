use serde::Deserialize;
use std::collections::HashSet;

use crate::shared::errors::{NavError, Result};

/// Icon reference for menu entries and navbar actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuIcon {
    Dashboard,
    Work,
    Info,
    ContactMail,
    Home,
    Business,
    Notifications,
    Message,
    Settings,
    Menu,
    Search,
}

impl MenuIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Dashboard => "📊",
            MenuIcon::Work => "💼",
            MenuIcon::Info => "ℹ️",
            MenuIcon::ContactMail => "✉️",
            MenuIcon::Home => "🏠",
            MenuIcon::Business => "🏢",
            MenuIcon::Notifications => "🔔",
            MenuIcon::Message => "💬",
            MenuIcon::Settings => "⚙️",
            MenuIcon::Menu => "☰",
            MenuIcon::Search => "🔍",
        }
    }
}

/// One navigation entry, optionally holding one level of children
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<MenuIcon>,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }

    /// Entries with at least one child can be expanded
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Find the position of a top-level entry by id
pub fn position_of(entries: &[MenuEntry], id: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.id == id)
}

/// Whether `id` names any entry in the tree, top-level or child
pub fn contains_id(entries: &[MenuEntry], id: &str) -> bool {
    entries
        .iter()
        .any(|entry| entry.id == id || entry.children.iter().any(|child| child.id == id))
}

/// Check tree invariants: unique ids, at most one level of nesting
pub fn validate_menu(entries: &[MenuEntry]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(NavError::DuplicateId(entry.id.clone()));
        }
        for child in &entry.children {
            if child.is_expandable() {
                return Err(NavError::NestingTooDeep(child.id.clone()));
            }
            if !seen.insert(child.id.as_str()) {
                return Err(NavError::DuplicateId(child.id.clone()));
            }
        }
    }

    Ok(())
}
