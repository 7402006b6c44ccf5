//! Structured logging module for the navigation shell
//!
//! Provides consistent, contextual logging for menu state transitions.
//! Every helper tags its event with an `operation` field.

use crate::shared::errors::NavError;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ToggleExpand,
    Reorder,
    Drag,
    EditMode,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ToggleExpand => "toggle_expand",
            LogOperation::Reorder => "reorder",
            LogOperation::Drag => "drag",
            LogOperation::EditMode => "edit_mode",
            LogOperation::Config => "config",
        }
    }
}

/// Log an expand/collapse transition
pub fn log_toggle_expand(id: &str, expanded: bool) {
    tracing::debug!(
        operation = LogOperation::ToggleExpand.as_str(),
        entry_id = id,
        expanded = expanded,
        "Toggled menu entry"
    );
}

/// Log a completed move of a top-level entry
pub fn log_reorder(id: &str, from: usize, to: usize) {
    tracing::debug!(
        operation = LogOperation::Reorder.as_str(),
        entry_id = id,
        from_index = from,
        to_index = to,
        "Moved menu entry"
    );
}

/// Log drag start
pub fn log_drag_start(id: &str, index: usize) {
    tracing::debug!(
        operation = LogOperation::Drag.as_str(),
        entry_id = id,
        start_index = index,
        "Drag started"
    );
}

/// Log drag release (drop or cancel)
pub fn log_drag_end(id: &str, start: usize, end: usize, moves: usize, cancelled: bool) {
    tracing::info!(
        operation = LogOperation::Drag.as_str(),
        entry_id = id,
        start_index = start,
        end_index = end,
        hover_moves = moves,
        cancelled = cancelled,
        "Drag released"
    );
}

/// Log edit mode change
pub fn log_edit_mode(enabled: bool) {
    tracing::info!(
        operation = LogOperation::EditMode.as_str(),
        enabled = enabled,
        "Edit mode changed"
    );
}

/// Log a request that was rejected and ignored
pub fn log_rejected(operation: LogOperation, error: &NavError) {
    tracing::debug!(
        operation = operation.as_str(),
        error = %error,
        "Ignored menu request"
    );
}

/// Log configuration load result
pub fn log_config_loaded(entry_count: usize, action_count: usize) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        menu_entries = entry_count,
        navbar_actions = action_count,
        "Shell configuration loaded"
    );
}

/// Log configuration fallback
pub fn log_config_fallback(error: &NavError) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        error = %error,
        "Invalid shell configuration - using built-in defaults"
    );
}
