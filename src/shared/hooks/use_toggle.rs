use dioxus::prelude::*;

/// Open/closed flag for menus and drawers
#[derive(Clone, Copy, PartialEq)]
pub struct Toggle {
    pub open: Signal<bool>,
}

impl Toggle {
    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    pub fn toggle(&mut self) {
        let next = !self.is_open();
        self.open.set(next);
    }

    pub fn close(&mut self) {
        // skip the write when already closed to avoid a re-render
        if self.is_open() {
            self.open.set(false);
        }
    }
}

/// Hook to manage one independent open/closed flag, closed at mount
pub fn use_toggle() -> Toggle {
    let open = use_signal(|| false);
    Toggle { open }
}
