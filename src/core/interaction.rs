//! Transient UI state for the interactive sections.
//!
//! Each type is owned by exactly one component instance and mutated only by
//! user events or timer ticks. Nothing here is shared between sections.

use std::collections::HashSet;

use crate::core::content::ChatMessage;

/// Ways the detail overlay can be interacted with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    BackdropClick,
    /// Click inside the dialog body; never reaches the backdrop
    BodyClick,
    CloseButton,
    EscapeKey,
}

/// "No selection" or exactly one selected item id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection<Id> {
    selected: Option<Id>,
}

impl<Id: Copy + PartialEq> Selection<Id> {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Select `id`, replacing any previous selection
    pub fn open(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected item, if the id still resolves in `items`
    pub fn resolve<'a, T>(&self, items: &'a [T], id_of: impl Fn(&T) -> Id) -> Option<&'a T> {
        let selected = self.selected?;
        items.iter().find(|item| id_of(item) == selected)
    }

    /// Apply an overlay event; returns whether the selection was cleared
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::BodyClick => false,
            ModalEvent::BackdropClick | ModalEvent::CloseButton | ModalEvent::EscapeKey => {
                let was_open = self.is_open();
                self.close();
                was_open
            }
        }
    }
}

impl<Id: Copy + PartialEq> Default for Selection<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accordion with at most one open entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion<Id> {
    open: Option<Id>,
}

impl<Id: Copy + PartialEq> Accordion<Id> {
    pub fn new(initial: Option<Id>) -> Self {
        Self { open: initial }
    }

    /// Open `id`, or close it if it is already the open entry
    pub fn toggle(&mut self, id: Id) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn is_open(&self, id: Id) -> bool {
        self.open == Some(id)
    }

    pub fn open_id(&self) -> Option<Id> {
        self.open
    }
}

/// Messages of the simulated chat shown so far
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatFeed {
    shown: Vec<ChatMessage>,
    seen: HashSet<u32>,
}

impl ChatFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` unless one with the same id is already shown
    pub fn push(&mut self, message: ChatMessage) -> bool {
        if !self.seen.insert(message.id) {
            return false;
        }
        self.shown.push(message);
        true
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.shown
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn is_complete(&self, total: usize) -> bool {
        self.shown.len() >= total
    }

    /// The "assistant is typing" dots stay visible until the script is done
    pub fn shows_typing_indicator(&self, total: usize) -> bool {
        !self.is_complete(total)
    }
}

/// Scroll offset past which the navigation bar switches to its solid style
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Returns whether `scrolled` changed
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAV_SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
