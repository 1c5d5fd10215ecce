//! Key and mouse handling on top of a [`Session`].
//!
//! Kept apart from the terminal so the whole interaction can be driven from
//! tests with a scripted confirmation prompt.

use treedit_lib::{Confirm, Intent, NodeId, NodeKind, Row, Session};

use crate::event::{Key, Modifiers};
use crate::input::{InputResult, TextInput};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A tree row. `chevron` is set when the expand/collapse marker was hit.
    Row { index: usize, chevron: bool },
    ThemeToggle,
    Nothing,
}

/// An inline rename in progress.
#[derive(Debug, Clone)]
pub struct Rename {
    pub id: NodeId,
    pub input: TextInput,
}

pub struct Editor {
    session: Session,
    /// Index into the visible rows.
    cursor: usize,
    /// First visible row.
    scroll: usize,
    /// Number of rows that fit on screen, set by the renderer.
    viewport: usize,
    rename: Option<Rename>,
    indent: usize,
}

impl Editor {
    pub fn new(session: Session, indent: usize) -> Self {
        Self {
            session,
            cursor: 0,
            scroll: 0,
            viewport: 1,
            rename: None,
            indent,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn rows(&self) -> Vec<Row> {
        self.session.rows()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn rename(&self) -> Option<&Rename> {
        self.rename.as_ref()
    }

    /// Record how many rows fit and clamp the scroll offset to them.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn cursor_row(&self) -> Option<Row> {
        self.rows().into_iter().nth(self.cursor)
    }

    // -------------------------------------------------------------------------
    // Keys
    // -------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, confirm: &mut dyn Confirm) -> Flow {
        if key == Key::Char('c') && modifiers.ctrl {
            return Flow::Quit;
        }

        if self.rename.is_some() {
            self.handle_rename_key(key, modifiers, confirm);
            return Flow::Continue;
        }

        let row = self.cursor_row();
        match key {
            Key::Char('q') => return Flow::Quit,
            Key::Char('t') => {
                self.apply(Intent::ToggleTheme, confirm);
            }
            Key::Char('N') => self.apply(Intent::AddRoot(NodeKind::Folder), confirm),
            Key::Char('F') => self.apply(Intent::AddRoot(NodeKind::File), confirm),

            Key::Up | Key::Char('k') => self.move_cursor(-1),
            Key::Down | Key::Char('j') => self.move_cursor(1),
            Key::PageUp => self.move_cursor(-(self.viewport as isize)),
            Key::PageDown => self.move_cursor(self.viewport as isize),
            Key::Home => self.set_cursor(0),
            Key::End => self.set_cursor(usize::MAX),

            _ => {
                if let Some(row) = row {
                    self.handle_row_key(key, &row, confirm);
                }
            }
        }
        Flow::Continue
    }

    fn handle_row_key(&mut self, key: Key, row: &Row, confirm: &mut dyn Confirm) {
        match key {
            Key::Left | Key::Char('h') => {
                if row.expanded == Some(true) {
                    self.apply(Intent::ToggleExpanded(row.id), confirm);
                } else if let Some(parent) = self.session.tree().find_parent(row.id).map(|p| p.id()) {
                    self.select(parent);
                }
            }
            Key::Right | Key::Char('l') => match row.expanded {
                Some(false) => self.apply(Intent::ToggleExpanded(row.id), confirm),
                Some(true) if self.session.tree().find(row.id).is_some_and(|n| !n.children().is_empty()) => {
                    self.move_cursor(1)
                }
                _ => {}
            },
            Key::Enter | Key::Char(' ') => {
                if row.is_folder() {
                    self.apply(Intent::ToggleExpanded(row.id), confirm);
                }
            }
            Key::Char('n') => {
                if row.is_folder() {
                    self.apply(Intent::AddFolder(row.id), confirm);
                }
            }
            Key::Char('f') => self.apply(Intent::AddFile(row.id), confirm),
            Key::Char('r') | Key::F(2) => self.start_rename(row, confirm),
            Key::Char('d') | Key::Delete => self.apply(Intent::Delete(row.id), confirm),
            _ => {}
        }
    }

    fn handle_rename_key(&mut self, key: Key, modifiers: Modifiers, confirm: &mut dyn Confirm) {
        let Some(rename) = self.rename.as_mut() else {
            return;
        };
        match rename.input.handle_key(key, modifiers) {
            InputResult::Submitted => self.commit_rename(confirm),
            InputResult::Cancelled => {
                let id = rename.id;
                self.rename = None;
                self.apply(Intent::CancelRename(id), confirm);
            }
            InputResult::Changed | InputResult::Handled | InputResult::Ignored => {}
        }
    }

    fn start_rename(&mut self, row: &Row, confirm: &mut dyn Confirm) {
        self.apply(Intent::StartRename(row.id), confirm);
        if self.session.view().is_editing(row.id) {
            self.rename = Some(Rename {
                id: row.id,
                input: TextInput::new(row.name.clone()),
            });
        }
    }

    fn commit_rename(&mut self, confirm: &mut dyn Confirm) {
        if let Some(rename) = self.rename.take() {
            let name = rename.input.text().to_string();
            self.apply(Intent::CommitRename(rename.id, name), confirm);
        }
    }

    // -------------------------------------------------------------------------
    // Mouse
    // -------------------------------------------------------------------------

    pub fn handle_click(&mut self, hit: Hit, confirm: &mut dyn Confirm) -> Flow {
        // Clicking away from the edit field saves it
        if self.rename.is_some() {
            let on_edited_row = matches!(hit, Hit::Row { index, .. } if index == self.cursor);
            if on_edited_row {
                return Flow::Continue;
            }
            self.commit_rename(confirm);
        }

        match hit {
            Hit::Row { index, chevron } => {
                let Some(row) = self.rows().into_iter().nth(index) else {
                    return Flow::Continue;
                };
                self.cursor = index;
                if chevron && row.is_folder() {
                    self.apply(Intent::ToggleExpanded(row.id), confirm);
                }
            }
            Hit::ThemeToggle => self.apply(Intent::ToggleTheme, confirm),
            Hit::Nothing => {}
        }
        Flow::Continue
    }

    pub fn handle_scroll(&mut self, delta: i16) {
        let max = self.max_scroll();
        self.scroll = self.scroll.saturating_add_signed(delta as isize).min(max);
    }

    fn max_scroll(&self) -> usize {
        self.rows().len().saturating_sub(self.viewport)
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Dispatch `intent` and keep the cursor on a sensible row afterwards.
    fn apply(&mut self, intent: Intent, confirm: &mut dyn Confirm) {
        let before = self.cursor_row().map(|row| row.id);
        let inserts = matches!(
            intent,
            Intent::AddFolder(_) | Intent::AddFile(_) | Intent::AddRoot(_)
        );

        if !self.session.dispatch(intent, confirm) {
            return;
        }

        let target = if inserts {
            self.session.last_inserted()
        } else {
            before
        };
        match target {
            Some(id) if self.select(id) => {}
            _ => self.set_cursor(self.cursor),
        }
    }

    /// Move the cursor to node `id` if it is visible.
    fn select(&mut self, id: NodeId) -> bool {
        match self.rows().iter().position(|row| row.id == id) {
            Some(index) => {
                self.set_cursor(index);
                true
            }
            None => false,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let next = (self.cursor as isize).saturating_add(delta).max(0) as usize;
        self.set_cursor(next);
    }

    fn set_cursor(&mut self, index: usize) {
        let len = self.rows().len();
        self.cursor = index.min(len.saturating_sub(1));
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.viewport {
            self.scroll = self.cursor + 1 - self.viewport;
        }
    }
}
