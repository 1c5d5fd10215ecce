//! Yes/no prompt drawn over the tree.

use treedit_lib::Confirm;

use crate::event::{Event, Key};
use crate::term::{Buffer, Terminal, TextStyle};
use crate::text::{display_width, truncate_to_width};
use crate::theme::Palette;

/// A confirmation prompt that blocks until the user answers.
///
/// `y`/Enter confirms, `n`/Escape cancels.
pub struct ConfirmPrompt<'a> {
    terminal: &'a mut Terminal,
    palette: Palette,
}

const TITLE: &str = "Confirm";

impl<'a> ConfirmPrompt<'a> {
    pub fn new(terminal: &'a mut Terminal, palette: Palette) -> Self {
        Self { terminal, palette }
    }

    fn ask(&mut self, message: &str) -> std::io::Result<bool> {
        let palette = self.palette;
        self.terminal
            .overlay(|buf| paint_prompt(buf, TITLE, message, &palette))?;

        loop {
            for raw in self.terminal.poll()? {
                if let Some(Event::Key { key, .. }) = Event::from_crossterm(raw)
                    && let Some(answer) = answer(key)
                {
                    return Ok(answer);
                }
            }
        }
    }
}

impl Confirm for ConfirmPrompt<'_> {
    fn confirm(&mut self, message: &str) -> bool {
        match self.ask(message) {
            Ok(answer) => {
                log::debug!("prompt {:?} answered {}", message, answer);
                answer
            }
            Err(err) => {
                log::warn!("prompt failed, treating as cancel: {}", err);
                false
            }
        }
    }
}

/// Map a key to an answer. Other keys leave the prompt open.
pub fn answer(key: Key) -> Option<bool> {
    match key {
        Key::Char('y') | Key::Char('Y') | Key::Enter => Some(true),
        Key::Char('n') | Key::Char('N') | Key::Escape => Some(false),
        _ => None,
    }
}

fn paint_prompt(buf: &mut Buffer, title: &str, message: &str, palette: &Palette) {
    let (width, height) = (buf.width(), buf.height());
    let buttons = "[n] Cancel   [y] Ok";

    let content = display_width(message).max(display_width(buttons)) as u16;
    let box_width = (content + 4).min(width);
    let box_height = 5.min(height);
    if box_width < 4 || box_height < 3 {
        return;
    }
    let x = (width - box_width) / 2;
    let y = (height - box_height) / 2;
    let inner = (box_width - 4) as usize;

    buf.fill(x, y, box_width, box_height, palette.surface);
    let title = truncate_to_width(title, inner);
    buf.put_str(x + 2, y, &title, palette.accent, TextStyle::new().bold());
    let message = truncate_to_width(message, inner);
    buf.put_str(x + 2, y + 2, &message, palette.foreground, TextStyle::new());
    if box_height >= 5 {
        let bx = x + box_width - 2 - display_width(buttons).min(inner) as u16;
        let buttons = truncate_to_width(buttons, inner);
        buf.put_str(bx, y + 4, &buttons, palette.muted, TextStyle::new());
    }
}
