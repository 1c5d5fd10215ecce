//! Event loop tying the terminal to the editor.

use treedit_lib::Session;

use crate::confirm::ConfirmPrompt;
use crate::editor::{Editor, Flow};
use crate::error::AppError;
use crate::event::{Event, MouseButton};
use crate::term::Terminal;
use crate::theme::Palette;
use crate::view;

pub struct App {
    terminal: Terminal,
    editor: Editor,
}

impl App {
    /// Take over the terminal. It is restored when the app is dropped.
    pub fn new(session: Session, indent: usize) -> Result<Self, AppError> {
        let terminal = Terminal::new()?;
        Ok(Self {
            terminal,
            editor: Editor::new(session, indent),
        })
    }

    pub fn run(mut self) -> Result<(), AppError> {
        log::info!("editor started with {} nodes", self.editor.session().tree().len());
        self.redraw()?;

        loop {
            let mut dirty = false;
            for raw in self.terminal.poll()? {
                let Some(event) = Event::from_crossterm(raw) else {
                    continue;
                };
                dirty = true;
                if self.handle(event) == Flow::Quit {
                    log::info!("quit requested");
                    return Ok(());
                }
            }
            if dirty {
                self.redraw()?;
            }
        }
    }

    fn handle(&mut self, event: Event) -> Flow {
        let palette = Palette::for_mode(self.editor.session().theme());
        match event {
            Event::Key { key, modifiers } => {
                let mut prompt = ConfirmPrompt::new(&mut self.terminal, palette);
                self.editor.handle_key(key, modifiers, &mut prompt)
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let (width, height) = self.terminal.size();
                let hit = view::hit(x, y, width, height, &self.editor);
                let mut prompt = ConfirmPrompt::new(&mut self.terminal, palette);
                self.editor.handle_click(hit, &mut prompt)
            }
            Event::Scroll { delta } => {
                self.editor.handle_scroll(delta);
                Flow::Continue
            }
            Event::Resize { width, height } => {
                log::debug!("resized to {}x{}", width, height);
                Flow::Continue
            }
            Event::Click { .. } => Flow::Continue,
        }
    }

    fn redraw(&mut self) -> Result<(), AppError> {
        let (_, height) = self.terminal.size();
        self.editor.set_viewport(view::viewport_rows(height));
        let editor = &self.editor;
        self.terminal.draw(|buf| view::paint(buf, editor))?;
        Ok(())
    }
}
