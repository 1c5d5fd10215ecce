use super::{Cell, Rgb, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint a `width` x `height` block starting at (x, y) with `bg`.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgb) {
        for row in y..y.saturating_add(height).min(self.height) {
            for col in x..x.saturating_add(width).min(self.width) {
                self.set(col, row, Cell::new(' ').with_bg(bg));
            }
        }
    }

    /// Write `text` at (x, y), clipped to the buffer width.
    ///
    /// Background is taken from the cells being overwritten. Returns the
    /// column after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, style: TextStyle) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > self.width || y >= self.height {
                break;
            }
            let bg = self.get(col, y).map(|c| c.bg).unwrap_or_default();
            self.set(col, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
            if width == 2 {
                let cont = Cell {
                    wide_continuation: true,
                    ..Cell::new(' ').with_bg(bg)
                };
                self.set(col + 1, y, cont);
            }
            col += width;
        }
        col
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_to_width() {
        let mut buf = Buffer::new(4, 1);
        let end = buf.put_str(1, 0, "abcdef", Rgb::new(1, 2, 3), TextStyle::new());
        assert_eq!(end, 4);
        assert_eq!(buf.get(0, 0).unwrap().char, ' ');
        assert_eq!(buf.get(3, 0).unwrap().char, 'c');
    }

    #[test]
    fn test_put_str_keeps_background() {
        let mut buf = Buffer::new(3, 1);
        let bg = Rgb::hex(0x1e1e1e);
        buf.fill(0, 0, 3, 1, bg);
        buf.put_str(0, 0, "x", Rgb::hex(0xd4d4d4), TextStyle::new());
        assert_eq!(buf.get(0, 0).unwrap().bg, bg);
    }

    #[test]
    fn test_wide_char_marks_continuation() {
        let mut buf = Buffer::new(4, 1);
        let end = buf.put_str(0, 0, "📁a", Rgb::default(), TextStyle::new());
        assert_eq!(end, 3);
        assert!(buf.get(1, 0).unwrap().wide_continuation);
        assert_eq!(buf.get(2, 0).unwrap().char, 'a');
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let a = Buffer::new(2, 2);
        let mut b = Buffer::new(2, 2);
        b.set(1, 1, Cell::new('z'));
        let changed: Vec<_> = b.diff(&a).map(|(x, y, c)| (x, y, c.char)).collect();
        assert_eq!(changed, vec![(1, 1, 'z')]);
    }
}
