//! Painting the editor into a cell buffer, and mapping clicks back to rows.

use treedit_lib::{Action, NodeKind, Row, ThemeMode};

use crate::editor::{Editor, Hit, Rename};
use crate::term::{Buffer, TextStyle};
use crate::text::{char_width, display_width, truncate_to_width};
use crate::theme::Palette;

const HEADER_ROWS: u16 = 1;
const FOOTER_ROWS: u16 = 1;
/// Left margin before the indentation.
const MARGIN: u16 = 1;
const TOGGLE_WIDTH: u16 = 4;

/// Number of tree rows that fit in a terminal of `height`.
pub fn viewport_rows(height: u16) -> usize {
    height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize
}

pub fn paint(buf: &mut Buffer, editor: &Editor) {
    let theme = editor.session().theme();
    let palette = Palette::for_mode(theme);
    let (width, height) = (buf.width(), buf.height());
    if width == 0 || height == 0 {
        return;
    }

    buf.fill(0, 0, width, height, palette.background);
    paint_header(buf, theme, &palette);

    let rows = editor.rows();
    let body_height = viewport_rows(height);
    let visible = rows.iter().enumerate().skip(editor.scroll()).take(body_height);
    for (line, (index, row)) in visible.enumerate() {
        let y = HEADER_ROWS + line as u16;
        let focused = index == editor.cursor();
        let rename = editor.rename().filter(|r| r.id == row.id);
        paint_row(buf, y, row, focused, rename, editor.indent(), &palette);
    }

    if rows.is_empty() && body_height > 0 {
        buf.put_str(
            MARGIN,
            HEADER_ROWS,
            "Empty. Press N to add a folder or F to add a file.",
            palette.muted,
            TextStyle::new().dim(),
        );
    }

    if height > HEADER_ROWS {
        let hints = if editor.rename().is_some() {
            "enter save  esc cancel"
        } else {
            "↑↓ move  ←→ fold  n folder  f file  r rename  d delete  t theme  q quit"
        };
        let y = height - FOOTER_ROWS;
        buf.fill(0, y, width, 1, palette.surface);
        let hints = truncate_to_width(hints, width.saturating_sub(MARGIN) as usize);
        buf.put_str(MARGIN, y, &hints, palette.muted, TextStyle::new());
    }
}

fn paint_header(buf: &mut Buffer, theme: ThemeMode, palette: &Palette) {
    let width = buf.width();
    buf.fill(0, 0, width, HEADER_ROWS, palette.surface);
    buf.put_str(MARGIN, 0, "Explorer", palette.foreground, TextStyle::new().bold());

    // Shows the mode a click switches to
    let toggle = match theme {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    };
    if width > TOGGLE_WIDTH {
        buf.put_str(width - TOGGLE_WIDTH + 1, 0, toggle, palette.accent, TextStyle::new());
    }
}

fn paint_row(
    buf: &mut Buffer,
    y: u16,
    row: &Row,
    focused: bool,
    rename: Option<&Rename>,
    indent: usize,
    palette: &Palette,
) {
    let width = buf.width();
    if focused {
        buf.fill(0, y, width, 1, palette.cursor);
    }

    let depth_cols = u16::try_from(row.depth * indent).unwrap_or(u16::MAX);
    let mut x = MARGIN.saturating_add(depth_cols);
    let chevron = match row.expanded {
        Some(true) => "▾ ",
        Some(false) => "▸ ",
        None => "  ",
    };
    x = buf.put_str(x, y, chevron, palette.muted, TextStyle::new());

    let (icon, icon_color) = match row.kind {
        NodeKind::Folder => ("■ ", palette.folder),
        NodeKind::File => ("□ ", palette.file),
    };
    x = buf.put_str(x, y, icon, icon_color, TextStyle::new());

    let actions = if focused && rename.is_none() {
        action_hints(row)
    } else {
        String::new()
    };
    let actions_width = display_width(&actions) as u16;
    let name_room = width.saturating_sub(x.saturating_add(actions_width + 1)) as usize;

    match rename {
        Some(rename) => paint_input(buf, x, y, name_room, rename, palette),
        None => {
            let name = truncate_to_width(&row.name, name_room);
            buf.put_str(x, y, &name, palette.foreground, TextStyle::new());
        }
    }

    if !actions.is_empty() && width > actions_width {
        buf.put_str(width - actions_width - 1, y, &actions, palette.muted, TextStyle::new());
    }
}

fn paint_input(buf: &mut Buffer, x: u16, y: u16, room: usize, rename: &Rename, palette: &Palette) {
    if room == 0 {
        return;
    }
    buf.fill(x, y, room as u16, 1, palette.input_background);

    let (before, after) = rename.input.split();
    // Keep the cursor in view when the text is wider than the field
    let before = tail_to_width(before, room.saturating_sub(1));
    let mut col = buf.put_str(x, y, &before, palette.foreground, TextStyle::new());

    let mut rest = after.chars();
    let under_cursor = rest.next().unwrap_or(' ');
    let cursor_style = TextStyle::new().underline().bold();
    col = buf.put_str(col, y, &under_cursor.to_string(), palette.accent, cursor_style);

    let used = (col - x) as usize;
    let tail = truncate_to_width(rest.as_str(), room.saturating_sub(used));
    buf.put_str(col, y, &tail, palette.foreground, TextStyle::new());
}

/// The last characters of `s` that fit in `max_width` columns.
fn tail_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let w = char_width(ch);
        if width + w > max_width {
            break;
        }
        width += w;
        start = i;
    }
    s[start..].to_string()
}

fn action_hints(row: &Row) -> String {
    row.actions()
        .iter()
        .map(|action| format!("[{}] {}", action_key(*action), action.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn action_key(action: Action) -> char {
    match action {
        Action::AddFolder => 'n',
        Action::AddFile => 'f',
        Action::Rename => 'r',
        Action::Delete => 'd',
    }
}

/// Map a click at (x, y) to what is drawn there.
pub fn hit(x: u16, y: u16, width: u16, height: u16, editor: &Editor) -> Hit {
    if y < HEADER_ROWS {
        if width > TOGGLE_WIDTH && x >= width - TOGGLE_WIDTH {
            return Hit::ThemeToggle;
        }
        return Hit::Nothing;
    }
    if y >= height.saturating_sub(FOOTER_ROWS) {
        return Hit::Nothing;
    }

    let index = editor.scroll() + (y - HEADER_ROWS) as usize;
    let rows = editor.rows();
    let Some(row) = rows.get(index) else {
        return Hit::Nothing;
    };
    let chevron_x = MARGIN as usize + row.depth * editor.indent();
    let chevron = (x as usize) >= chevron_x && (x as usize) < chevron_x + 2;
    Hit::Row { index, chevron }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treedit_lib::seed::sample;
    use treedit_lib::{Session, Tree};

    use crate::event::{Key, Modifiers};

    fn editor() -> Editor {
        let tree = Tree::from_seeds(&sample()).unwrap();
        let mut editor = Editor::new(Session::new(tree), 2);
        editor.set_viewport(viewport_rows(12));
        editor
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.width())
            .filter_map(|x| buf.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_paints_rows_with_indent() {
        let editor = editor();
        let mut buf = Buffer::new(80, 12);
        paint(&mut buf, &editor);

        assert!(line(&buf, 0).starts_with(" Explorer"));
        assert!(line(&buf, 1).starts_with(" ▾ ■ src"));
        assert!(line(&buf, 2).starts_with("   ▾ ■ components"));
        assert_eq!(line(&buf, 3), "       □ Header.js");
    }

    #[test]
    fn test_cursor_row_shows_actions() {
        let editor = editor();
        let mut buf = Buffer::new(80, 12);
        paint(&mut buf, &editor);

        let first = line(&buf, 1);
        assert!(first.ends_with("[n] + Folder [f] + File [r] Rename [d] Delete"));
        assert!(!line(&buf, 2).contains("[f]"));
    }

    #[test]
    fn test_rename_field_painted() {
        let mut editor = editor();
        editor.handle_key(Key::Char('r'), Modifiers::new(), &mut |_: &str| true);
        let mut buf = Buffer::new(80, 12);
        paint(&mut buf, &editor);

        assert!(line(&buf, 1).starts_with(" ▾ ■ src"));
        assert!(!line(&buf, 1).contains("[r]"));
        assert!(line(&buf, 11).contains("enter save"));
    }

    #[test]
    fn test_hit_testing() {
        let editor = editor();
        assert_eq!(hit(78, 0, 80, 12, &editor), Hit::ThemeToggle);
        assert_eq!(hit(3, 0, 80, 12, &editor), Hit::Nothing);
        assert_eq!(hit(1, 1, 80, 12, &editor), Hit::Row { index: 0, chevron: true });
        assert_eq!(hit(3, 2, 80, 12, &editor), Hit::Row { index: 1, chevron: true });
        assert_eq!(hit(10, 2, 80, 12, &editor), Hit::Row { index: 1, chevron: false });
        assert_eq!(hit(1, 11, 80, 12, &editor), Hit::Nothing);
    }

    #[test]
    fn test_indent_wider_than_screen() {
        let mut editor = editor();
        // Nest a folder chain deep enough to push names off a narrow screen
        for _ in 0..12 {
            editor.handle_key(Key::Char('n'), Modifiers::new(), &mut |_: &str| true);
        }
        let mut buf = Buffer::new(20, 12);
        paint(&mut buf, &editor);

        assert_eq!(editor.rows()[editor.cursor()].depth, 12);
        let y = (editor.cursor() - editor.scroll()) as u16 + HEADER_ROWS;
        assert_eq!(line(&buf, y), "");
    }

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("ab", 3), "ab");
    }

    #[test]
    fn test_empty_tree_hint() {
        let editor = Editor::new(Session::new(Tree::empty()), 2);
        let mut buf = Buffer::new(80, 5);
        paint(&mut buf, &editor);
        assert!(line(&buf, 1).contains("Press N"));
    }
}
