// Chunk: docs/chunks/editor_state - Editing session over buffer, layout and viewport
// Chunk: docs/chunks/coordinate_mapping - Click and vertical motion
// Chunk: docs/chunks/viewport_follow - Viewport update after each command
//!
//! Editor state container.
//!
//! `EditorState` owns one document and everything derived from it: the
//! buffer, its wrap layout, the viewport and the session settings (font,
//! window size, file path). Every public command keeps the derived state
//! current before returning:
//!
//! - content changes (typing, backspace, load, zoom, width change) reflow the
//!   whole buffer
//! - every command then scrolls the viewport to follow the cursor
//!
//! so accessors such as [`EditorState::cursor_pixel_x`] and
//! [`EditorState::line_count`] never observe a stale layout.

use std::path::{Path, PathBuf};

use textflow_buffer::{TextBuffer, Update};

use crate::command::EditorCommand;
use crate::config::EditorConfig;
use crate::cursor_mapping;
use crate::error::{EditorError, EditorResult};
use crate::file_io;
use crate::font::{FontSpec, GlyphMetrics, MonospaceMetrics};
use crate::viewport::Viewport;
use crate::wrap_layout::WrapLayout;

/// One open document with its layout and session settings.
#[derive(Debug)]
pub struct EditorState<M = MonospaceMetrics> {
    buffer: TextBuffer,
    layout: WrapLayout,
    viewport: Viewport,
    metrics: M,
    font: FontSpec,
    config: EditorConfig,
    /// Width the buffer is wrapped to
    wrap_width: f32,
    /// File the document is saved to
    file_path: Option<PathBuf>,
}

impl<M: GlyphMetrics> EditorState<M> {
    /// Creates an empty document sized and styled by `config`.
    pub fn new(config: EditorConfig, metrics: M) -> Self {
        let buffer = TextBuffer::new();
        let layout = WrapLayout::new(&buffer, config.margin);
        let font = config.font();
        let line_height = metrics.line_height(&font);
        let mut state = Self {
            buffer,
            layout,
            viewport: Viewport::new(config.window_height, line_height),
            metrics,
            font,
            wrap_width: config.window_width,
            config,
            file_path: None,
        };
        state.relayout();
        state
    }

    /// Opens the document at `path`.
    ///
    /// A missing file is not an error: the editor starts with an empty
    /// document bound to `path`, which the first save creates.
    pub fn open(path: impl Into<PathBuf>, config: EditorConfig, metrics: M) -> EditorResult<Self> {
        let path = path.into();
        let mut state = Self::new(config, metrics);
        match file_io::read_document(&path) {
            Ok(bytes) => {
                state.load_from_bytes(&bytes);
                tracing::info!(
                    path = %path.display(),
                    chars = state.buffer.len(),
                    lines = state.line_count(),
                    "opened document"
                );
            }
            Err(EditorError::FileNotFound(_)) => {
                tracing::warn!(path = %path.display(), "file not found, starting empty document");
            }
            Err(e) => return Err(e),
        }
        state.file_path = Some(path);
        Ok(state)
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn layout(&self) -> &WrapLayout {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the path the document is saved to, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the document text with line breaks as `'\n'`.
    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// X pixel coordinate of the cursor.
    pub fn cursor_pixel_x(&self) -> f32 {
        cursor_mapping::cursor_pixel(&self.buffer, &self.layout).0
    }

    /// Y pixel coordinate of the top of the cursor's line.
    pub fn cursor_pixel_y(&self) -> f32 {
        cursor_mapping::cursor_pixel(&self.buffer, &self.layout).1
    }

    pub fn line_height(&self) -> f32 {
        self.layout.line_height()
    }

    pub fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    /// Returns the first line shown at the top of the window.
    pub fn first_visible_line(&self) -> usize {
        self.viewport.first_visible_line()
    }

    /// Returns the text of every visual line.
    pub fn visual_lines(&self) -> Vec<String> {
        self.layout.visual_lines(&self.buffer)
    }

    // ==================== Editing ====================

    /// Inserts `ch` after the cursor. `'\n'` and `'\r'` insert a line break.
    pub fn insert_char(&mut self, ch: char) -> Update {
        let update = self.buffer.insert_char(ch);
        self.refresh(update)
    }

    /// Inserts every character of `text` in order.
    pub fn insert_str(&mut self, text: &str) -> Update {
        let update = self.buffer.insert_str(text);
        self.refresh(update)
    }

    /// Deletes the character before the cursor. No-op at the start.
    pub fn backspace(&mut self) -> Update {
        let update = self.buffer.backspace();
        self.refresh(update)
    }

    // ==================== Cursor movement ====================

    pub fn move_cursor_left(&mut self) -> Update {
        let update = self.buffer.move_left();
        self.refresh(update)
    }

    pub fn move_cursor_right(&mut self) -> Update {
        let update = self.buffer.move_right();
        self.refresh(update)
    }

    /// Moves to the position nearest the same X one line up.
    pub fn move_cursor_up(&mut self) -> Update {
        let target = cursor_mapping::node_above(&self.buffer, &self.layout);
        let update = self.buffer.set_cursor(target);
        self.refresh(update)
    }

    /// Moves to the position nearest the same X one line down.
    pub fn move_cursor_down(&mut self) -> Update {
        let target = cursor_mapping::node_below(&self.buffer, &self.layout);
        let update = self.buffer.set_cursor(target);
        self.refresh(update)
    }

    /// Moves the cursor to the position nearest the document pixel `(x, y)`.
    pub fn move_cursor_to_coordinate(&mut self, x: f32, y: f32) -> Update {
        let target = cursor_mapping::node_at_point(&self.buffer, &self.layout, x, y);
        let update = self.buffer.set_cursor(target);
        self.refresh(update)
    }

    /// Handles a click at window pixel `(x, y)`, accounting for scrolling.
    pub fn click(&mut self, x: f32, y: f32) -> Update {
        let document_y = y + self.viewport.scroll_value() * self.line_height();
        self.move_cursor_to_coordinate(x.round(), document_y.round())
    }

    // ==================== Layout ====================

    /// Rewraps the buffer to `width_px` and keeps that width for later edits.
    pub fn reflow(&mut self, width_px: f32) {
        self.wrap_width = width_px;
        self.relayout();
        self.follow_cursor();
    }

    /// Resizes the window. A width change rewraps the buffer.
    pub fn set_window_size(&mut self, width: f32, height: f32) -> Update {
        let mut update = Update::None;
        if width != self.wrap_width {
            self.reflow(width);
            update = Update::FullRelayout;
        }
        if height != self.viewport.height() {
            let line_count = self.line_count();
            self.viewport.set_height(height, line_count);
            self.follow_cursor();
            update.merge(Update::CursorOnly);
        }
        update
    }

    /// Enlarges the font by one step.
    pub fn increase_font_size(&mut self) -> Update {
        let size = self.font.size + self.config.font_size_step;
        self.set_font_size(size)
    }

    /// Shrinks the font by one step, never below the minimum size.
    pub fn decrease_font_size(&mut self) -> Update {
        let size = (self.font.size - self.config.font_size_step).max(self.config.min_font_size);
        self.set_font_size(size)
    }

    fn set_font_size(&mut self, size: f32) -> Update {
        if size == self.font.size {
            return Update::None;
        }
        self.font.size = size;
        tracing::debug!(size, "font size changed");
        self.refresh(Update::FullRelayout)
    }

    // ==================== History ====================

    /// Undo is not available yet; always returns `Update::None`.
    pub fn undo(&mut self) -> Update {
        Update::None
    }

    /// Redo is not available yet; always returns `Update::None`.
    pub fn redo(&mut self) -> Update {
        Update::None
    }

    // ==================== Persistence ====================

    /// Appends the decoded content of `bytes` to the document.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Update {
        self.buffer.load_bytes(bytes);
        self.refresh(Update::FullRelayout)
    }

    /// Serializes the document with LF line terminators.
    pub fn serialize_to_bytes(&self) -> Vec<u8> {
        self.buffer.to_bytes()
    }

    /// Writes the document to its file.
    pub fn save(&self) -> EditorResult<()> {
        let path = self.file_path.as_deref().ok_or(EditorError::NoFilePath)?;
        let bytes = self.serialize_to_bytes();
        file_io::write_document(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved document");
        Ok(())
    }

    /// Binds the document to `path` and writes it there.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> EditorResult<()> {
        self.file_path = Some(path.into());
        self.save()
    }

    // ==================== Commands ====================

    /// Applies one parsed command.
    ///
    /// Only `Save` can fail; the document stays open when it does.
    pub fn apply(&mut self, command: &EditorCommand) -> EditorResult<Update> {
        let update = match command {
            EditorCommand::Type(text) => self.insert_str(text),
            EditorCommand::Backspace(count) => {
                let mut update = Update::None;
                for _ in 0..*count {
                    update.merge(self.backspace());
                }
                update
            }
            EditorCommand::MoveLeft => self.move_cursor_left(),
            EditorCommand::MoveRight => self.move_cursor_right(),
            EditorCommand::MoveUp => self.move_cursor_up(),
            EditorCommand::MoveDown => self.move_cursor_down(),
            EditorCommand::Click { x, y } => self.click(*x, *y),
            EditorCommand::Resize { width, height } => self.set_window_size(*width, *height),
            EditorCommand::ZoomIn => self.increase_font_size(),
            EditorCommand::ZoomOut => self.decrease_font_size(),
            EditorCommand::Save => {
                self.save()?;
                Update::None
            }
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::PrintCursor => {
                if self.config.debug {
                    tracing::debug!(
                        x = self.cursor_pixel_x(),
                        y = self.cursor_pixel_y(),
                        "cursor position"
                    );
                }
                Update::None
            }
        };
        Ok(update)
    }

    // ==================== Internals ====================

    /// Brings layout and viewport up to date after a buffer command.
    fn refresh(&mut self, update: Update) -> Update {
        if update.needs_relayout() {
            self.relayout();
        }
        if !update.is_none() {
            self.follow_cursor();
        }
        update
    }

    fn relayout(&mut self) {
        self.layout
            .reflow(&mut self.buffer, self.wrap_width, &self.font, &self.metrics);
    }

    fn follow_cursor(&mut self) {
        let cursor_y = self.cursor_pixel_y();
        let line_height = self.line_height();
        let line_count = self.line_count();
        self.viewport.follow_cursor(cursor_y, line_height, line_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedMetrics;
    use tempfile::TempDir;

    /// 10px glyphs, 20px lines, margin 5, 70px wide, 100px tall.
    fn editor() -> EditorState<FixedMetrics> {
        let config = EditorConfig {
            window_width: 70.0,
            window_height: 100.0,
            ..EditorConfig::default()
        };
        EditorState::new(config, FixedMetrics::new(10.0, 20.0))
    }

    fn type_text(state: &mut EditorState<FixedMetrics>, text: &str) {
        for ch in text.chars() {
            state.insert_char(ch);
        }
    }

    // ==================== Typing ====================

    #[test]
    fn test_empty_editor() {
        let state = editor();
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.cursor_pixel_x(), 5.0);
        assert_eq!(state.cursor_pixel_y(), 0.0);
        assert_eq!(state.line_height(), 20.0);
    }

    #[test]
    fn test_type_then_backspace() {
        let mut state = editor();
        type_text(&mut state, "abc");
        assert_eq!(state.backspace(), Update::FullRelayout);
        assert_eq!(state.backspace(), Update::FullRelayout);
        assert_eq!(state.content(), "a");
        assert_eq!(state.cursor_pixel_x(), 15.0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = editor();
        assert_eq!(state.backspace(), Update::None);
    }

    #[test]
    fn test_typing_rewraps() {
        let mut state = editor();
        type_text(&mut state, "ab cd ef");
        assert_eq!(state.visual_lines(), vec!["ab cd", "ef"]);
        assert_eq!(state.line_count(), 2);
        assert_eq!((state.cursor_pixel_x(), state.cursor_pixel_y()), (25.0, 20.0));
    }

    #[test]
    fn test_enter_moves_cursor_to_next_line() {
        let mut state = editor();
        type_text(&mut state, "ab\n");
        assert_eq!((state.cursor_pixel_x(), state.cursor_pixel_y()), (5.0, 20.0));
    }

    // ==================== Movement ====================

    #[test]
    fn test_left_at_start_and_right_at_end_are_noops() {
        let mut state = editor();
        assert_eq!(state.move_cursor_left(), Update::None);
        type_text(&mut state, "ab");
        assert_eq!(state.move_cursor_right(), Update::None);
        assert_eq!(state.move_cursor_left(), Update::CursorOnly);
        assert_eq!(state.cursor_pixel_x(), 15.0);
    }

    #[test]
    fn test_up_and_down() {
        let mut state = editor();
        type_text(&mut state, "abc\ndef");
        assert_eq!(state.move_cursor_up(), Update::CursorOnly);
        assert_eq!((state.cursor_pixel_x(), state.cursor_pixel_y()), (35.0, 0.0));
        assert_eq!(state.move_cursor_down(), Update::CursorOnly);
        assert_eq!((state.cursor_pixel_x(), state.cursor_pixel_y()), (35.0, 20.0));
    }

    #[test]
    fn test_click_moves_cursor() {
        let mut state = editor();
        type_text(&mut state, "abc");
        assert_eq!(state.move_cursor_to_coordinate(10.0, 5.0), Update::CursorOnly);
        assert_eq!(state.cursor_pixel_x(), 5.0);
        assert_eq!(state.move_cursor_to_coordinate(10.0, 5.0), Update::None);
    }

    #[test]
    fn test_click_accounts_for_scroll() {
        let mut state = editor();
        type_text(&mut state, "a\nb\nc\nd\ne\nf\ng");
        assert_eq!(state.first_visible_line(), 2);

        // Window row 0 shows line 2 ("c")
        state.click(20.0, 5.0);
        assert_eq!(state.cursor_pixel_y(), 40.0);
        assert_eq!(state.cursor_pixel_x(), 15.0);
    }

    // ==================== Layout ====================

    #[test]
    fn test_reflow_keeps_width_for_later_edits() {
        let mut state = editor();
        type_text(&mut state, "ab cd ef");
        state.reflow(200.0);
        assert_eq!(state.line_count(), 1);
        state.insert_char('g');
        assert_eq!(state.visual_lines(), vec!["ab cd efg"]);
    }

    #[test]
    fn test_window_resize() {
        let mut state = editor();
        type_text(&mut state, "ab cd ef");
        assert_eq!(state.set_window_size(200.0, 100.0), Update::FullRelayout);
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.set_window_size(200.0, 100.0), Update::None);
        assert_eq!(state.set_window_size(200.0, 300.0), Update::CursorOnly);
        assert_eq!(state.viewport().height(), 300.0);
    }

    #[test]
    fn test_font_zoom() {
        let config = EditorConfig {
            font_size: 10.0,
            ..EditorConfig::default()
        };
        let metrics = MonospaceMetrics {
            advance_em: 0.5,
            line_height_em: 1.0,
        };
        let mut state = EditorState::new(config, metrics);
        state.insert_str("ab");
        assert_eq!(state.cursor_pixel_x(), 15.0);

        assert_eq!(state.increase_font_size(), Update::FullRelayout);
        assert_eq!(state.font().size, 14.0);
        assert_eq!(state.cursor_pixel_x(), 19.0);
        assert_eq!(state.line_height(), 14.0);
    }

    #[test]
    fn test_font_zoom_out_floors_at_minimum() {
        let mut state = editor();
        for _ in 0..10 {
            state.decrease_font_size();
        }
        assert_eq!(state.font().size, 4.0);
        assert_eq!(state.decrease_font_size(), Update::None);
    }

    // ==================== Persistence ====================

    #[test]
    fn test_load_and_serialize() {
        let mut state = editor();
        state.load_from_bytes(b"one\r\ntwo");
        assert_eq!(state.line_count(), 2);
        assert_eq!(state.serialize_to_bytes(), b"one\ntwo");
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.txt");
        let state = EditorState::open(&path, EditorConfig::default(), FixedMetrics::new(10.0, 20.0))
            .unwrap();
        assert!(state.buffer().is_empty());
        assert_eq!(state.file_path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_without_path_fails() {
        let state = editor();
        assert!(matches!(state.save(), Err(EditorError::NoFilePath)));
    }

    #[test]
    fn test_save_as_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let mut state = editor();
        type_text(&mut state, "hi\nthere");
        state.save_as(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hi\nthere");
    }

    // ==================== Commands ====================

    #[test]
    fn test_apply_commands() {
        let mut state = editor();
        let script = ["type ab cd ef", "backspace 2", "left", "undo", "cursor"];
        let mut update = Update::None;
        for line in script {
            let command = EditorCommand::parse(line).unwrap().unwrap();
            update.merge(state.apply(&command).unwrap());
        }
        assert_eq!(update, Update::FullRelayout);
        assert_eq!(state.content(), "ab cd ");
        assert_eq!(state.apply(&EditorCommand::Redo).unwrap(), Update::None);
    }

    #[test]
    fn test_apply_save_error_keeps_document() {
        let mut state = editor();
        state.insert_str("keep");
        assert!(state.apply(&EditorCommand::Save).is_err());
        assert_eq!(state.content(), "keep");
    }
}
