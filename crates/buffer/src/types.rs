// Chunk: docs/chunks/char_store - Arena-backed character store with sentinels

/// The content of one character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A printable character.
    Char(char),
    /// An explicit line terminator (hard break).
    LineBreak,
}

impl Glyph {
    /// Maps a typed character to a glyph. Both CR and LF become a hard break.
    pub fn from_char(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Glyph::LineBreak,
            other => Glyph::Char(other),
        }
    }

    /// The character this glyph serializes to (`'\n'` for a hard break).
    pub fn to_char(self) -> char {
        match self {
            Glyph::Char(ch) => ch,
            Glyph::LineBreak => '\n',
        }
    }

    /// Returns true for the space character (the only word separator used by wrapping).
    pub fn is_space(self) -> bool {
        self == Glyph::Char(' ')
    }
}

/// Layout attributes assigned to a character by the reflow pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeLayout {
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Laid-out width in pixels (zero for elided characters and terminators).
    pub advance: f32,
    /// The line wraps after this character although it is not a terminator.
    pub soft_break: bool,
    /// Whitespace dropped by the layout at a wrap boundary.
    pub elided: bool,
}

/// What a command changed, so the host knows how much to redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Nothing changed (e.g., a no-op at a buffer boundary).
    None,
    /// Only the cursor moved; layout is still valid.
    CursorOnly,
    /// Content, width or font changed; the whole buffer must be reflowed.
    FullRelayout,
}

impl Update {
    /// Returns true if nothing changed.
    pub fn is_none(&self) -> bool {
        matches!(self, Update::None)
    }

    /// Returns true if the buffer needs a full reflow.
    pub fn needs_relayout(&self) -> bool {
        matches!(self, Update::FullRelayout)
    }

    /// Merges another update into this one, keeping the larger of the two.
    ///
    /// Used when a batch of commands is applied and the host refreshes once.
    pub fn merge(&mut self, other: Update) {
        *self = match (*self, other) {
            (Update::FullRelayout, _) | (_, Update::FullRelayout) => Update::FullRelayout,
            (Update::CursorOnly, _) | (_, Update::CursorOnly) => Update::CursorOnly,
            (Update::None, Update::None) => Update::None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Glyph ====================

    #[test]
    fn test_from_char_maps_terminators() {
        assert_eq!(Glyph::from_char('\n'), Glyph::LineBreak);
        assert_eq!(Glyph::from_char('\r'), Glyph::LineBreak);
        assert_eq!(Glyph::from_char('a'), Glyph::Char('a'));
    }

    #[test]
    fn test_line_break_serializes_to_lf() {
        assert_eq!(Glyph::LineBreak.to_char(), '\n');
    }

    // ==================== Merge ====================

    #[test]
    fn merge_none_is_identity() {
        let mut u = Update::None;
        u.merge(Update::CursorOnly);
        assert_eq!(u, Update::CursorOnly);

        let mut u = Update::CursorOnly;
        u.merge(Update::None);
        assert_eq!(u, Update::CursorOnly);
    }

    #[test]
    fn merge_full_relayout_absorbs_everything() {
        let mut u = Update::FullRelayout;
        u.merge(Update::CursorOnly);
        assert_eq!(u, Update::FullRelayout);

        let mut u = Update::CursorOnly;
        u.merge(Update::FullRelayout);
        assert!(u.needs_relayout());
    }

    #[test]
    fn merge_typing_then_arrows() {
        let mut u = Update::None;
        u.merge(Update::FullRelayout);
        u.merge(Update::CursorOnly);
        u.merge(Update::None);
        assert_eq!(u, Update::FullRelayout);
    }
}
