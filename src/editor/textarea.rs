use super::buffer::{BufferError, TextBuffer};

/// One-based cursor coordinates within a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Line number, starting at 1.
    pub row: usize,
    /// Column within the line, starting at 1.
    pub col: usize,
}

impl Cursor {
    /// The cursor at the start of the buffer.
    pub const fn new() -> Self {
        Self { row: 1, col: 1 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step over one byte: a newline starts the next line.
    const fn advance(&mut self, byte: u8) {
        if byte == b'\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A byte buffer paired with a cursor.
///
/// The cursor is kept in two coordinate systems at once: a one-based
/// `(row, col)` pair and a zero-based byte offset. After every public
/// operation, scanning the buffer from the start and counting `'\n'` bytes
/// up to the offset yields exactly the cursor's `(row, col)`.
///
/// A single-line text area (`multiline == false`) never holds a newline.
pub struct TextArea {
    buffer: TextBuffer,
    cursor: Cursor,
    offset: usize,
    multiline: bool,
}

impl TextArea {
    /// Create an empty text area with room for `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the initial allocation fails.
    pub fn new(capacity: usize, multiline: bool) -> Result<Self, BufferError> {
        Ok(Self {
            buffer: TextBuffer::with_capacity(capacity)?,
            cursor: Cursor::new(),
            offset: 0,
            multiline,
        })
    }

    /// Create an empty text area without allocating.
    pub fn empty(multiline: bool) -> Self {
        Self {
            buffer: TextBuffer::default(),
            cursor: Cursor::new(),
            offset: 0,
            multiline,
        }
    }

    /// Wrap an existing buffer, cursor at the origin.
    #[cfg(test)]
    pub(crate) fn with_buffer(buffer: TextBuffer, multiline: bool) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            offset: 0,
            multiline,
        }
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn row(&self) -> usize {
        self.cursor.row
    }

    pub const fn col(&self) -> usize {
        self.cursor.col
    }

    /// Byte offset of the cursor.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Allocated storage size of the underlying buffer.
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Total number of lines, counted from the content.
    pub fn row_count(&self) -> usize {
        self.as_bytes().iter().filter(|&&b| b == b'\n').count() + 1
    }

    /// Content of a line without its trailing newline.
    ///
    /// Rows past the end yield an empty slice.
    pub fn line(&self, row: usize) -> &[u8] {
        let bytes = self.as_bytes();
        let Some(start) = line_start(bytes, row) else {
            return &[];
        };
        let rest = &bytes[start..];
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        &rest[..end]
    }

    /// Number of bytes on a line, excluding the newline.
    pub fn line_length(&self, row: usize) -> usize {
        self.line(row).len()
    }

    /// Resolve the cursor's `(row, col)` to a byte offset by scanning from
    /// the start of the buffer.
    ///
    /// Stops at the first position whose scanned coordinates match, or at
    /// the end of the buffer.
    pub fn current_offset(&self) -> usize {
        let target = self.cursor;
        let mut scanned = Cursor::new();
        for (i, &byte) in self.as_bytes().iter().enumerate() {
            if scanned == target {
                return i;
            }
            scanned.advance(byte);
        }
        self.len()
    }

    /// Coordinates of a byte offset, clamped to the buffer length.
    pub fn position_at(&self, offset: usize) -> Cursor {
        let bytes = self.as_bytes();
        let mut pos = Cursor::new();
        for &byte in &bytes[..offset.min(bytes.len())] {
            pos.advance(byte);
        }
        pos
    }

    /// Type a byte at the cursor.
    ///
    /// Returns `Ok(false)` when the byte is ignored (a newline typed into a
    /// single-line area).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the buffer cannot grow; the
    /// text area is left unchanged.
    pub fn type_byte(&mut self, byte: u8) -> Result<bool, BufferError> {
        if !self.multiline && byte == b'\n' {
            return Ok(false);
        }
        if self.offset == self.len() {
            self.buffer.append(byte)?;
        } else {
            self.buffer.insert(self.offset, byte)?;
        }
        self.cursor.advance(byte);
        self.resync();
        Ok(true)
    }

    /// Delete the byte before the cursor (Backspace).
    ///
    /// Deleting a newline joins two lines; the cursor lands where the upper
    /// line used to end.
    ///
    /// Returns `true` if a byte was deleted.
    pub fn remove_byte(&mut self) -> bool {
        let Some(at) = self.offset.checked_sub(1) else {
            return false;
        };
        match self.buffer.remove(at) {
            Ok(_) => {
                self.cursor = self.position_at(at);
                self.resync();
                true
            }
            Err(_) => false,
        }
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_vertical(-1),
            Direction::Down => self.move_vertical(1),
        }
        self.resync();
    }

    /// Move cursor to the beginning of the line (Home).
    pub fn move_home(&mut self) {
        self.cursor.col = 1;
        self.resync();
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.line_length(self.cursor.row) + 1;
        self.resync();
    }

    /// Drop all content and return the cursor to the origin.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = Cursor::new();
        self.offset = 0;
    }

    // --- Private helpers ---

    fn resync(&mut self) {
        self.offset = self.current_offset();
    }

    fn move_left(&mut self) {
        if self.cursor.col > 1 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 1 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_length(self.cursor.row) + 1;
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col <= self.line_length(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row < self.row_count() {
            self.cursor.row += 1;
            self.cursor.col = 1;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let Some(row) = self.cursor.row.checked_add_signed(delta) else {
            return;
        };
        if row == 0 || row > self.row_count() {
            return;
        }
        self.cursor.row = row;
        self.cursor.col = self.cursor.col.min(self.line_length(row) + 1);
    }
}

/// Byte offset where a one-based row begins.
fn line_start(bytes: &[u8], row: usize) -> Option<usize> {
    match row {
        0 => None,
        1 => Some(0),
        _ => bytes
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b'\n')
            .nth(row - 2)
            .map(|(i, _)| i + 1),
    }
}

impl std::fmt::Debug for TextArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextArea")
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("offset", &self.offset)
            .field("multiline", &self.multiline)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &[u8]) -> TextArea {
        let mut area = TextArea::new(8, true).unwrap();
        for &b in text {
            area.type_byte(b).unwrap();
        }
        area
    }

    fn assert_consistent(area: &TextArea) {
        assert!(area.offset() <= area.len());
        assert_eq!(area.position_at(area.offset()), area.cursor());
    }

    // --- Construction ---

    #[test]
    fn test_new_area_starts_at_origin() {
        let area = TextArea::new(128, true).unwrap();
        assert_eq!(area.cursor(), Cursor::at(1, 1));
        assert_eq!(area.offset(), 0);
        assert_eq!(area.capacity(), 128);
        assert_eq!(area.row_count(), 1);
    }

    // --- Typing ---

    #[test]
    fn test_type_plain_bytes_advances_column() {
        let area = typed(b"hello");
        assert_eq!(area.cursor(), Cursor::at(1, 6));
        assert_eq!(area.offset(), 5);
    }

    #[test]
    fn test_type_two_lines() {
        let area = typed(b"ab\ncd");
        assert_eq!(area.as_bytes(), b"ab\ncd");
        assert_eq!(area.cursor(), Cursor::at(2, 3));
        assert_eq!(area.offset(), 5);
    }

    #[test]
    fn test_type_newline_moves_to_next_row() {
        let area = typed(b"ab\n");
        assert_eq!(area.cursor(), Cursor::at(2, 1));
        assert_eq!(area.offset(), 3);
    }

    #[test]
    fn test_single_line_ignores_newline() {
        let mut area = TextArea::new(32, false).unwrap();
        area.type_byte(b'a').unwrap();
        assert_eq!(area.type_byte(b'\n'), Ok(false));
        assert_eq!(area.as_bytes(), b"a");
        assert_eq!(area.cursor(), Cursor::at(1, 2));
        assert_eq!(area.offset(), 1);
    }

    #[test]
    fn test_type_in_middle_inserts_before_tail() {
        let mut area = typed(b"ad");
        area.move_cursor(Direction::Left);
        area.type_byte(b'b').unwrap();
        area.type_byte(b'c').unwrap();
        assert_eq!(area.as_bytes(), b"abcd");
        assert_eq!(area.cursor(), Cursor::at(1, 4));
        assert_eq!(area.offset(), 3);
    }

    #[test]
    fn test_type_newline_in_middle_splits_line() {
        let mut area = typed(b"abcd");
        area.move_cursor(Direction::Left);
        area.move_cursor(Direction::Left);
        area.type_byte(b'\n').unwrap();
        assert_eq!(area.as_bytes(), b"ab\ncd");
        assert_eq!(area.cursor(), Cursor::at(2, 1));
        assert_eq!(area.offset(), 3);
        assert_consistent(&area);
    }

    // --- Backspace ---

    #[test]
    fn test_remove_at_start_is_noop() {
        let mut area = TextArea::new(8, true).unwrap();
        assert!(!area.remove_byte());
        assert_eq!(area.cursor(), Cursor::at(1, 1));
    }

    #[test]
    fn test_remove_last_byte_of_second_line() {
        let mut area = typed(b"ab\ncd");
        assert!(area.remove_byte());
        assert_eq!(area.as_bytes(), b"ab\nc");
        assert_eq!(area.cursor(), Cursor::at(2, 2));
        assert_eq!(area.offset(), 4);
    }

    #[test]
    fn test_remove_across_newline_lands_at_end_of_joined_line() {
        let mut area = typed(b"ab\nc");
        area.remove_byte();
        assert_eq!(area.cursor(), Cursor::at(2, 1));
        area.remove_byte();
        assert_eq!(area.as_bytes(), b"ab");
        assert_eq!(area.cursor(), Cursor::at(1, 3));
        area.remove_byte();
        assert_eq!(area.as_bytes(), b"a");
        assert_eq!(area.cursor(), Cursor::at(1, 2));
        assert_eq!(area.offset(), 1);
    }

    #[test]
    fn test_remove_newline_in_middle_joins_at_join_point() {
        let mut area = typed(b"ab\ncd");
        area.move_cursor(Direction::Up);
        area.move_cursor(Direction::Down);
        area.move_home();
        assert_eq!(area.offset(), 3);
        assert!(area.remove_byte());
        assert_eq!(area.as_bytes(), b"abcd");
        assert_eq!(area.cursor(), Cursor::at(1, 3));
        assert_eq!(area.offset(), 2);
    }

    #[test]
    fn test_remove_everything_returns_to_origin() {
        let mut area = typed(b"x\n\ny");
        while area.remove_byte() {}
        assert!(area.is_empty());
        assert_eq!(area.cursor(), Cursor::at(1, 1));
        assert_eq!(area.offset(), 0);
    }

    // --- Out of memory ---

    #[test]
    fn test_impossible_capacity_fails_to_allocate() {
        assert!(matches!(
            TextArea::new(usize::MAX, true),
            Err(BufferError::OutOfMemory { .. })
        ));
    }

    #[test]
    fn test_failed_growth_leaves_area_unchanged() {
        let buffer = TextBuffer::with_max_capacity(4, 4).unwrap();
        let mut area = TextArea::with_buffer(buffer, true);
        for &b in b"ab\nc" {
            area.type_byte(b).unwrap();
        }

        assert_eq!(
            area.type_byte(b'd'),
            Err(BufferError::OutOfMemory { requested: 8 })
        );
        assert_eq!(area.as_bytes(), b"ab\nc");
        assert_eq!(area.cursor(), Cursor::at(2, 2));
        assert_eq!(area.offset(), 4);
        assert_eq!(area.capacity(), 4);

        area.move_cursor(Direction::Up);
        assert!(area.type_byte(b'\n').is_err());
        assert_eq!(area.as_bytes(), b"ab\nc");
        assert_eq!(area.cursor(), Cursor::at(1, 2));
        assert_eq!(area.offset(), 1);
    }

    // --- Line queries ---

    #[test]
    fn test_line_length_per_row() {
        let area = typed(b"ab\ncd");
        assert_eq!(area.line_length(1), 2);
        assert_eq!(area.line_length(2), 2);
    }

    #[test]
    fn test_line_length_of_missing_rows_is_zero() {
        let area = typed(b"ab\n");
        assert_eq!(area.line_length(0), 0);
        assert_eq!(area.line_length(2), 0);
        assert_eq!(area.line_length(3), 0);
    }

    #[test]
    fn test_line_returns_content_without_newline() {
        let area = typed(b"one\ntwo\n\nfour");
        assert_eq!(area.line(1), b"one");
        assert_eq!(area.line(2), b"two");
        assert_eq!(area.line(3), b"");
        assert_eq!(area.line(4), b"four");
        assert_eq!(area.row_count(), 4);
    }

    #[test]
    fn test_position_at_clamps_to_length() {
        let area = typed(b"ab\ncd");
        assert_eq!(area.position_at(0), Cursor::at(1, 1));
        assert_eq!(area.position_at(3), Cursor::at(2, 1));
        assert_eq!(area.position_at(99), Cursor::at(2, 3));
    }

    // --- Movement ---

    #[test]
    fn test_move_left_wraps_to_previous_line_end() {
        let mut area = typed(b"ab\n");
        area.move_cursor(Direction::Left);
        assert_eq!(area.cursor(), Cursor::at(1, 3));
        assert_eq!(area.offset(), 2);
    }

    #[test]
    fn test_move_right_wraps_to_next_line_start() {
        let mut area = typed(b"ab\ncd");
        area.move_cursor(Direction::Up);
        area.move_end();
        area.move_cursor(Direction::Right);
        assert_eq!(area.cursor(), Cursor::at(2, 1));
        assert_eq!(area.offset(), 3);
    }

    #[test]
    fn test_move_right_at_buffer_end_is_noop() {
        let mut area = typed(b"ab");
        area.move_cursor(Direction::Right);
        assert_eq!(area.cursor(), Cursor::at(1, 3));
    }

    #[test]
    fn test_move_up_clamps_to_shorter_line() {
        let mut area = typed(b"hi\nhello");
        area.move_cursor(Direction::Up);
        assert_eq!(area.cursor(), Cursor::at(1, 3));
        assert_eq!(area.offset(), 2);
    }

    #[test]
    fn test_move_down_past_last_line_is_noop() {
        let mut area = typed(b"ab");
        area.move_cursor(Direction::Down);
        assert_eq!(area.cursor(), Cursor::at(1, 3));
    }

    #[test]
    fn test_home_and_end() {
        let mut area = typed(b"abc");
        area.move_home();
        assert_eq!(area.offset(), 0);
        area.move_end();
        assert_eq!(area.offset(), 3);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut area = typed(b"ab\ncd");
        area.clear();
        assert!(area.is_empty());
        assert_eq!(area.cursor(), Cursor::at(1, 1));
        assert_eq!(area.offset(), 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Type(u8),
            Remove,
            Move(Direction),
        }

        fn byte() -> impl Strategy<Value = u8> {
            prop_oneof![Just(b'\n'), b'a'..=b'e']
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => byte().prop_map(Op::Type),
                2 => Just(Op::Remove),
                1 => prop_oneof![
                    Just(Direction::Up),
                    Just(Direction::Down),
                    Just(Direction::Left),
                    Just(Direction::Right),
                ]
                .prop_map(Op::Move),
            ]
        }

        fn apply(area: &mut TextArea, op: &Op) {
            match op {
                Op::Type(b) => {
                    area.type_byte(*b).unwrap();
                }
                Op::Remove => {
                    area.remove_byte();
                }
                Op::Move(dir) => area.move_cursor(*dir),
            }
        }

        proptest! {
            #[test]
            fn cursor_matches_scan_after_every_edit(
                multiline in any::<bool>(),
                ops in prop::collection::vec(op(), 0..64),
            ) {
                let mut area = TextArea::new(2, multiline).unwrap();
                for op in &ops {
                    apply(&mut area, op);
                    prop_assert!(area.offset() <= area.len());
                    prop_assert!(area.row() >= 1 && area.col() >= 1);
                    prop_assert_eq!(area.position_at(area.offset()), area.cursor());
                    prop_assert_eq!(area.current_offset(), area.offset());
                    if !multiline {
                        prop_assert!(!area.as_bytes().contains(&b'\n'));
                    }
                }
            }

            #[test]
            fn type_then_remove_restores_content_and_offset(
                ops in prop::collection::vec(op(), 0..48),
                b in byte(),
            ) {
                let mut area = TextArea::new(4, true).unwrap();
                for op in &ops {
                    apply(&mut area, op);
                }
                let before = area.as_bytes().to_vec();
                let offset = area.offset();
                let cursor = area.cursor();

                prop_assert!(area.type_byte(b).unwrap());
                prop_assert!(area.remove_byte());

                prop_assert_eq!(area.as_bytes(), before.as_slice());
                prop_assert_eq!(area.offset(), offset);
                prop_assert_eq!(area.cursor(), cursor);
            }

            #[test]
            fn single_line_newline_changes_nothing(
                text in prop::collection::vec(b'a'..=b'z', 0..32),
            ) {
                let mut area = TextArea::new(4, false).unwrap();
                for &b in &text {
                    area.type_byte(b).unwrap();
                }
                let len = area.len();
                let cursor = area.cursor();
                prop_assert!(!area.type_byte(b'\n').unwrap());
                prop_assert_eq!(area.len(), len);
                prop_assert_eq!(area.cursor(), cursor);
            }

            #[test]
            fn typing_plain_bytes_counts_columns(n in 0..200usize) {
                let mut area = TextArea::new(1, true).unwrap();
                for _ in 0..n {
                    area.type_byte(b'x').unwrap();
                }
                prop_assert_eq!(area.cursor(), Cursor::at(1, n + 1));
                prop_assert_eq!(area.offset(), n);
            }
        }
    }
}
