use std::fmt;

/// A token recorded in a [`CursorStack`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CursorToken {
    /// Marks the position before the first page.
    Start,

    /// Marks that the previous page was the last one.
    End,

    /// An opaque continuation token issued by the server.
    Next(String),
}

impl CursorToken {
    /// Whether this token is one of the sentinels.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Next(_))
    }
}

impl fmt::Display for CursorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "<start>"),
            Self::End => write!(f, "<end>"),
            Self::Next(cursor) => write!(f, "{cursor}"),
        }
    }
}

/// Cursor based pagination state.
///
/// Keeps every cursor the server has handed out for a listing, in the order they were observed, along with
/// the position of the cursor used to fetch the page currently on display. Moving back and forth only ever
/// replays cursors that were already recorded, so a listing stays stable even if the result set changes
/// between requests.
///
/// The stack is append only until [`CursorStack::reset`] is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorStack {
    tokens: Vec<CursorToken>,
    position: usize,
}

impl CursorStack {
    /// Construct an empty stack positioned before the first page.
    pub fn new() -> Self {
        Self { tokens: vec![CursorToken::Start], position: 0 }
    }

    /// The cursor to use when fetching the page at the current position.
    ///
    /// Returns `None` when the position addresses a sentinel, meaning the first page should be fetched.
    pub fn current_cursor(&self) -> Option<&str> {
        match &self.tokens[self.position] {
            CursorToken::Next(cursor) => Some(cursor),
            CursorToken::Start | CursorToken::End => None,
        }
    }

    /// Record the cursor returned by a successful fetch of the current page.
    ///
    /// The cursor is only appended if the current position is the tail of the stack. Otherwise the successor
    /// was already recorded on an earlier visit and that value is kept.
    pub fn record_cursor(&mut self, next_cursor: Option<String>) {
        if self.is_at_tail() {
            let token = next_cursor.map(CursorToken::Next).unwrap_or(CursorToken::End);
            self.tokens.push(token);
        }
    }

    /// Whether there is a previous page.
    pub fn can_step_backward(&self) -> bool {
        self.tokens[self.position] != CursorToken::Start
    }

    /// Whether there may be a next page.
    ///
    /// This is only `false` once the successor has been recorded as [`CursorToken::End`]. A successor that
    /// hasn't been fetched yet is assumed to exist.
    pub fn can_step_forward(&self) -> bool {
        self.tokens.get(self.position + 1) != Some(&CursorToken::End)
    }

    /// Move to the previous page, if any.
    pub fn step_backward(&mut self) {
        if self.can_step_backward() {
            self.position -= 1;
        }
    }

    /// Move to the next page, if any.
    ///
    /// The position never moves past the tail: the successor's cursor has to be recorded first.
    pub fn step_forward(&mut self) {
        if self.can_step_forward() && !self.is_at_tail() {
            self.position += 1;
        }
    }

    /// Drop every recorded cursor and go back to the first page.
    pub fn reset(&mut self) {
        self.tokens.truncate(1);
        self.position = 0;
    }

    /// The index of the cursor used for the page on display.
    pub fn position(&self) -> usize {
        self.position
    }

    /// All the recorded tokens.
    pub fn tokens(&self) -> &[CursorToken] {
        &self.tokens
    }

    /// Whether the current position is the last recorded one.
    pub fn is_at_tail(&self) -> bool {
        self.position == self.tokens.len() - 1
    }
}

impl Default for CursorStack {
    fn default() -> Self {
        Self::new()
    }
}
