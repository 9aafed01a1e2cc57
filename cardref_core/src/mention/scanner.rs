//! Two-state bracket automaton.

/// A token longer than this is abandoned before its closing bracket.
pub const MAX_TOKEN_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Outside,
    InsideBrackets,
}

/// Outcome of feeding one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// A `]` closed the token; it may be empty.
    Closed(String),
    /// The token grew past [`MAX_TOKEN_CHARS`] and was dropped.
    Discarded,
}

/// Fed one `(previous, current)` character pair at a time.
///
/// `[[` opens a token, the first `]` closes it, and every other character in
/// between is part of the token (including further `[`).
#[derive(Debug, Clone, Default)]
pub struct MentionScanner {
    state: ScanState,
    token: String,
    token_chars: usize,
}

impl MentionScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    fn reset(&mut self) -> String {
        self.state = ScanState::Outside;
        self.token_chars = 0;
        std::mem::take(&mut self.token)
    }

    pub fn feed(&mut self, prev: char, current: char) -> Step {
        match self.state {
            ScanState::Outside => {
                if prev == '[' && current == '[' {
                    self.state = ScanState::InsideBrackets;
                }
                Step::Continue
            }
            ScanState::InsideBrackets if current == ']' => Step::Closed(self.reset()),
            ScanState::InsideBrackets => {
                self.token.push(current);
                self.token_chars += 1;
                if self.token_chars > MAX_TOKEN_CHARS {
                    self.reset();
                    Step::Discarded
                } else {
                    Step::Continue
                }
            }
        }
    }
}
