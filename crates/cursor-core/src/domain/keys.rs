//! Arrow-key presses and batches of them.
//!
//! The browser client queues `KeyboardEvent.key` strings while the cursor is
//! animating and submits them together in one move request.  Only the four
//! arrow keys mean anything; every other token is dropped on parse.

use tracing::debug;

/// One directional key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Up,
    Down,
    Left,
    Right,
}

impl KeyPress {
    /// Parses a browser `KeyboardEvent.key` token.
    ///
    /// Returns `None` for anything other than the four arrow keys.  Matching
    /// is exact and case-sensitive, the same way the browser reports them.
    ///
    /// ```rust
    /// use cursor_core::KeyPress;
    ///
    /// assert_eq!(KeyPress::from_token("ArrowLeft"), Some(KeyPress::Left));
    /// assert_eq!(KeyPress::from_token("Escape"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the browser token this key press was parsed from.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }
}

/// Number of presses per direction in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyTally {
    pub up: u64,
    pub down: u64,
    pub left: u64,
    pub right: u64,
}

impl KeyTally {
    /// Net horizontal presses, positive towards the right.
    pub fn net_x(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Net vertical presses, positive downwards.
    pub fn net_y(&self) -> i64 {
        self.down as i64 - self.up as i64
    }
}

/// An ordered batch of key presses submitted in one move request.
///
/// Order is kept for logging, but the move calculator only looks at the
/// per-direction [`KeyTally`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPressBatch {
    presses: Vec<KeyPress>,
}

impl KeyPressBatch {
    /// Creates a batch from already-parsed key presses.
    pub fn new(presses: Vec<KeyPress>) -> Self {
        Self { presses }
    }

    /// Builds a batch from raw browser tokens, silently dropping any token
    /// that is not an arrow key.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let presses = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let parsed = KeyPress::from_token(token);
                if parsed.is_none() {
                    debug!("ignoring unrecognised key token {token:?}");
                }
                parsed
            })
            .collect();
        Self { presses }
    }

    /// Counts the presses in each direction.
    pub fn tally(&self) -> KeyTally {
        self.presses
            .iter()
            .fold(KeyTally::default(), |mut tally, press| {
                match press {
                    KeyPress::Up => tally.up += 1,
                    KeyPress::Down => tally.down += 1,
                    KeyPress::Left => tally.left += 1,
                    KeyPress::Right => tally.right += 1,
                }
                tally
            })
    }

    /// Number of recognised key presses.
    pub fn len(&self) -> usize {
        self.presses.len()
    }

    /// Returns `true` if the batch holds no recognised key presses.
    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// Iterates over the presses in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyPress> {
        self.presses.iter()
    }
}

impl FromIterator<KeyPress> for KeyPressBatch {
    fn from_iter<T: IntoIterator<Item = KeyPress>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_parses_all_arrow_keys() {
        for press in [KeyPress::Up, KeyPress::Down, KeyPress::Left, KeyPress::Right] {
            assert_eq!(KeyPress::from_token(press.as_token()), Some(press));
        }
    }

    #[test]
    fn test_from_token_is_case_sensitive() {
        assert_eq!(KeyPress::from_token("arrowup"), None);
        assert_eq!(KeyPress::from_token("Up"), None);
    }

    #[test]
    fn test_from_tokens_drops_unrecognised_tokens() {
        // Arrange
        let batch = KeyPressBatch::from_tokens(["ArrowUp", "Escape", "ArrowRight", ""]);

        // Assert: only the two arrow keys survive, in order
        assert_eq!(batch.len(), 2);
        let presses: Vec<_> = batch.iter().copied().collect();
        assert_eq!(presses, vec![KeyPress::Up, KeyPress::Right]);
    }

    #[test]
    fn test_tally_counts_each_direction() {
        let batch = KeyPressBatch::from_tokens(["ArrowUp", "ArrowUp", "ArrowRight", "ArrowDown"]);
        let tally = batch.tally();
        assert_eq!(
            tally,
            KeyTally {
                up: 2,
                down: 1,
                left: 0,
                right: 1
            }
        );
        assert_eq!(tally.net_x(), 1);
        assert_eq!(tally.net_y(), -1);
    }

    #[test]
    fn test_tally_ignores_order() {
        let a: KeyPressBatch = [KeyPress::Left, KeyPress::Up, KeyPress::Left].into_iter().collect();
        let b: KeyPressBatch = [KeyPress::Up, KeyPress::Left, KeyPress::Left].into_iter().collect();
        assert_eq!(a.tally(), b.tally());
    }

    #[test]
    fn test_empty_batch() {
        let batch = KeyPressBatch::from_tokens(Vec::<String>::new());
        assert!(batch.is_empty());
        assert_eq!(batch.tally(), KeyTally::default());
    }
}
