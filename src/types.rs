//! Small shared types used by the pipeline and the CLI.

/// Which member of a sorted pair goes on the left when combining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `files[i]` left, `files[i + 1]` right.
    Left,
    /// `files[i + 1]` left, `files[i]` right.
    Right,
}

impl Direction {
    /// Order a sorted pair `(first, second)` as `(left, right)`.
    pub fn arrange<T>(self, first: T, second: T) -> (T, T) {
        match self {
            Direction::Left => (first, second),
            Direction::Right => (second, first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_keeps_sorted_order() {
        assert_eq!(Direction::Left.arrange("a", "b"), ("a", "b"));
    }

    #[test]
    fn right_swaps() {
        assert_eq!(Direction::Right.arrange("a", "b"), ("b", "a"));
    }
}
