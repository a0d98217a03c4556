//! Member selection: idle-first round robin with least-waiting fallback.

/// How a member was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// First member with an empty queue, scanning from the cursor.
    Idle,
    /// Every queue was non-empty; member with the fewest waiters.
    LeastWaiting,
}

impl SelectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::Idle => "idle",
            SelectionStrategy::LeastWaiting => "least_waiting",
        }
    }
}

/// Outcome of one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the chosen member.
    pub index: usize,
    /// Which rule picked it.
    pub strategy: SelectionStrategy,
}

/// Rotating selector.
/// Stores the cursor where the next circular scan begins.
#[derive(Debug, Default)]
pub struct Selector {
    cursor: usize,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the rotation at `cursor`.
    pub fn with_cursor(cursor: usize) -> Self {
        Self { cursor }
    }

    /// Raw cursor value. Reduced modulo the member count when used.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Pick one of `members` and advance the cursor past it.
    ///
    /// Scans circularly from the cursor and returns the first member whose
    /// waiting count is zero. If every member has waiters, returns the global
    /// minimum, ties going to the lowest index wherever the scan started.
    /// That tie-break is not a long-run balancing guarantee under saturation.
    ///
    /// Returns `None` for an empty member list; the cursor is left untouched.
    pub fn select<T, W>(&mut self, members: &[T], waiting: W) -> Option<Selection>
    where
        W: Fn(&T) -> usize,
    {
        let len = members.len();
        if len == 0 {
            return None;
        }

        // Members may have been appended since the last call.
        let start = self.cursor % len;
        let mut least: Option<(usize, usize)> = None;

        for k in 0..len {
            let index = (start + k) % len;
            let count = waiting(&members[index]);
            if count == 0 {
                return Some(self.advance(index, len, SelectionStrategy::Idle));
            }
            if least.map_or(true, |current| (count, index) < current) {
                least = Some((count, index));
            }
        }

        least.map(|(_, index)| self.advance(index, len, SelectionStrategy::LeastWaiting))
    }

    fn advance(&mut self, index: usize, len: usize, strategy: SelectionStrategy) -> Selection {
        self.cursor = (index + 1) % len;
        Selection { index, strategy }
    }
}
