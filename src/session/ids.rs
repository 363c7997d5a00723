//! Per-collection identifier sequences

/// Monotonic identifier generator (`PREFIX-0001`, `PREFIX-0002`, ...)
///
/// Each collection in a session owns one sequence, so identifiers never
/// collide within that collection before `u64::MAX` allocations.
#[derive(Debug, Clone, Copy)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
}

impl IdSequence {
    /// Create a sequence starting at 1
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Allocate the next identifier
    ///
    /// The counter saturates instead of wrapping or panicking.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{:04}", self.prefix, self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Number of identifiers handed out so far
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}
