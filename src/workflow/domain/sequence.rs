//! Human-readable sequence identifiers such as `PN-007`.

/// Allocates the next identifier in a prefixed, zero-padded sequence.
///
/// Allocation is only correct against a fresh read of the existing
/// identifiers. Two clients allocating concurrently can produce the same
/// identifier; nothing here prevents that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceAllocator {
    prefix: String,
    width: usize,
}

impl SequenceAllocator {
    /// Creates an allocator for identifiers `prefix` + `width` digits.
    #[must_use]
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// Allocator for repair payment numbers (`PN-001`, `PN-002`, …).
    #[must_use]
    pub fn payment_numbers() -> Self {
        Self::new("PN-", 3)
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses the numeric suffix of an identifier carrying this prefix.
    ///
    /// Suffixes must be all ASCII digits.
    #[must_use]
    pub fn suffix_of(&self, identifier: &str) -> Option<u64> {
        let suffix = identifier.trim().strip_prefix(self.prefix.as_str())?;
        if suffix.is_empty() || !suffix.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
        suffix.parse().ok()
    }

    /// Returns the identifier following the largest existing one.
    ///
    /// Unparsable identifiers are ignored; an empty set yields suffix 1.
    #[must_use]
    pub fn next<'a>(&self, existing: impl IntoIterator<Item = &'a str>) -> String {
        let highest = existing
            .into_iter()
            .filter_map(|identifier| self.suffix_of(identifier))
            .max()
            .unwrap_or(0);
        format!(
            "{}{:0width$}",
            self.prefix,
            highest.saturating_add(1),
            width = self.width
        )
    }
}
