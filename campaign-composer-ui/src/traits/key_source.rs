//! Fallback key generation for buttons with no identity content

use uuid::Uuid;

/// Source of unique fallback keys
///
/// Consulted only when a descriptor has no `btnText`, confirm content or
/// `iconClass` to derive an identity from. Uniqueness matters here,
/// reproducibility does not.
pub trait FallbackKeySource {
    /// Produce the next unique key token
    fn next_key(&mut self) -> String;
}

/// Random fallback keys (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeySource;

impl FallbackKeySource for UuidKeySource {
    fn next_key(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic counter fallback keys, for deterministic tests and tooling
#[derive(Debug, Clone, Default)]
pub struct SequenceKeySource {
    next: u64,
}

impl SequenceKeySource {
    /// Create a counter starting at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FallbackKeySource for SequenceKeySource {
    fn next_key(&mut self) -> String {
        let key = format!("button-{}", self.next);
        self.next += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_keys_are_unique() {
        let mut source = UuidKeySource;
        assert_ne!(source.next_key(), source.next_key());
    }

    #[test]
    fn sequence_keys_are_deterministic() {
        let mut source = SequenceKeySource::new();
        assert_eq!(source.next_key(), "button-0");
        assert_eq!(source.next_key(), "button-1");

        let mut fresh = SequenceKeySource::new();
        assert_eq!(fresh.next_key(), "button-0");
    }
}
