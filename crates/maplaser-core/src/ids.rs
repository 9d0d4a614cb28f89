//! Identifier generation for exported layers and elements
//!
//! Exporters never create identifiers directly; they ask an [`IdGenerator`].
//! Production code uses random UUIDs, tests use [`SequentialIdGenerator`] so
//! assertions can name exact identifiers.

use uuid::Uuid;

/// Source of unique identifiers
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-N` identifiers counting from 1
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Number of identifiers handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
