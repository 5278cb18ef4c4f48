//! Identifier generation
//!
//! Documents stored without an `id` field receive a generated string
//! identifier, unique with overwhelming probability across the table's
//! lifetime.

use reef_core::DocumentId;
use uuid::Uuid;

/// Source of generated document identifiers
///
/// The table consults its generator whenever a stored document carries no
/// `id` field. Implementations must be safe to share across threads.
pub trait GenerateId: Send + Sync {
    /// Produce a fresh identifier.
    fn generate(&self) -> DocumentId;
}

/// Default generator: random 128-bit tokens in simple (un-hyphenated)
/// UUID v4 form
///
/// No inputs and no failure mode; the only side effect is consuming
/// entropy. The table still regenerates on the off chance a generated
/// identifier collides with a caller-supplied one already in the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl GenerateId for UuidGenerator {
    fn generate(&self) -> DocumentId {
        DocumentId::String(Uuid::new_v4().simple().to_string())
    }
}
