//! Sequence numbers for generated instance names.

use std::sync::Arc;

use sqlprov_model::Environment;

/// Hands out the trailing sequence number of an instance name.
pub trait SequenceAllocator: Send + Sync {
    fn next_sequence(&self, amm_code: &str, environment: &Environment, type_letter: char) -> u32;
}

impl<T: SequenceAllocator + ?Sized> SequenceAllocator for &T {
    fn next_sequence(&self, amm_code: &str, environment: &Environment, type_letter: char) -> u32 {
        (**self).next_sequence(amm_code, environment, type_letter)
    }
}

impl<T: SequenceAllocator + ?Sized> SequenceAllocator for Arc<T> {
    fn next_sequence(&self, amm_code: &str, environment: &Environment, type_letter: char) -> u32 {
        (**self).next_sequence(amm_code, environment, type_letter)
    }
}

/// Always returns the same number.
///
/// This is a placeholder: it does not guarantee unique names across
/// concurrent provisioning requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSequence(pub u32);

impl Default for FixedSequence {
    fn default() -> Self {
        Self(1)
    }
}

impl SequenceAllocator for FixedSequence {
    fn next_sequence(&self, _amm_code: &str, _environment: &Environment, _type_letter: char) -> u32 {
        self.0
    }
}
