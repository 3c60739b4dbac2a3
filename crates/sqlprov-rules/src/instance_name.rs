//! Generated SQL instance names.
//!
//! Format: `SQL` + AMM code + environment letter + type letter + sequence,
//! with no separators, e.g. `SQLAMM02RD1` for AMM02 in IT.

use sqlprov_model::{Environment, FieldResult, WizardContext};
use tracing::debug;

use crate::allocator::SequenceAllocator;

pub const NAME_PREFIX: &str = "SQL";

/// Instance kind letter. Only database instances exist today.
pub const TYPE_LETTER: char = 'D';

/// Letter used for environments outside DEV, IT, QA and PROD.
pub const FALLBACK_ENVIRONMENT_LETTER: char = 'X';

pub fn environment_letter(environment: &Environment) -> char {
    match environment {
        Environment::Dev => 'D',
        Environment::It => 'R',
        Environment::Qa => 'Q',
        Environment::Prod => 'P',
        Environment::Other(_) => FALLBACK_ENVIRONMENT_LETTER,
    }
}

/// Builds the instance name, or an empty string while an answer is missing.
pub fn derive_instance_name(
    amm_code: Option<&str>,
    environment: Option<&Environment>,
    sequence_number: u32,
) -> String {
    let (Some(amm_code), Some(environment)) = (amm_code, environment) else {
        return String::new();
    };
    format!(
        "{NAME_PREFIX}{amm_code}{}{TYPE_LETTER}{sequence_number}",
        environment_letter(environment)
    )
}

/// Builds the instance name for the answers, asking the allocator for the
/// sequence number only when both answers are present.
pub fn generate_instance_name<A>(context: &WizardContext, allocator: &A) -> String
where
    A: SequenceAllocator + ?Sized,
{
    let (Some(amm_code), Some(environment)) = (context.amm_code(), context.environment()) else {
        return String::new();
    };
    let sequence = allocator.next_sequence(amm_code, environment, TYPE_LETTER);
    derive_instance_name(Some(amm_code), Some(environment), sequence)
}

/// Recomputes the read-only instance name field.
pub fn evaluate_instance_name_field<A>(context: &WizardContext, allocator: &A) -> FieldResult
where
    A: SequenceAllocator + ?Sized,
{
    let name = generate_instance_name(context, allocator);
    debug!(instance_name = %name, "instance name generated");
    FieldResult::generated(name)
}
