//! Rule engine bundling the injected collaborators.

use serde::{Deserialize, Serialize};
use sqlprov_model::{FieldResult, ServerField, WizardContext};

use crate::allocator::{FixedSequence, SequenceAllocator};
use crate::catalog::ServerCatalog;
use crate::editions::evaluate_edition_field;
use crate::instance_name::evaluate_instance_name_field;
use crate::servers::evaluate_server_field;

/// Current values of the three dependent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
}

/// All dependent fields recomputed for one context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEvaluation {
    pub sql_edition: FieldResult,
    pub server_name: ServerField,
    pub instance_name: FieldResult,
}

/// Evaluates the wizard's dependent fields against a catalog snapshot and a
/// sequence allocator.
#[derive(Debug, Clone)]
pub struct RuleEngine<C, A = FixedSequence> {
    catalog: C,
    allocator: A,
}

impl<C: ServerCatalog> RuleEngine<C, FixedSequence> {
    /// Creates an engine that numbers every instance 1.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            allocator: FixedSequence::default(),
        }
    }
}

impl<C: ServerCatalog, A: SequenceAllocator> RuleEngine<C, A> {
    /// Swaps the sequence allocator.
    pub fn with_allocator<B: SequenceAllocator>(self, allocator: B) -> RuleEngine<C, B> {
        RuleEngine {
            catalog: self.catalog,
            allocator,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn editions(&self, context: &WizardContext, current: Option<&str>) -> FieldResult {
        evaluate_edition_field(context, current)
    }

    pub fn servers(&self, context: &WizardContext, current: Option<&str>) -> ServerField {
        evaluate_server_field(context, current, &self.catalog)
    }

    pub fn instance_name(&self, context: &WizardContext) -> FieldResult {
        evaluate_instance_name_field(context, &self.allocator)
    }

    /// Recomputes every dependent field at once.
    pub fn evaluate(&self, context: &WizardContext, values: &FieldValues) -> FormEvaluation {
        FormEvaluation {
            sql_edition: self.editions(context, values.sql_edition.as_deref()),
            server_name: self.servers(context, values.server_name.as_deref()),
            instance_name: self.instance_name(context),
        }
    }
}
