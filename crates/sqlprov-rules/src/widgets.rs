//! Field widgets: the contract a hosting form uses to drive dependent fields.

use sqlprov_model::{ContextKey, FieldResult, ServerField, WizardContext};

use crate::allocator::SequenceAllocator;
use crate::catalog::ServerCatalog;
use crate::editions::evaluate_edition_field;
use crate::instance_name::evaluate_instance_name_field;
use crate::servers::evaluate_server_field;

pub const SQL_EDITION_FIELD: &str = "sqlEdition";
pub const SERVER_NAME_FIELD: &str = "serverName";
pub const INSTANCE_NAME_FIELD: &str = "instanceName";

/// A form field whose value is recomputed from the wizard answers.
pub trait FieldWidget: Send + Sync {
    /// Form property the widget writes to.
    fn id(&self) -> &'static str;

    /// Answers whose change must trigger a recomputation.
    fn depends_on(&self) -> &'static [ContextKey];

    fn evaluate(&self, context: &WizardContext, current: Option<&str>) -> FieldResult;
}

/// Edition select driven by SQL version and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlEditionPicker;

impl FieldWidget for SqlEditionPicker {
    fn id(&self) -> &'static str {
        SQL_EDITION_FIELD
    }

    fn depends_on(&self) -> &'static [ContextKey] {
        &[ContextKey::SqlVersion, ContextKey::Environment]
    }

    fn evaluate(&self, context: &WizardContext, current: Option<&str>) -> FieldResult {
        evaluate_edition_field(context, current)
    }
}

/// Server select driven by AMM code and environment.
#[derive(Debug, Clone)]
pub struct ServerNamePicker<C> {
    catalog: C,
}

impl<C: ServerCatalog> ServerNamePicker<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Full select state, including whether it is disabled.
    pub fn state(&self, context: &WizardContext, current: Option<&str>) -> ServerField {
        evaluate_server_field(context, current, &self.catalog)
    }
}

impl<C: ServerCatalog> FieldWidget for ServerNamePicker<C> {
    fn id(&self) -> &'static str {
        SERVER_NAME_FIELD
    }

    fn depends_on(&self) -> &'static [ContextKey] {
        &[ContextKey::AmmCode, ContextKey::Environment]
    }

    fn evaluate(&self, context: &WizardContext, current: Option<&str>) -> FieldResult {
        self.state(context, current).result
    }
}

/// Read-only generated instance name.
#[derive(Debug, Clone)]
pub struct InstanceNameGenerator<A> {
    allocator: A,
}

impl<A: SequenceAllocator> InstanceNameGenerator<A> {
    pub fn new(allocator: A) -> Self {
        Self { allocator }
    }
}

impl<A: SequenceAllocator> FieldWidget for InstanceNameGenerator<A> {
    fn id(&self) -> &'static str {
        INSTANCE_NAME_FIELD
    }

    fn depends_on(&self) -> &'static [ContextKey] {
        &[ContextKey::AmmCode, ContextKey::Environment]
    }

    // The current value never matters: the name is always regenerated.
    fn evaluate(&self, context: &WizardContext, _current: Option<&str>) -> FieldResult {
        evaluate_instance_name_field(context, &self.allocator)
    }
}
