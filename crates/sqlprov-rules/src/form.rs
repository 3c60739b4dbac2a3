//! Reactive form host.
//!
//! [`WizardForm`] owns the answers and the dependent field values. Every
//! answer change re-runs the widgets that depend on it and pushes the
//! resulting [`FieldChange`]s through the caller's change callback before
//! applying them to its own state. A field whose value was just changed is
//! evaluated again until it settles.

use std::collections::BTreeMap;

use sqlprov_model::{ContextKey, FieldChange, FieldResult, WizardContext};
use tracing::{debug, trace};

use crate::allocator::SequenceAllocator;
use crate::catalog::ServerCatalog;
use crate::widgets::{FieldWidget, InstanceNameGenerator, ServerNamePicker, SqlEditionPicker};

const MAX_SETTLE_PASSES: usize = 3;

pub struct WizardForm {
    context: WizardContext,
    widgets: Vec<Box<dyn FieldWidget>>,
    values: BTreeMap<&'static str, Option<String>>,
}

impl WizardForm {
    /// An empty form with no widgets.
    pub fn new() -> Self {
        Self {
            context: WizardContext::default(),
            widgets: Vec::new(),
            values: BTreeMap::new(),
        }
    }

    /// A form with the edition picker, server picker and name generator.
    pub fn provisioning<C, A>(catalog: C, allocator: A) -> Self
    where
        C: ServerCatalog + 'static,
        A: SequenceAllocator + 'static,
    {
        Self::new()
            .with_widget(SqlEditionPicker)
            .with_widget(ServerNamePicker::new(catalog))
            .with_widget(InstanceNameGenerator::new(allocator))
    }

    pub fn with_widget(mut self, widget: impl FieldWidget + 'static) -> Self {
        self.values.entry(widget.id()).or_insert(None);
        self.widgets.push(Box::new(widget));
        self
    }

    /// Seeds the answers without recomputing anything.
    pub fn with_context(mut self, context: WizardContext) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &WizardContext {
        &self.context
    }

    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).and_then(|value| value.as_deref())
    }

    /// Field ids and values, in id order.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        self.values
            .iter()
            .map(|(field_id, value)| (*field_id, value.as_deref()))
    }

    /// Records a value picked by the user. Unknown field ids are ignored.
    pub fn set_value(&mut self, field_id: &str, value: Option<&str>) {
        if let Some(slot) = self.values.get_mut(field_id) {
            *slot = value.filter(|value| !value.is_empty()).map(str::to_string);
        }
    }

    /// Current evaluation of one field, without applying it.
    pub fn field(&self, field_id: &str) -> Option<FieldResult> {
        self.widgets
            .iter()
            .find(|widget| widget.id() == field_id)
            .map(|widget| widget.evaluate(&self.context, self.value(field_id)))
    }

    /// Updates one answer and recomputes the widgets that depend on it.
    pub fn set_answer<F>(&mut self, key: ContextKey, raw: Option<&str>, on_change: F)
    where
        F: FnMut(&str, &FieldChange),
    {
        self.context.set_answer(key, raw);
        debug!(answer = %key, value = raw, "wizard answer changed");
        self.recompute(|widget| widget.depends_on().contains(&key), on_change);
    }

    /// Recomputes every widget, as a host does when the form is first shown.
    pub fn refresh<F>(&mut self, on_change: F)
    where
        F: FnMut(&str, &FieldChange),
    {
        self.recompute(|_| true, on_change);
    }

    fn recompute<P, F>(&mut self, mut affected: P, mut on_change: F)
    where
        P: FnMut(&dyn FieldWidget) -> bool,
        F: FnMut(&str, &FieldChange),
    {
        for widget in &self.widgets {
            if !affected(widget.as_ref()) {
                continue;
            }
            let field_id = widget.id();
            let slot = self.values.entry(field_id).or_insert(None);
            // A field also reacts to its own value, so a cleared select gets
            // a second pass that may apply its default.
            for _ in 0..MAX_SETTLE_PASSES {
                let result = widget.evaluate(&self.context, slot.as_deref());
                let Some(change) = result.change_from(slot.as_deref()) else {
                    trace!(field = field_id, "field settled");
                    break;
                };
                debug!(field = field_id, ?change, "field changed");
                on_change(field_id, &change);
                change.apply(slot);
            }
        }
    }
}

impl Default for WizardForm {
    fn default() -> Self {
        Self::new()
    }
}
