//! Decision rules behind the SQL provisioning wizard's dependent fields.
//!
//! Every rule is a pure function of the wizard answers plus read-only
//! collaborators injected by the host:
//!
//! - [`editions`]: which SQL editions a version/environment pair offers and
//!   which one to preselect.
//! - [`servers`]: which host servers the catalog lists for an AMM code and
//!   environment.
//! - [`instance_name`]: the generated instance name.
//!
//! [`RuleEngine`] bundles the collaborators; [`WizardForm`] is a reference
//! host that recomputes dependent fields whenever an answer changes.

pub mod allocator;
pub mod catalog;
pub mod editions;
pub mod engine;
pub mod form;
pub mod instance_name;
pub mod reconcile;
pub mod servers;
pub mod widgets;

pub use allocator::{FixedSequence, SequenceAllocator};
pub use catalog::{ServerCatalog, StaticCatalog};
pub use editions::{derive_editions, evaluate_edition_field};
pub use engine::{FieldValues, FormEvaluation, RuleEngine};
pub use form::WizardForm;
pub use instance_name::{derive_instance_name, evaluate_instance_name_field, generate_instance_name};
pub use servers::{derive_servers, evaluate_server_field};
pub use widgets::{
    FieldWidget, INSTANCE_NAME_FIELD, InstanceNameGenerator, SERVER_NAME_FIELD, SQL_EDITION_FIELD,
    ServerNamePicker, SqlEditionPicker,
};
