pub mod context;
pub mod enums;
pub mod error;
pub mod field;

pub use context::{ContextKey, WizardContext};
pub use enums::{Environment, SqlEdition, SqlVersion};
pub use error::{ModelError, Result};
pub use field::{FieldChange, FieldResult, ServerField};
