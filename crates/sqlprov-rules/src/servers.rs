//! Server name options by AMM code and environment.

use std::collections::HashSet;

use sqlprov_model::{Environment, ServerField, WizardContext};
use tracing::debug;

use crate::catalog::ServerCatalog;
use crate::reconcile::reconcile;

/// Servers registered for the answers, in catalog order.
///
/// Empty until both answers are present. A name repeated by the catalog is
/// kept at its first position only.
pub fn derive_servers<C>(
    amm_code: Option<&str>,
    environment: Option<&Environment>,
    catalog: &C,
) -> Vec<String>
where
    C: ServerCatalog + ?Sized,
{
    let (Some(amm_code), Some(environment)) = (amm_code, environment) else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    catalog
        .lookup_servers(amm_code, environment)
        .into_iter()
        .filter(|server| seen.insert(server.clone()))
        .collect()
}

/// Recomputes the server select for the current answers.
///
/// The select is disabled while either answer is missing; once both are
/// present it is enabled even if the catalog has nothing for them.
pub fn evaluate_server_field<C>(
    context: &WizardContext,
    current: Option<&str>,
    catalog: &C,
) -> ServerField
where
    C: ServerCatalog + ?Sized,
{
    let amm_code = context.amm_code();
    let environment = context.environment();
    let disabled = amm_code.is_none() || environment.is_none();
    let options = derive_servers(amm_code, environment, catalog);
    let result = reconcile(options, current, None);
    debug!(
        amm_code,
        environment = environment.map(Environment::as_str),
        disabled,
        options = result.options.len(),
        must_clear = result.must_clear,
        "server field evaluated"
    );
    ServerField { disabled, result }
}
