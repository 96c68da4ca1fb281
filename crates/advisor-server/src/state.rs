//! Application State

use std::sync::Arc;

use rust_decimal::Decimal;

use advisor_session::ReferenceBook;

/// Shared application state
///
/// Read-only after startup: each review request is an independent, stateless
/// unit of work over this data.
#[derive(Clone)]
pub struct AppState {
    /// Reference allocations, loaded once at startup
    pub reference: Arc<ReferenceBook>,

    /// Tolerance band for deviation analysis, in percentage points
    pub tolerance: Decimal,
}
