// Module declarations
pub(crate) mod ledger_errors;
pub(crate) mod ledger_model;
pub(crate) mod ledger_service;
pub(crate) mod ledger_traits;

// Re-export the public interface
pub use ledger_model::{parse_amount, InvestmentOutcome};
pub use ledger_service::LedgerService;
pub use ledger_traits::LedgerServiceTrait;

// Re-export error types for convenience
pub use ledger_errors::{LedgerError, Result};
