//! Mock integrations with the tax office (single touch payroll), the super
//! clearing house, and the accounting platform.

mod client;
mod router;
mod simulated;

#[cfg(test)]
mod tests;

pub use client::{
    IntegrationError, LodgementState, PayrollIntegrationClient, StpEmployeePayment, StpPayEvent,
    StpReceipt, StpReceiptStatus, SuperConfirmation, SuperContribution, SuperSubmission,
    XeroEmployee, XeroPayrun,
};
pub use router::{integration_router, IntegrationState, LODGEMENT_ROLES};
pub use simulated::{SimulatedPayrollClient, DEFAULT_LEDGER_CAPACITY};
