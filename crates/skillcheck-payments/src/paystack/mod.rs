//! Paystack webhook and transaction-verify contracts.

pub mod payment_contract;
pub mod webhook_contract;

pub use payment_contract::{PaymentContractResult, ValidatePaymentContract};
pub use webhook_contract::{CheckWebhookContract, WebhookContractResult};
