//! Payment-gateway contract validators.
//!
//! Flutterwave and Paystack webhook and transaction-verification checks.
//! Nothing here talks to a provider or computes a signature; the validators
//! only confirm that an integration has wired the right fields together.

pub mod flutterwave;
pub mod order;
pub mod paystack;

pub use flutterwave::{
    CheckWebhookSignatureMode, SignatureModeResult, ValidateVerifyResponse, VerifyResponseResult,
};
pub use order::AlreadyPaid;
pub use paystack::{
    CheckWebhookContract, PaymentContractResult, ValidatePaymentContract, WebhookContractResult,
};
