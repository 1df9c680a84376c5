//! Flutterwave webhook and verify-endpoint contracts.

pub mod signature_mode;
pub mod verify_response;

pub use signature_mode::{CheckWebhookSignatureMode, SignatureModeResult};
pub use verify_response::{ValidateVerifyResponse, VerifyResponseResult};
