//! Social-login contract validators.
//!
//! Checks OAuth provider credentials, callback redirect URIs, and the shape
//! of the structured output produced by the social-auth workflow.

pub mod credentials;
pub mod output_schema;
pub mod providers;
pub mod redirect_uri;

pub use credentials::{CredentialsResult, EnvMapping, TranslateProviderCredentials};
pub use output_schema::{OutputSchemaResult, ValidateOutputSchema};
pub use providers::Provider;
pub use redirect_uri::{RedirectUriResult, ValidRedirect, ValidateRedirectUri};
