use serde::{Serialize, Serializer};
use serde_json::Value;
use skillcheck_core::{
    Document, EmptyResult, Envelope, RuleError, ValidationReport, Validator, as_object_or_empty,
    is_truthy, stringify,
};

use crate::providers::Provider;

pub const TOOL: &str = "translate-provider-credentials";

/// Maps provider credentials onto the environment variables a deployment
/// should set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranslateProviderCredentials;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CredentialsResult {
    Translated {
        provider: String,
        env_mapping: EnvMapping,
    },
    Incomplete {
        provider: String,
    },
    Rejected(EmptyResult),
}

/// Environment variable assignments, serialized as a JSON object in the
/// provider's credential order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvMapping(Vec<(String, String)>);

impl EnvMapping {
    fn insert(&mut self, env: &str, value: String) {
        self.0.push((env.to_string(), value));
    }

    pub fn get(&self, env: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == env)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for EnvMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(env, value)| (env, value)))
    }
}

impl Validator for TranslateProviderCredentials {
    type Output = CredentialsResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<CredentialsResult> {
        let mut report = ValidationReport::default();

        let provider_name = normalize_provider(input.get("provider"));
        let provider = Provider::from_name(&provider_name);
        if provider.is_none() {
            report.push_error(RuleError::new(
                "UNSUPPORTED_PROVIDER",
                format!("Unsupported provider: {provider_name}"),
                "provider",
                format!("Use one of: {}.", Provider::supported_names()),
            ));
        }

        let raw_credentials = input.get("credentials");
        if !raw_credentials.is_some_and(Value::is_object) {
            report.push_error(RuleError::new(
                "INVALID_CREDENTIALS",
                "credentials must be an object",
                "credentials",
                "Provide provider credentials as a JSON object.",
            ));
        }

        let Some(provider) = provider.filter(|_| report.is_ok()) else {
            return Envelope::from_report(TOOL, report, CredentialsResult::Rejected(EmptyResult {}));
        };

        let credentials = as_object_or_empty(raw_credentials);
        let mut env_mapping = EnvMapping::default();
        for (key, env) in provider.credentials() {
            match credentials.get(*key).filter(|value| is_truthy(value)) {
                Some(value) => {
                    env_mapping.insert(env, stringify(value));
                }
                None => report.push_error(RuleError::new(
                    "MISSING_CREDENTIAL",
                    format!("Missing required credential: {key}"),
                    format!("credentials.{key}"),
                    format!("Provide `{key}` for provider `{provider}`."),
                )),
            }
        }

        let result = if report.is_ok() {
            CredentialsResult::Translated {
                provider: provider_name,
                env_mapping,
            }
        } else {
            CredentialsResult::Incomplete {
                provider: provider_name,
            }
        };
        Envelope::from_report(TOOL, report, result)
    }
}

fn normalize_provider(value: Option<&Value>) -> String {
    value
        .map(stringify)
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
