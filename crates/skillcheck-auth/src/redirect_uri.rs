use serde::Serialize;
use skillcheck_core::{
    Document, EmptyResult, Envelope, RuleError, ValidationReport, Validator, is_truthy, stringify,
};
use url::Url;

pub const TOOL: &str = "validate-redirect-uri";

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];
const CALLBACK_SEGMENT: &str = "/callback";

/// Checks that an OAuth callback URI is safe and points at the backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateRedirectUri;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RedirectUriResult {
    Valid(ValidRedirect),
    Rejected(EmptyResult),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidRedirect {
    pub backend_host: Option<String>,
    pub redirect_host: Option<String>,
    pub redirect_path: String,
    pub action: &'static str,
}

/// Scheme, host, and path of a URL.
///
/// The path is always the raw text between the authority and any `?`/`#`,
/// never the normalized `Url::path`. When `url` rejects the input (bad port,
/// no scheme), scheme and host come from splitting the raw text instead.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlParts {
    scheme: String,
    host: Option<String>,
    path: String,
}

impl UrlParts {
    fn parse(raw: &str) -> Self {
        let split = Self::split(raw);
        match Url::parse(raw) {
            Ok(url) => Self {
                scheme: url.scheme().to_string(),
                host: url.host_str().map(str::to_string),
                path: split.path,
            },
            Err(err) => {
                tracing::debug!(event = "url_unparsed", error = %err);
                split
            }
        }
    }

    /// Split `scheme:[//authority]path[?query][#fragment]` without validating
    /// any component.
    fn split(raw: &str) -> Self {
        let (scheme, rest) = match raw.split_once(':') {
            Some((scheme, rest)) if is_scheme(scheme) => (scheme.to_ascii_lowercase(), rest),
            _ => (String::new(), raw),
        };
        let rest = rest.split(['?', '#']).next().unwrap_or_default();

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => match after.find('/') {
                Some(idx) => (Some(&after[..idx]), &after[idx..]),
                None => (Some(after), ""),
            },
            None => (None, rest),
        };

        Self {
            scheme,
            host: authority.and_then(authority_host),
            path: path.to_string(),
        }
    }

    fn is_web(&self) -> bool {
        matches!(self.scheme.as_str(), "http" | "https")
    }

    fn is_local(&self) -> bool {
        self.host
            .as_deref()
            .is_some_and(|host| LOCAL_HOSTS.contains(&host))
    }
}

fn is_scheme(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Host part of an authority: userinfo and port dropped, IPv6 brackets
/// removed, lowercased.
fn authority_host(authority: &str) -> Option<String> {
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = match host_port.strip_prefix('[') {
        Some(bracketed) => bracketed.split(']').next().unwrap_or_default(),
        None => host_port.split(':').next().unwrap_or_default(),
    };
    (!host.is_empty()).then(|| host.to_ascii_lowercase())
}

impl Validator for ValidateRedirectUri {
    type Output = RedirectUriResult;

    fn tool(&self) -> &'static str {
        TOOL
    }

    fn evaluate(&self, input: &Document) -> Envelope<RedirectUriResult> {
        let mut report = ValidationReport::default();
        let rejected = RedirectUriResult::Rejected(EmptyResult {});

        let backend_base_url = input.get("backend_base_url").filter(|value| is_truthy(value));
        let redirect_uri = input.get("redirect_uri").filter(|value| is_truthy(value));

        if backend_base_url.is_none() {
            report.push_error(RuleError::missing_field(
                "backend_base_url",
                "Missing backend_base_url",
                "Provide backend_base_url (e.g., https://api.example.com).",
            ));
        }
        if redirect_uri.is_none() {
            report.push_error(RuleError::missing_field(
                "redirect_uri",
                "Missing redirect_uri",
                "Provide redirect_uri exactly as configured with provider.",
            ));
        }
        let (Some(backend_base_url), Some(redirect_uri)) = (backend_base_url, redirect_uri) else {
            return Envelope::from_report(TOOL, report, rejected);
        };

        let backend = UrlParts::parse(&stringify(backend_base_url));
        let redirect = UrlParts::parse(&stringify(redirect_uri));

        if !backend.is_web() {
            report.push_error(RuleError::new(
                "INVALID_URL",
                "backend_base_url must include http/https scheme",
                "backend_base_url",
                "Use a fully qualified URL.",
            ));
        }
        if !redirect.is_web() {
            report.push_error(RuleError::new(
                "INVALID_URL",
                "redirect_uri must include http/https scheme",
                "redirect_uri",
                "Use a fully qualified callback URL.",
            ));
        }

        if redirect.scheme != "https" && !redirect.is_local() {
            report.push_error(RuleError::new(
                "INSECURE_REDIRECT",
                "redirect_uri must use https outside localhost",
                "redirect_uri",
                "Use HTTPS callback URLs in non-local environments.",
            ));
        }

        if let (Some(backend_host), Some(redirect_host)) = (&backend.host, &redirect.host) {
            if backend_host != redirect_host {
                report.push_error(RuleError::new(
                    "DOMAIN_MISMATCH",
                    "redirect_uri host does not match backend host",
                    "redirect_uri",
                    "Point redirect_uri to backend callback domain, not frontend domain.",
                ));
            }
        }

        if !redirect.path.contains(CALLBACK_SEGMENT) {
            report.push_error(RuleError::new(
                "UNEXPECTED_PATH",
                "redirect_uri path should include callback endpoint",
                "redirect_uri",
                "Use a provider callback path such as /auth/{provider}/callback.",
            ));
        }

        if !report.is_ok() {
            return Envelope::from_report(TOOL, report, rejected);
        }

        let result = RedirectUriResult::Valid(ValidRedirect {
            backend_host: backend.host,
            redirect_host: redirect.host,
            redirect_path: redirect.path,
            action: "redirect-uri-valid",
        });
        Envelope::from_report(TOOL, report, result)
    }
}
