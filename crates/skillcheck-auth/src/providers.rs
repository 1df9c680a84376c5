use std::fmt;

/// OAuth providers with a known credential contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Github,
    Linkedin,
    Apple,
    Twitter,
}

impl Provider {
    /// Every supported provider, in documentation order.
    pub const ALL: [Provider; 5] = [
        Provider::Google,
        Provider::Github,
        Provider::Linkedin,
        Provider::Apple,
        Provider::Twitter,
    ];

    /// Match an already-normalized (trimmed, lowercase) provider name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Github => "github",
            Provider::Linkedin => "linkedin",
            Provider::Apple => "apple",
            Provider::Twitter => "twitter",
        }
    }

    /// Required credential keys paired with the environment variable each
    /// one should populate.
    pub fn credentials(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Provider::Google => &[
                ("client_id", "GOOGLE_CLIENT_ID"),
                ("client_secret", "GOOGLE_CLIENT_SECRET"),
            ],
            Provider::Github => &[
                ("client_id", "GITHUB_CLIENT_ID"),
                ("client_secret", "GITHUB_CLIENT_SECRET"),
            ],
            Provider::Linkedin => &[
                ("client_id", "LINKEDIN_CLIENT_ID"),
                ("client_secret", "LINKEDIN_CLIENT_SECRET"),
            ],
            Provider::Apple => &[
                ("client_id", "APPLE_CLIENT_ID"),
                ("team_id", "APPLE_TEAM_ID"),
                ("key_id", "APPLE_KEY_ID"),
                ("private_key", "APPLE_PRIVATE_KEY"),
            ],
            Provider::Twitter => &[
                ("client_id", "TWITTER_CLIENT_ID"),
                ("client_secret", "TWITTER_CLIENT_SECRET"),
            ],
        }
    }

    /// Comma-separated list of supported names, for remediation text.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|provider| provider.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
