use serde::Deserialize;
use std::str::FromStr;

/// Settings of a [`ValidateBody`](super::ValidateBody) stage.
///
/// Required keys are case-sensitive top-level JSON field names. They are stored as plain
/// strings, the same representation the parsed body uses for its keys, and duplicates are
/// dropped keeping the order of first declaration.
///
/// The config can be built in code or deserialized:
///
/// ```
/// use micro_validate::ValidateBodyConfig;
///
/// let built = ValidateBodyConfig::builder().required_key("product_id").required_key("quantity").build();
/// let parsed: ValidateBodyConfig = r#"{ "required_keys": ["product_id", "quantity"] }"#.parse().unwrap();
///
/// assert_eq!(built, parsed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct ValidateBodyConfig {
    required_keys: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    required_keys: Vec<String>,
}

impl From<RawConfig> for ValidateBodyConfig {
    fn from(raw: RawConfig) -> Self {
        Self::builder().required_keys(raw.required_keys).build()
    }
}

impl ValidateBodyConfig {
    pub fn builder() -> ValidateBodyConfigBuilder {
        ValidateBodyConfigBuilder::new()
    }

    /// Shorthand for a config that only lists required keys.
    pub fn with_required_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::builder().required_keys(keys).build()
    }

    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }
}

impl FromStr for ValidateBodyConfig {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Default)]
pub struct ValidateBodyConfigBuilder {
    required_keys: Vec<String>,
}

impl ValidateBodyConfigBuilder {
    fn new() -> Self {
        Self { required_keys: vec![] }
    }

    #[must_use]
    pub fn required_key(mut self, key: impl Into<String>) -> Self {
        self.required_keys.push(key.into());
        self
    }

    #[must_use]
    pub fn required_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.required_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ValidateBodyConfig {
        let mut required_keys: Vec<String> = Vec::with_capacity(self.required_keys.len());
        for key in self.required_keys {
            if !required_keys.contains(&key) {
                required_keys.push(key);
            }
        }
        ValidateBodyConfig { required_keys }
    }
}
