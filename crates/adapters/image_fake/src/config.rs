//! Fake classifier configuration.

use serde::Deserialize;

/// How the fake classifier answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierMode {
    /// Draw a random confidence for every image.
    #[default]
    Random,
    /// Report a cat in every image.
    AlwaysCat,
    /// Never report a cat.
    NeverCat,
}

impl std::str::FromStr for ClassifierMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "always_cat" => Ok(Self::AlwaysCat),
            "never_cat" => Ok(Self::NeverCat),
            other => Err(format!("unknown classifier mode: {other}")),
        }
    }
}

/// Configuration for the fake classifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Answering strategy.
    pub mode: ClassifierMode,
}
