use leavewatch_core::KeywordConfig;

/// The two keyword tables the classifier scans: leave/closure/weather terms
/// and educational-context terms, each in English and Malayalam.
///
/// Table order is matching order, so verdicts are reproducible across runs.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    leave: Vec<String>,
    educational: Vec<String>,
}

impl KeywordSet {
    pub fn new(leave: Vec<String>, educational: Vec<String>) -> Self {
        Self { leave, educational }
    }

    pub fn leave(&self) -> &[String] {
        &self.leave
    }

    pub fn educational(&self) -> &[String] {
        &self.educational
    }
}

impl From<KeywordConfig> for KeywordSet {
    fn from(config: KeywordConfig) -> Self {
        Self::new(config.leave, config.educational)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        KeywordConfig::default().into()
    }
}
