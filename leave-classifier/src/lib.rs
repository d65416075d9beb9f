pub mod keywords;

pub use keywords::KeywordSet;

use leavewatch_core::Classification;

/// Decides whether free text announces an educational leave.
///
/// Matching is plain case-insensitive substring containment over the two
/// keyword tables. There is no tokenization, stemming or negation handling,
/// and no word-boundary check: "rain" also matches inside "retrain". That
/// imprecision is part of the verdict contract and must not change without
/// changing every downstream consumer.
#[derive(Debug, Clone)]
pub struct LeaveClassifier {
    keywords: KeywordSet,
}

impl LeaveClassifier {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    /// Classify a post message. Absent or empty text yields the all-false
    /// verdict without scanning.
    ///
    /// `keywords` in the result lists every matched literal, leave table
    /// first, in declaration order. A literal present in both tables shows up
    /// twice; a literal occurring repeatedly in the text shows up once.
    /// `likely_leave` is two independent scans ANDed: at least one leave term
    /// and at least one educational term matched.
    pub fn classify(&self, text: Option<&str>) -> Classification {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Classification::default();
        };
        let text = text.to_lowercase();

        let mut found = Vec::new();
        for word in self
            .keywords
            .leave()
            .iter()
            .chain(self.keywords.educational())
        {
            if text.contains(&word.to_lowercase()) {
                found.push(word.clone());
            }
        }

        let has_leave_keywords = self
            .keywords
            .leave()
            .iter()
            .any(|w| text.contains(&w.to_lowercase()));
        let has_educational_keywords = self
            .keywords
            .educational()
            .iter()
            .any(|w| text.contains(&w.to_lowercase()));

        Classification {
            has_leave_info: !found.is_empty(),
            keywords: found,
            likely_leave: has_leave_keywords && has_educational_keywords,
        }
    }
}
