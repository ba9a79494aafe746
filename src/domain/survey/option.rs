//! Survey options - the alternatives being compared.

use serde::{Deserialize, Serialize};

/// One alternative under evaluation.
///
/// Identified by its 0-based position in the survey's option sequence;
/// presented to respondents 1-based ("Вариант 1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyOption {
    index: usize,
    label: String,
}

impl SurveyOption {
    /// Returns the 0-based index, which is the option's identity.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the descriptive label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the 1-based number shown to respondents.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Returns the short display name, e.g. "Вариант 2".
    pub fn display_name(&self) -> String {
        format!("Вариант {}", self.number())
    }
}

/// Builds the option sequence from ordered labels.
///
/// Order is significant: the position of each label becomes its index.
pub fn init_options<I, S>(labels: I) -> Vec<SurveyOption>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| SurveyOption {
            index,
            label: label.into(),
        })
        .collect()
}
