//! Survey configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::storage::DEFAULT_MAX_RESPONSES;
use crate::domain::survey::{PairwiseSurvey, ScoringMode, MIN_OPTIONS};

/// Separator between option labels in `options`.
///
/// Labels may contain commas, so a semicolon is used.
pub const OPTION_SEPARATOR: char = ';';

/// The four construction alternatives of the shopping-centre study.
pub const DEFAULT_OPTIONS: [&str; 4] = [
    "Достройка одноэтажного неиспользуемого помещения в центральном районе города",
    "Строительство нового супермаркета, требующее крупных капиталовложений, с выгодным расположением",
    "Строительство супермаркета за чертой города с небольшими затратами",
    "Строительство торгового центра на окраине города (район оснащен развитой транспортной сетью и паркингом)",
];

/// Survey configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// Heading shown above the form
    #[serde(default = "default_title")]
    pub title: String,

    /// Elicitation methodology (`frequency` or `fixed_split`)
    #[serde(default)]
    pub mode: ScoringMode,

    /// Option labels in display order (semicolon-separated)
    pub options: Option<String>,

    /// Responses held in memory before the least recently touched is dropped
    #[serde(default = "default_max_responses")]
    pub max_responses: usize,
}

impl SurveyConfig {
    /// Option labels, falling back to the default study.
    pub fn option_labels(&self) -> Vec<String> {
        match &self.options {
            Some(raw) => raw
                .split(OPTION_SEPARATOR)
                .map(|label| label.trim().to_string())
                .collect(),
            None => DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Validate survey configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptySurveyTitle);
        }
        let labels = self.option_labels();
        if labels.len() < MIN_OPTIONS {
            return Err(ValidationError::TooFewOptions {
                min: MIN_OPTIONS,
                actual: labels.len(),
            });
        }
        if self.max_responses == 0 {
            return Err(ValidationError::InvalidResponseLimit);
        }
        if let Some(position) = labels.iter().position(|label| label.is_empty()) {
            return Err(ValidationError::BlankOptionLabel {
                position: position + 1,
            });
        }
        Ok(())
    }

    /// Builds the survey this configuration describes.
    pub fn build_survey(&self) -> Result<PairwiseSurvey, ValidationError> {
        self.validate()?;
        let labels = self.option_labels();
        let count = labels.len();
        PairwiseSurvey::new(self.title.clone(), labels, self.mode).map_err(|_| {
            ValidationError::TooFewOptions {
                min: MIN_OPTIONS,
                actual: count,
            }
        })
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            mode: ScoringMode::default(),
            options: None,
            max_responses: default_max_responses(),
        }
    }
}

fn default_max_responses() -> usize {
    DEFAULT_MAX_RESPONSES
}

fn default_title() -> String {
    "Оценка вариантов по строительству торгового центра".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_config_defaults() {
        let config = SurveyConfig::default();
        assert_eq!(config.mode, ScoringMode::Frequency);
        assert_eq!(config.option_labels().len(), 4);
        assert_eq!(config.max_responses, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_survey_has_six_pairs() {
        let survey = SurveyConfig::default().build_survey().unwrap();
        assert_eq!(survey.pair_count(), 6);
        assert_eq!(
            survey.title(),
            "Оценка вариантов по строительству торгового центра"
        );
    }

    #[test]
    fn test_options_split_on_semicolons() {
        let config = SurveyConfig {
            options: Some("Alpha, with comma; Beta ;Gamma".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.option_labels(),
            vec!["Alpha, with comma", "Beta", "Gamma"]
        );
    }

    #[test]
    fn test_validation_too_few_options() {
        let config = SurveyConfig {
            options: Some("Only one".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TooFewOptions { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_validation_blank_label() {
        let config = SurveyConfig {
            options: Some("A;;C".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BlankOptionLabel { position: 2 })
        ));
    }

    #[test]
    fn test_validation_zero_response_limit() {
        let config = SurveyConfig {
            max_responses: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResponseLimit)
        ));
    }

    #[test]
    fn test_validation_empty_title() {
        let config = SurveyConfig {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_survey_keeps_mode() {
        let config = SurveyConfig {
            mode: ScoringMode::FixedSplit,
            options: Some("A;B".to_string()),
            ..Default::default()
        };
        let survey = config.build_survey().unwrap();
        assert_eq!(survey.mode(), ScoringMode::FixedSplit);
        assert_eq!(survey.pair_count(), 1);
    }
}
