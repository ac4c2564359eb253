//! Configuration file schema
//!
//! # Example
//!
//! ```toml
//! [[questions]]
//! text = "Did you get outside today?"
//! weight = 3
//!
//! [tui]
//! tick_ms = 250
//! show_help_on_start = false
//! ```

use kokoro_domain::{Question, QuestionId, Weight};
use serde::{Deserialize, Serialize};

/// A seed question as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileQuestion {
    /// Prompt text shown to the user
    pub text: String,
    /// Relative importance, 1..=5 (clamped on conversion)
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

/// TUI configuration from TOML (`[tui]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Event-loop tick interval in milliseconds (default: 250)
    pub tick_ms: u64,
    /// Open the help overlay on startup (default: false)
    pub show_help_on_start: bool,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            show_help_on_start: false,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Seed question set, answered fresh each run
    pub questions: Vec<FileQuestion>,
    /// TUI options
    pub tui: FileTuiConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        // The built-in daily check-in set with its original weights
        let questions = [
            ("Did you get some daylight today?", 3),
            ("Did you go to school or work today?", 3),
            ("Did you study or get some work done today?", 2),
            ("Did you check and reply to your messages today?", 1),
            ("Did you do any housework today?", 2),
            ("Did you cook for yourself today?", 2),
            ("Did you do your hair or get dressed today?", 2),
            ("Did you take a bath or shower today?", 2),
            ("Did you stretch or work out today?", 2),
        ]
        .into_iter()
        .map(|(text, weight)| FileQuestion {
            text: text.to_string(),
            weight,
        })
        .collect();

        Self {
            questions,
            tui: FileTuiConfig::default(),
        }
    }
}

impl FileConfig {
    /// Convert the seed list into domain questions with ids 1..=n
    ///
    /// Weights are clamped into 1..=5 here, so a sloppy config file can
    /// never put an invalid weight into the engine.
    pub fn seed_questions(&self) -> Vec<Question> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, file_question)| {
                Question::new(
                    QuestionId(index as u32 + 1),
                    file_question.text.clone(),
                    Weight::new(file_question.weight),
                )
            })
            .collect()
    }

    /// Collect human-readable warnings about suspicious config values
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (index, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                warnings.push(format!("questions[{index}]: empty prompt text"));
            }
            if !(1..=5).contains(&question.weight) {
                warnings.push(format!(
                    "questions[{index}]: weight {} outside 1..=5, clamping",
                    question.weight
                ));
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_question_set() {
        let config = FileConfig::default();
        assert_eq!(config.questions.len(), 9);
        assert_eq!(config.questions[0].weight, 3);
        assert_eq!(config.tui.tick_ms, 250);
        assert!(!config.tui.show_help_on_start);
    }

    #[test]
    fn test_seed_questions_assigns_sequential_ids() {
        let config = FileConfig::default();
        let seeded = config.seed_questions();
        assert_eq!(seeded.len(), 9);
        assert_eq!(seeded[0].id, QuestionId(1));
        assert_eq!(seeded[8].id, QuestionId(9));
        assert!(seeded.iter().all(|q| q.answer.is_none()));
    }

    #[test]
    fn test_seed_questions_clamps_weights() {
        let config: FileConfig = toml::from_str(
            r#"
[[questions]]
text = "over"
weight = 12

[[questions]]
text = "under"
weight = 0
"#,
        )
        .unwrap();

        let seeded = config.seed_questions();
        assert_eq!(seeded[0].weight, Weight::MAX);
        assert_eq!(seeded[1].weight, Weight::MIN);
    }

    #[test]
    fn test_weight_defaults_to_one() {
        let config: FileConfig = toml::from_str(
            r#"
[[questions]]
text = "no weight given"
"#,
        )
        .unwrap();
        assert_eq!(config.questions[0].weight, 1);
    }

    #[test]
    fn test_partial_tui_section_uses_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[tui]
tick_ms = 100
"#,
        )
        .unwrap();
        assert_eq!(config.tui.tick_ms, 100);
        assert!(!config.tui.show_help_on_start);
        // Omitting [[questions]] keeps the built-in set
        assert_eq!(config.questions.len(), 9);
    }

    #[test]
    fn test_validate_flags_bad_entries() {
        let config: FileConfig = toml::from_str(
            r#"
[[questions]]
text = "   "
weight = 3

[[questions]]
text = "ok"
weight = 9
"#,
        )
        .unwrap();

        let warnings = config.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("empty prompt text"));
        assert!(warnings[1].contains("outside 1..=5"));
    }

    #[test]
    fn test_validate_default_is_clean() {
        assert!(FileConfig::default().validate().is_empty());
    }
}
