//! CLI command handlers
//!
//! This module contains all the command handlers for the mbti-scorer CLI

use std::io::Read;

use tracing::info;

use crate::cli::output::*;
use crate::personality::describe;
use crate::personality::Dimension;
use crate::personality::ScoringMode;
use crate::personality::TraitScorer;
use crate::AppConfig;
use crate::MbtiError;
use crate::Result;

/// Handle dimension command
pub fn handle_dimension_command(index: usize, json: bool) -> Result<()> {
    let dimension = Dimension::for_question(index);
    if json {
        print_json(&serde_json::json!({ "index": index, "dimension": dimension }))
    } else {
        print_dimension(index, dimension);
        Ok(())
    }
}

/// Handle answer command
pub fn handle_answer_command(
    scorer: &TraitScorer<'_>,
    dimension: Dimension,
    text: &str,
    json: bool,
) -> Result<()> {
    let score = scorer.score_answer(text, dimension);
    info!("Scored answer for {}: {}", dimension, score.side);

    if json {
        print_json(&score)
    } else {
        print_answer_score(&score);
        Ok(())
    }
}

/// Handle session command
pub fn handle_session_command(
    scorer: &TraitScorer<'_>,
    input: &str,
    partial: bool,
    json: bool,
) -> Result<()> {
    let content = read_input(input)?;
    let answers = parse_answers(&content)?;
    info!("Loaded {} answers from {}", answers.len(), input);

    let mode = if partial {
        ScoringMode::Partial
    } else {
        ScoringMode::Final
    };
    let score = scorer.score_session(&answers, mode);
    info!("Session scored as {}", score.label);

    if json {
        print_json(&score)
    } else {
        print_session_score(&score, describe(&score.label));
        Ok(())
    }
}

/// Handle describe command
pub fn handle_describe_command(label: &str, json: bool) -> Result<()> {
    let description = describe(label)
        .ok_or_else(|| MbtiError::UnknownType(label.to_string()))?;

    if json {
        print_json(description)
    } else {
        print_description(description);
        Ok(())
    }
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig, json: bool) -> Result<()> {
    if json {
        print_json(config)
    } else {
        print_config(config);
        Ok(())
    }
}

/// Read a file, or stdin when `input` is "-"
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Parse a JSON array of answers
///
/// Entries that are not strings (`null`, numbers, objects, ...) become `None`:
/// they score nothing but keep their question position.
pub fn parse_answers(content: &str) -> Result<Vec<Option<String>>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(content)?;
    Ok(entries
        .into_iter()
        .map(|entry| entry.as_str().map(str::to_owned))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers_with_nulls() {
        let answers = parse_answers(r#"["혼자 있을래", null, ""]"#).unwrap();
        assert_eq!(
            answers,
            vec![Some("혼자 있을래".to_string()), None, Some(String::new())]
        );
    }

    #[test]
    fn test_parse_answers_non_text_entries_keep_positions() {
        let answers = parse_answers(r#"["혼자 있을래", 3, {"x": 1}, true, "계획"]"#).unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers[0].as_deref(), Some("혼자 있을래"));
        assert!(answers[1..4].iter().all(Option::is_none));
        assert_eq!(answers[4].as_deref(), Some("계획"));
    }

    #[test]
    fn test_non_text_entries_still_advance_dimensions() {
        let answers = parse_answers(r#"[1, 2, 3, "만약에 미래에는"]"#).unwrap();
        let result = TraitScorer::default().score_session(&answers, ScoringMode::Partial);
        assert_eq!(result.answered, 4);
        assert_eq!(result.scores.pair(Dimension::Ei), (0, 0));
        assert!(result.scores.pair(Dimension::Sn).1 > 0);
    }

    #[test]
    fn test_parse_answers_rejects_non_array() {
        let result = parse_answers(r#"{"answers": []}"#);
        assert!(matches!(result, Err(MbtiError::Serialization(_))));
    }

    #[test]
    fn test_read_input_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[null]").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(read_input(&path).unwrap(), "[null]");
    }

    #[test]
    fn test_describe_unknown_label() {
        let err = handle_describe_command("XXXX", false).unwrap_err();
        assert!(matches!(err, MbtiError::UnknownType(ref label) if label == "XXXX"));
        assert_eq!(err.to_string(), "Unknown MBTI type: XXXX");
    }
}
