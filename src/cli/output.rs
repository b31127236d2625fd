//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `mbti-scorer` CLI

use serde::Serialize;

use crate::personality::AnswerScore;
use crate::personality::Dimension;
use crate::personality::SessionScore;
use crate::personality::TypeDescription;
use crate::personality::QUESTIONS_PER_DIMENSION;
use crate::AppConfig;
use crate::Result;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the dimension a question index belongs to
pub fn print_dimension(index: usize, dimension: Option<Dimension>) {
    match dimension {
        Some(dimension) => {
            let (first, second) = dimension.traits();
            let slot = index % QUESTIONS_PER_DIMENSION + 1;
            println!("❓ Question {index}: {dimension} ({first} vs {second}), question {slot} of {QUESTIONS_PER_DIMENSION}");
        }
        None => println!("❓ Question {index}: no dimension (past the last question)"),
    }
}

/// Print a single answer's score
pub fn print_answer_score(score: &AnswerScore) {
    println!("📝 Dimension: {}", score.dimension);
    for (side, total) in &score.scores {
        println!("  {side}: {total}");
    }
    println!("  ➡️  Leaning: {} ({})", score.side, score.score);

    let mut stages = Vec::new();
    if score.stages.lexicon {
        stages.push("lexicon");
    }
    if score.stages.heuristic {
        stages.push("heuristic");
    }
    if score.stages.style {
        stages.push("style");
    }
    if stages.is_empty() {
        println!("  Stages: none");
    } else {
        println!("  Stages: {}", stages.join(", "));
    }
}

/// Print a session result
pub fn print_session_score(score: &SessionScore, description: Option<&TypeDescription>) {
    println!("🧭 MBTI: {}", score.label);
    println!("  Answers consumed: {}", score.answered);
    println!();

    println!("📊 Scores:");
    for verdict in &score.verdicts {
        let (first, second) = verdict.dimension.traits();
        let (first_total, second_total) = score.scores.pair(verdict.dimension);
        print!(
            "  {}: {first}={first_total} {second}={second_total} -> {}",
            verdict.dimension, verdict.winner
        );
        if score.confidence.is_some() {
            print!(" ({:.1}%)", verdict.confidence);
        }
        println!();
    }

    if let Some(description) = description {
        println!();
        print_description(description);
    }
}

/// Print a type description
pub fn print_description(description: &TypeDescription) {
    println!("✨ {} · {}", description.label, description.title);
    println!("  {}", description.hashtags.join(" "));
    println!("  {}", description.summary);
    println!("  Keywords: {}", description.keywords.join(", "));
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 MBTI Scorer Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.log_level());
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🧮 Scoring:");
    println!("  Tie break: {:?}", config.tie_break());
    match config.lexicon_path() {
        Some(path) => println!("  Lexicon: {}", path.display()),
        None => println!("  Lexicon: built-in"),
    }
}
