//! Integration tests for test sessions and reports

use std::io::Write;

use mbti_scorer::personality::TestSession;
use mbti_scorer::personality::TraitScorer;
use mbti_scorer::personality::QUESTION_COUNT;
use mbti_scorer::AppConfig;
use mbti_scorer::MbtiError;

const ANSWERS: [&str; QUESTION_COUNT] = [
    "혼자 조용히 책 읽을래",
    "집에서 쉬고 싶어",
    "이어폰 끼고 혼자 걸을래",
    "실제로 해봤던 방법대로 할래",
    "경험상 그게 제일 현실적이야",
    "지금 당장 할 수 있는 것부터",
    "왜 그런지 이유가 뭐야",
    "따져보면 보험 처리가 먼저야",
    "원인부터 분석해보자",
    "미리 계획 세워서 예약해둘래",
    "스케줄 정리부터 할게",
    "체크리스트 만들어서 준비해",
];

fn scorer() -> TraitScorer<'static> {
    TraitScorer::default()
}

#[test]
fn test_full_session_walkthrough() {
    let scorer = scorer();
    let mut session = TestSession::new();

    for (index, answer) in ANSWERS.iter().enumerate() {
        assert_eq!(session.current_question(), Some(index));
        let feedback = session.submit(&scorer, index, *answer).unwrap();
        assert_eq!(Some(feedback.dimension), mbti_scorer::dimension_for_question(index));
    }
    assert!(session.is_complete());
    assert_eq!(session.current_question(), None);

    let report = session.finalize(&scorer).unwrap();
    assert_eq!(report.mbti, "ISTJ");
    assert_eq!(report.session_id, session.id());
    assert!(report.timestamp >= session.created_at());
    assert_eq!(report.description.map(|d| d.label), Some("ISTJ"));
}

#[test]
fn test_progress_snapshots() {
    let scorer = scorer();
    let mut session = TestSession::new();
    let mut labels = Vec::new();

    for (index, answer) in ANSWERS.iter().enumerate() {
        session.record_answer(index, *answer).unwrap();
        labels.push(session.progress(&scorer).label);
    }

    assert_eq!(labels[1], "XXXX");
    assert_eq!(labels[2], "IXXX");
    assert_eq!(labels[5], "ISXX");
    assert_eq!(labels[8], "ISTX");
    assert_eq!(labels[11], "ISTJ");
}

#[test]
fn test_out_of_order_answers() {
    let scorer = scorer();
    let mut session = TestSession::new();
    session.record_answer(5, ANSWERS[5]).unwrap();

    assert_eq!(session.current_question(), Some(0));
    assert_eq!(session.answered(), 1);

    // The gap before question 5 still counts, so EI and SN unlock
    let progress = session.progress(&scorer);
    assert_eq!(progress.answered, 6);
    assert_eq!(progress.label, "ISXX");
    assert_eq!(progress.scores.pair(mbti_scorer::Dimension::Ei), (0, 0));
}

#[test]
fn test_finalize_incomplete_session() {
    let mut session = TestSession::new();
    for (index, answer) in ANSWERS.iter().enumerate().skip(1) {
        session.record_answer(index, *answer).unwrap();
    }

    match session.finalize(&scorer()) {
        Err(MbtiError::SessionNotCompleted { answered, required }) => {
            assert_eq!(answered, 11);
            assert_eq!(required, QUESTION_COUNT);
        }
        other => panic!("expected SessionNotCompleted, got {other:?}"),
    }
}

#[test]
fn test_submit_rejects_unknown_question() {
    let mut session = TestSession::new();
    let err = session.submit(&scorer(), QUESTION_COUNT, "extra").unwrap_err();
    assert!(matches!(err, MbtiError::QuestionOutOfRange { .. }));
    assert_eq!(session.answered(), 0);
}

#[test]
fn test_report_round_trips_to_json() {
    let mut session = TestSession::new();
    for (index, answer) in ANSWERS.iter().enumerate() {
        session.record_answer(index, *answer).unwrap();
    }
    let report = session.finalize(&scorer()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["mbti"], "ISTJ");
    assert_eq!(value["session_id"], session.id().to_string());
    assert_eq!(value["confidence"].as_object().unwrap().len(), 4);
    assert_eq!(value["description"]["hashtags"][0], "#원칙주의");
}

#[test]
fn test_config_tie_break_drives_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[scoring]\ntie_break = \"first_trait\"").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    let lexicon = config.lexicon().unwrap();
    let scorer = TraitScorer::new(&lexicon, config.tie_break());

    let mut session = TestSession::new();
    for index in 0..QUESTION_COUNT {
        session
            .record_answer(index, "the weather report mentions light clouds")
            .unwrap();
    }
    assert_eq!(session.finalize(&scorer).unwrap().mbti, "ESTJ");
}
