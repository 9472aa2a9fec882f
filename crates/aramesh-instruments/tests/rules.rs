use aramesh_instruments::error::InstrumentError;
use aramesh_instruments::interpret::interpret;
use aramesh_instruments::rule::{Band, ScoringRule, TestRule};
use aramesh_instruments::{all_instruments, get_instrument};

const THREE_BANDS: &str = r#"{
    "method": "sum",
    "thresholds": [
        {"max_score": 13, "interpretation": "low"},
        {"max_score": 26, "interpretation": "moderate"},
        {"max_score": 40, "interpretation": "high"}
    ]
}"#;

#[test]
fn absent_rule_is_plain_sum() {
    let (rule, issue) = TestRule::parse(None);
    assert_eq!(rule, TestRule::sum());
    assert!(issue.is_none());

    let (rule, issue) = TestRule::parse(Some("   "));
    assert_eq!(rule, TestRule::sum());
    assert!(issue.is_none());
}

#[test]
fn reverse_rule_defaults_max_option_value() {
    let (rule, _) = TestRule::parse(Some(r#"{"method":"reverse","reverse_questions":[1]}"#));
    match rule.scoring() {
        ScoringRule::ReverseWeighted {
            reverse_questions,
            max_option_value,
        } => {
            assert!(reverse_questions.contains(&1));
            assert_eq!(*max_option_value, 3);
        }
        other => panic!("expected reverse rule, got {other:?}"),
    }
}

#[test]
fn bands_are_presorted_ascending() {
    let raw = r#"{"thresholds":[
        {"max_score": 40, "interpretation": "high"},
        {"max_score": 13, "interpretation": "low"},
        {"max_score": 26, "interpretation": "moderate"}
    ]}"#;
    let (rule, _) = TestRule::parse(Some(raw));
    let maxes: Vec<i64> = rule.bands().iter().map(|b| b.max_score).collect();
    assert_eq!(maxes, vec![13, 26, 40]);
}

#[test]
fn bands_without_threshold_are_dropped() {
    let raw = r#"{"thresholds":[
        {"interpretation": "orphan"},
        {"max_score": 10, "interpretation": "kept"}
    ]}"#;
    let (rule, _) = TestRule::parse(Some(raw));
    assert_eq!(
        rule.bands(),
        &[Band {
            max_score: 10,
            text: "kept".to_string()
        }]
    );
}

#[test]
fn interpretation_picks_the_tightest_band() {
    let (rule, _) = TestRule::parse(Some(THREE_BANDS));
    assert_eq!(interpret(&rule, 10), "low");
    assert_eq!(interpret(&rule, 13), "low");
    assert_eq!(interpret(&rule, 14), "moderate");
    assert_eq!(interpret(&rule, 35), "high");
}

#[test]
fn score_above_every_band_is_uninterpreted() {
    let (rule, _) = TestRule::parse(Some(THREE_BANDS));
    assert_eq!(interpret(&rule, 41), "");
}

#[test]
fn interpretation_is_idempotent_and_leaves_the_rule_untouched() {
    let (rule, _) = TestRule::parse(Some(THREE_BANDS));
    let before = rule.clone();

    let first = interpret(&rule, 20);
    let second = interpret(&rule, 20);
    assert_eq!(first, second);
    assert_eq!(rule, before);
}

#[test]
fn builtin_instruments_are_coherent() {
    for instrument in all_instruments() {
        let def = instrument.definition();
        let questions = instrument.questions(def.id);

        assert_eq!(def.question_count as usize, questions.len());
        let (rule, issue) = TestRule::parse(def.rule.as_deref());
        assert!(issue.is_none(), "{} rule has issues", def.code);
        assert!(!rule.bands().is_empty());
        // The top band covers exactly the maximum achievable score.
        assert_eq!(rule.bands().last().map(|b| b.max_score), Some(def.max_score));
    }
}

#[test]
fn unknown_instrument_code_is_an_error() {
    assert!(matches!(
        get_instrument("GAD7"),
        Err(InstrumentError::UnknownInstrument(code)) if code == "GAD7"
    ));
}

#[test]
fn pss10_is_reverse_weighted_on_items_3_and_5() {
    let pss10 = get_instrument("PSS10").expect("PSS10 registered");
    let def = pss10.definition();
    let (rule, _) = TestRule::parse(def.rule.as_deref());

    match rule.scoring() {
        ScoringRule::ReverseWeighted {
            reverse_questions, ..
        } => {
            let flagged: Vec<u32> = reverse_questions.iter().copied().collect();
            assert_eq!(flagged, vec![3, 5]);
        }
        other => panic!("expected reverse rule, got {other:?}"),
    }
}
