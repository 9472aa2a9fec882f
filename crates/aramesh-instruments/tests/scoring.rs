use uuid::Uuid;

use aramesh_core::models::test::{Question, TestDefinition};
use aramesh_instruments::rule::TestRule;
use aramesh_instruments::scoring::{ScoringIssue, evaluate, score};

fn test_def(question_count: u32, max_score: i64, rule: Option<&str>) -> TestDefinition {
    TestDefinition {
        id: Uuid::new_v4(),
        code: "T".to_string(),
        name: "Test".to_string(),
        description: String::new(),
        question_count,
        max_score,
        rule: rule.map(str::to_string),
    }
}

fn questions(test_id: Uuid, count: u32) -> Vec<Question> {
    (1..=count)
        .map(|number| Question {
            test_id,
            number,
            text: format!("question {number}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        })
        .collect()
}

#[test]
fn sum_rule_scores_plain_sum() {
    let test = test_def(10, 40, None);
    let qs = questions(test.id, 10);
    let answers = [0, 1, 2, 3, 0, 1, 2, 3, 0, 1];

    let eval = evaluate(&test, &qs, &answers);
    assert_eq!(eval.score, 17);
    assert!(eval.issues.is_empty());
}

#[test]
fn reverse_rule_flips_flagged_questions() {
    let rule = r#"{"method":"reverse","reverse_questions":[3,5],"max_option_value":3}"#;
    let test = test_def(5, 20, Some(rule));
    let qs = questions(test.id, 5);

    // Questions 3 and 5 contribute 3 - answer; every contribution here is 3.
    let eval = evaluate(&test, &qs, &[3, 3, 0, 3, 0]);
    assert_eq!(eval.score, 15);
    assert!(eval.issues.is_empty());
}

#[test]
fn answer_count_mismatch_scores_zero_with_diagnostic() {
    let test = test_def(5, 20, None);
    let qs = questions(test.id, 5);

    let eval = evaluate(&test, &qs, &[1, 2]);
    assert_eq!(eval.score, 0);
    assert_eq!(
        eval.issues,
        vec![ScoringIssue::AnswerCountMismatch {
            expected: 5,
            got: 2
        }]
    );
}

#[test]
fn malformed_rule_falls_back_to_sum_with_diagnostic() {
    let test = test_def(3, 9, Some("{not valid json"));
    let qs = questions(test.id, 3);

    let eval = evaluate(&test, &qs, &[1, 2, 3]);
    assert_eq!(eval.score, 6);
    assert!(matches!(eval.issues.as_slice(), [ScoringIssue::RuleParse(_)]));
}

#[test]
fn unknown_method_falls_back_to_sum_with_diagnostic() {
    let test = test_def(3, 9, Some(r#"{"method":"weighted_median"}"#));
    let qs = questions(test.id, 3);

    let eval = evaluate(&test, &qs, &[1, 2, 3]);
    assert_eq!(eval.score, 6);
    assert_eq!(
        eval.issues,
        vec![ScoringIssue::UnknownMethod("weighted_median".to_string())]
    );
}

#[test]
fn out_of_range_answer_scored_as_is_but_flagged() {
    let test = test_def(2, 6, None);
    let qs = questions(test.id, 2);

    // Options run 0..=3; 7 is out of range but still contributes 7.
    let eval = evaluate(&test, &qs, &[7, 1]);
    assert_eq!(eval.score, 8);
    assert_eq!(
        eval.issues,
        vec![ScoringIssue::AnswerOutOfRange {
            question: 1,
            value: 7,
            max: 3
        }]
    );
}

#[test]
fn reverse_weighting_uses_question_numbers_not_positions() {
    let (rule, issue) =
        TestRule::parse(Some(r#"{"method":"reverse","reverse_questions":[2]}"#));
    assert!(issue.is_none());

    let test_id = Uuid::new_v4();
    let qs = questions(test_id, 2);
    // Default max_option_value is 3: question 2 contributes 3 - 1 = 2.
    let scored = score(rule.scoring(), &qs, &[1, 1]);
    assert_eq!(scored.score, 3);
}

#[test]
fn evaluation_materializes_a_result_record() {
    let test = test_def(5, 20, Some(r#"{"method":"sum"}"#));
    let qs = questions(test.id, 5);
    let answers = vec![2, 2, 2, 2, 2];

    let eval = evaluate(&test, &qs, &answers);
    let result = eval.into_result(
        Uuid::new_v4(),
        &test,
        answers.clone(),
        jiff::civil::date(2026, 8, 27),
    );

    assert_eq!(result.score, 10);
    assert_eq!(result.max_score, 20);
    assert_eq!(result.percentage, 50.0);
    assert_eq!(result.answers, answers);
    assert_eq!(result.test_code, "T");
}
