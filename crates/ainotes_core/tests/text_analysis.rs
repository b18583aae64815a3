use ainotes_core::{
    analyze_sentiment, extract_keywords, extract_keywords_default, generate_title, summarize,
    summarize_default, AnalysisOptions, LinguisticBackend, RuleBasedBackend, Sentiment,
    TextAnalyzer,
};

const FIVE_SENTENCES: &str = "Budget review happens monday. Lunch was fine. \
                              Budget numbers need review. Weather is cold. \
                              Review budget before monday.";

fn sentences_of(text: &str) -> Vec<String> {
    RuleBasedBackend
        .sentences(text)
        .map(|sentence| sentence.text.to_string())
        .collect()
}

#[test]
fn short_note_is_returned_verbatim() {
    assert_eq!(summarize("Short note.", 3), "Short note.");
    assert_eq!(summarize_default("Short note."), "Short note.");
}

#[test]
fn notes_within_the_limit_keep_their_exact_whitespace() {
    let padded = "  One here.\n\nTwo there!  ";
    assert_eq!(summarize(padded, 3), padded);

    let at_limit = "\tBudget first.   Review   second?\nShip third.\n";
    assert_eq!(sentences_of(at_limit).len(), 3);
    assert_eq!(summarize(at_limit, 3), at_limit);
}

#[test]
fn summary_of_five_sentences_keeps_two_in_original_order() {
    let summary = summarize(FIVE_SENTENCES, 2);
    assert_ne!(summary, FIVE_SENTENCES);

    let picked = sentences_of(&summary);
    assert_eq!(picked.len(), 2);

    let original = sentences_of(FIVE_SENTENCES);
    let positions = picked
        .iter()
        .map(|sentence| original.iter().position(|candidate| candidate == sentence))
        .collect::<Option<Vec<_>>>()
        .expect("summary sentences come from the input");
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn summary_never_exceeds_limit() {
    for limit in 1..=5 {
        let summary = summarize(FIVE_SENTENCES, limit);
        assert!(sentences_of(&summary).len() <= limit);
    }
}

#[test]
fn empty_input_yields_defaults() {
    for limit in [0, 1, 3, 10] {
        assert_eq!(summarize("", limit), "");
    }
    assert!(extract_keywords("", 5).is_empty());
    assert_eq!(generate_title(""), "New Note");
    assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
}

#[test]
fn keywords_respect_limit_and_length() {
    let text = "Project deadline moved. The project needs a new deadline. \
                Ship the project on Friday. Review the project scope.";
    for limit in 0..=6 {
        let keywords = extract_keywords(text, limit);
        assert!(keywords.len() <= limit);
        assert!(keywords.iter().all(|word| word.chars().count() > 3));
        assert!(keywords.iter().all(|word| *word == word.to_lowercase()));
    }
    assert_eq!(extract_keywords_default(text)[0], "project");
}

#[test]
fn keywords_are_unique() {
    let keywords = extract_keywords("Deploy deploy DEPLOY the server server.", 5);
    let mut deduped = keywords.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), keywords.len());
    assert_eq!(keywords.first().map(String::as_str), Some("deploy"));
}

#[test]
fn title_is_bounded_and_comes_from_first_sentence() {
    let long = "Quarterly planning meeting with the whole product and design group today. \
                Second sentence.";
    let title = generate_title(long);
    assert!(title.chars().count() <= 53);
    assert!(title.ends_with("..."));
    assert!(long.starts_with(title.trim_end_matches("...")));

    assert_eq!(generate_title("Buy milk. Call mom."), "Buy milk.");
}

#[test]
fn sentiment_labels_follow_lexicon_polarity() {
    assert_eq!(analyze_sentiment("What a great day"), Sentiment::Positive);
    assert_eq!(analyze_sentiment("This is terrible"), Sentiment::Negative);
    assert_eq!(analyze_sentiment("The meeting is at noon"), Sentiment::Neutral);
    assert_eq!(analyze_sentiment("It was okay"), Sentiment::Neutral);
    assert_eq!(analyze_sentiment("This is not great"), Sentiment::Negative);
}

#[test]
fn sentiment_labels_render_for_display() {
    assert_eq!(Sentiment::Positive.label(), "Positive");
    assert_eq!(Sentiment::Negative.label(), "Negative");
    assert_eq!(Sentiment::Neutral.label(), "Neutral");
    assert_eq!(Sentiment::Neutral.to_string(), "Neutral");
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = TextAnalyzer::new();
    let first = analyzer.analyze(FIVE_SENTENCES);
    let second = analyzer.analyze(FIVE_SENTENCES);
    assert_eq!(first, second);
}

#[test]
fn analyzer_options_accept_partial_json() {
    let options: AnalysisOptions = serde_json::from_str(r#"{"keyword_limit": 2}"#).unwrap();
    assert_eq!(options.keyword_limit, 2);
    assert_eq!(options.max_summary_sentences, 3);

    let analyzer = TextAnalyzer::with_options(options);
    assert!(analyzer.extract_keywords(FIVE_SENTENCES).len() <= 2);
}

#[test]
fn analyzer_can_be_shared_across_threads() {
    let analyzer = TextAnalyzer::new();
    let expected = analyzer.analyze(FIVE_SENTENCES);

    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| analyzer.analyze(FIVE_SENTENCES)))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
