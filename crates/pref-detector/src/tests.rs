use crate::*;
use crate::tables;
use pref_core::{PhraseWeights, StrengthConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn pref(text: &str) -> Category {
    classify(Some(text)).preference
}

// ========== Visual ==========

#[test]
fn test_visual_charts_and_graphs() {
    assert_eq!(pref("I prefer charts and graphs"), Category::Visual);
}

#[test]
fn test_visual_inputs() {
    for text in [
        "Show me visual representations",
        "I like to see data in charts",
        "Give me graphs and visualizations",
        "I'm a visual learner, show me diagrams",
        "Display information using charts and plots",
        "I want to see pie charts and bar graphs",
        "Visualize the data for me",
        "I need a dashboard",
    ] {
        assert_eq!(pref(text), Category::Visual, "{text}");
    }
}

#[test]
fn test_big_charts_outweigh_stray_and() {
    let v = classify(Some("I prefer big charts and graphs"));
    assert_eq!(v.total, ScoreVector::new(9, 0, 1));
    assert_eq!(v.preference, Category::Visual);
}

// ========== Text ==========

#[test]
fn test_text_detailed_explanations() {
    let v = classify(Some("Give me detailed text explanations"));
    assert_eq!(v.preference, Category::Text);
    assert_eq!(v.total, ScoreVector::new(0, 9, 0));
}

#[test]
fn test_text_inputs() {
    for text in [
        "I prefer written descriptions",
        "Provide comprehensive analysis in text",
        "I like detailed explanations",
        "Give me thorough written reports",
        "I prefer reading detailed summaries",
        "Explain everything in detail with text",
        "I want in-depth textual analysis",
        "Charts are okay but I prefer detailed text",
    ] {
        assert_eq!(pref(text), Category::Text, "{text}");
    }
}

// ========== Mixed ==========

#[test]
fn test_mixed_co_occurrence() {
    let v = classify(Some("I like both charts and detailed explanations"));
    assert_eq!(v.preference, Category::Mixed);
    assert_eq!(v.total, ScoreVector::new(3, 8, 8));
    assert!(v.signals.contains(&"mixed:both-visual-text".to_string()));
    assert!(v.signals.contains(&"mixed:visual-junction-text".to_string()));
}

#[test]
fn test_mixed_balanced_approach() {
    let v = classify(Some("I want a balanced approach"));
    assert_eq!(v.preference, Category::Mixed);
    assert_eq!(v.lexicon, ScoreVector::new(0, 0, 1));
    assert_eq!(v.phrases, ScoreVector::new(0, 0, 3));
    assert_eq!(v.signals, vec!["mixed:balanced-approach".to_string()]);
}

#[test]
fn test_mixed_mix_of() {
    assert_eq!(pref("A mix of visuals and text please"), Category::Mixed);
}

#[test]
fn test_mixed_from_stray_conjunction() {
    // A bare conjunction outscores an otherwise empty vector.
    assert_eq!(pref("I work in finance and need market updates"), Category::Mixed);
    assert_eq!(pref("and and and"), Category::Mixed);
}

#[test]
fn test_phrase_window_does_not_cross_lines() {
    let v = classify(Some("Charts\nand\ntext"));
    assert_eq!(v.total, ScoreVector::new(1, 1, 1));
    assert!(v.signals.is_empty());
    assert_eq!(v.preference, Category::Mixed);
}

// ========== No preference ==========

#[test]
fn test_no_keywords() {
    assert_eq!(pref("Hello, I work in finance"), Category::NoPreference);
    assert_eq!(pref("Hello, I'm John from New York"), Category::NoPreference);
}

#[test]
fn test_empty_and_absent() {
    assert_eq!(classify(Some("")), Verdict::empty());
    assert_eq!(classify(None), Verdict::empty());
    assert_eq!(classify(None).preference, Category::NoPreference);
}

#[test]
fn test_whitespace_only() {
    let v = classify(Some("   "));
    assert_eq!(v.preference, Category::NoPreference);
    assert!(v.total.is_zero());
}

#[test]
fn test_visual_text_tie() {
    assert_eq!(pref("visual text"), Category::NoPreference);
}

// ========== Lexicon Matcher ==========

#[test]
fn test_lexicon_whole_word() {
    let lex = Lexicon::new(["chart"]).unwrap();
    assert_eq!(lex.count("charting my course"), 0);
    assert_eq!(lex.count("a chart, another chart."), 2);
    assert_eq!(pref("charting my course"), Category::NoPreference);
}

#[test]
fn test_lexicon_multi_word_term() {
    let v = classify(Some("pie chart"));
    // "pie chart" and "chart" both register.
    assert_eq!(v.lexicon.visual, 2);
}

#[test]
fn test_lexicon_hyphenated_term() {
    let lex = Lexicon::new(tables::TEXT_TERMS).unwrap();
    assert_eq!(lex.count("an in-depth look"), 1);
}

#[test]
fn test_lexicon_repeats_count() {
    let v = classify(Some("chart chart chart"));
    assert_eq!(v.lexicon, ScoreVector::new(3, 0, 0));
    assert_eq!(v.preference, Category::Visual);
}

#[test]
fn test_lexicon_lowercases_terms() {
    let lex = Lexicon::new(["Chart", "Bar Chart"]).unwrap();
    assert_eq!(lex.terms().collect::<Vec<_>>(), vec!["chart", "bar chart"]);
    assert_eq!(lex.len(), 2);
    assert!(!lex.is_empty());
}

#[test]
fn test_lexicon_matched_in_table_order() {
    let lex = Lexicon::new(tables::STRENGTH_TEXT_TERMS).unwrap();
    let found = lex.matched("comprehensive analysis, detailed text explanations");
    assert_eq!(found, vec!["text", "explanations", "detailed", "analysis", "comprehensive"]);
}

#[test]
fn test_lexicon_monotonic() {
    let lex = Lexicon::new(tables::VISUAL_TERMS).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut text = String::from("i like");
    let mut last = lex.count(&text);
    for _ in 0..50 {
        let term = tables::VISUAL_TERMS.choose(&mut rng).unwrap();
        text.push(' ');
        text.push_str(term);
        let now = lex.count(&text);
        assert!(now > last, "adding {term:?} did not raise the score");
        last = now;
    }
}

#[test]
fn test_lexicon_scores_never_flip_winner() {
    let mut rng = StdRng::seed_from_u64(11);
    let base = "give me detailed text explanations";
    let mut text = base.to_string();
    let before = DETECTOR.lexicon_scores(base);
    assert!(before.text > before.visual);
    for _ in 0..20 {
        text.push(' ');
        text.push_str(tables::TEXT_TERMS.choose(&mut rng).unwrap());
        let after = DETECTOR.lexicon_scores(&text);
        assert!(after.text >= before.text);
        assert!(after.text > after.visual);
    }
}

// ========== Phrase Matcher ==========

#[test]
fn test_phrase_flat_weight_once() {
    let set = PhraseSet::new(Category::Visual, 2, tables::VISUAL_PHRASES).unwrap();
    let once = set.score("i need a dashboard");
    let twice = set.score("i need a dashboard, a dashboard, a dashboard");
    assert_eq!(once.points, 2);
    assert_eq!(once, twice);
    assert_eq!(once.signals, vec!["visual:dashboard".to_string()]);
}

#[test]
fn test_phrase_role() {
    let set = PhraseSet::new(Category::Text, 2, tables::TEXT_PHRASES).unwrap();
    let hits = set.score("i am a textual learner");
    assert!(hits.signals.contains(&"text:role".to_string()));
}

#[test]
fn test_phrase_table_sizes() {
    assert_eq!(tables::VISUAL_PHRASES.len(), 10);
    assert_eq!(tables::TEXT_PHRASES.len(), 9);
    assert_eq!(tables::MIXED_PHRASES.len(), 8);
}

#[test]
fn test_phrase_set_accessors() {
    let set = PhraseSet::new(Category::Mixed, 3, tables::MIXED_PHRASES).unwrap();
    assert_eq!(set.category(), Category::Mixed);
    assert_eq!(set.weight(), 3);
    assert_eq!(set.len(), 8);
    assert!(!set.is_empty());
}

#[test]
fn test_phrase_bad_pattern() {
    let err = PhraseSet::new(Category::Visual, 2, &[("broken", r"(chart")]).unwrap_err();
    assert!(matches!(err, pref_core::PrefError::Pattern(_)));
}

// ========== Custom weights ==========

#[test]
fn test_custom_phrase_weights() {
    let config = DetectorConfig {
        phrases: PhraseWeights { category: 5, mixed: 1 },
        ..DetectorConfig::default()
    };
    let d = PreferenceDetector::new(&config).unwrap();
    let v = d.classify(Some("I prefer charts and graphs"));
    assert_eq!(v.phrases, ScoreVector::new(5, 0, 0));
    assert_eq!(v.preference, Category::Visual);
}

#[test]
fn test_zero_phrase_weight_rejected() {
    let config = DetectorConfig {
        phrases: PhraseWeights { category: 0, mixed: 3 },
        ..DetectorConfig::default()
    };
    assert!(PreferenceDetector::new(&config).is_err());
}

// ========== Purity ==========

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    let vocab: Vec<&str> = tables::VISUAL_TERMS
        .iter()
        .chain(tables::TEXT_TERMS)
        .chain(tables::MIXED_TERMS)
        .chain(["i", "prefer", "give", "me", "see", "more", "hello", "finance"].iter())
        .copied()
        .collect();
    for _ in 0..200 {
        let len = rng.gen_range(0..12usize);
        let words: Vec<&str> = (0..len).map(|_| *vocab.choose(&mut rng).unwrap()).collect();
        let text = words.join(" ");
        let first = classify(Some(text.as_str()));
        let second = classify(Some(text.as_str()));
        assert_eq!(first, second, "{text}");
        assert!(Category::ALL.contains(&first.preference));
    }
}

#[test]
fn test_concurrent_classification() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = if i % 2 == 0 { "I prefer charts and graphs" } else { "Give me detailed text explanations" };
                (0..100).map(|_| classify(Some(text)).preference).collect::<Vec<_>>()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { Category::Visual } else { Category::Text };
        assert!(h.join().unwrap().iter().all(|c| *c == expected));
    }
}

#[test]
fn test_verdict_json() {
    let v = classify(Some("I want a balanced approach"));
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["preference"], "mixed");
    assert_eq!(json["total"]["mixed"], 4);
    let none = serde_json::to_value(classify(None)).unwrap();
    assert!(none["preference"].is_null());
}

// ========== Strength analysis ==========

#[test]
fn test_strength_visual() {
    let a = analyze_strength(Some("I prefer charts and graphs for financial data"));
    assert_eq!(a.preference, Category::Visual);
    assert_eq!(a.visual_keywords, vec!["charts", "graphs"]);
    assert!(a.text_keywords.is_empty());
    assert_eq!(a.total_keywords, 2);
    // 0.3 + 0.4 + 0.5 * 2/8
    assert!((a.confidence - 0.82).abs() < 1e-9);
}

#[test]
fn test_strength_text_capped() {
    let a = analyze_strength(Some("Give me detailed text explanations with comprehensive analysis"));
    assert_eq!(a.preference, Category::Text);
    assert_eq!(a.text_keywords, vec!["text", "explanations", "detailed", "analysis", "comprehensive"]);
    assert!((a.confidence - 0.9).abs() < 1e-9);
}

#[test]
fn test_strength_rounds_exact_value() {
    // 0.3 + 0.4 + 0.5 * 2/8 is stored as 0.82499...
    let a = analyze_strength(Some("I prefer charts and graphs for financial data"));
    assert_eq!(a.confidence, 0.82);
}

#[test]
fn test_strength_visual_person() {
    let a = analyze_strength(Some("I'm a visual person who likes dashboards and plots"));
    assert_eq!(a.visual_keywords, vec!["visual", "plots"]);
    assert!((a.confidence - 0.81).abs() < 1e-9);
}

#[test]
fn test_strength_presence_not_count() {
    let a = analyze_strength(Some("charts charts charts"));
    assert_eq!(a.visual_keywords, vec!["charts"]);
    assert_eq!(a.total_keywords, 1);
    assert!((a.confidence - 0.67).abs() < 1e-9);
}

#[test]
fn test_strength_tie() {
    let a = analyze_strength(Some("chart text"));
    assert_eq!(a.preference, Category::NoPreference);
    assert_eq!(a.confidence, 0.0);
    assert_eq!(a.total_keywords, 2);
}

#[test]
fn test_strength_no_keywords() {
    let a = analyze_strength(Some("Hello, I work in finance"));
    assert_eq!(a.preference, Category::NoPreference);
    assert_eq!(a.confidence, 0.0);
    assert_eq!(a.total_keywords, 0);
}

#[test]
fn test_strength_empty_and_absent() {
    assert_eq!(analyze_strength(None), ScoredAnalysis::empty());
    assert_eq!(analyze_strength(Some("")), ScoredAnalysis::empty());
}

#[test]
fn test_strength_disagrees_with_classifier() {
    let text = "I like both charts and detailed explanations";
    assert_eq!(pref(text), Category::Mixed);
    assert_eq!(analyze_strength(Some(text)).preference, Category::Text);
}

#[test]
fn test_strength_confidence_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let vocab: Vec<&str> = tables::STRENGTH_VISUAL_TERMS
        .iter()
        .chain(tables::STRENGTH_TEXT_TERMS)
        .chain(["hello", "data", "please"].iter())
        .copied()
        .collect();
    for _ in 0..200 {
        let words: Vec<&str> = (0..6).map(|_| *vocab.choose(&mut rng).unwrap()).collect();
        let a = analyze_strength(Some(words.join(" ").as_str()));
        assert!((0.0..=0.9).contains(&a.confidence));
        assert_eq!(a.confidence == 0.0, a.preference == Category::NoPreference);
        assert_ne!(a.preference, Category::Mixed);
    }
}

#[test]
fn test_strength_custom_config() {
    let analyzer = StrengthAnalyzer::new(&StrengthConfig { base: 0.1, per_keyword: 0.1, density: 0.0, cap: 0.5 }).unwrap();
    let a = analyzer.analyze(Some("Visual"));
    assert_eq!(a.preference, Category::Visual);
    assert!((a.confidence - 0.2).abs() < 1e-9);
    assert_eq!(analyzer.config().cap, 0.5);
}

#[test]
fn test_strength_json_keys() {
    let json = serde_json::to_value(analyze_strength(Some("Visual"))).unwrap();
    assert_eq!(json["preference"], "visual");
    assert_eq!(json["visualKeywords"][0], "visual");
    assert_eq!(json["totalKeywords"], 1);
    assert!(json["textKeywords"].as_array().unwrap().is_empty());
}

// ========== Stored preference ==========

#[test]
fn test_resolve_stored_preference() {
    assert_eq!(resolve_stored_preference(Some("I prefer charts and graphs")), Some(Category::Visual));
    assert_eq!(resolve_stored_preference(Some("Hello, I work in finance")), None);
    assert_eq!(resolve_stored_preference(None), None);
}

// ========== Performance ==========

#[test]
fn test_performance() {
    let start = std::time::Instant::now();
    for _ in 0..1000 {
        classify(Some("I like both charts and detailed explanations"));
    }
    assert!(start.elapsed().as_millis() < 10000, "1000 classifications took {}ms", start.elapsed().as_millis());
}
