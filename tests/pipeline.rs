//! End-to-end scenarios over the public API.

use emotion_timeline::{
    analyze, moving_average, to_csv, top_emotions, AnalysisConfig, AnalysisError, Emotion,
    Lexicon, SegmentMethod, TextSource, Timeline,
};

fn words_config(words_per_chunk: usize) -> AnalysisConfig {
    AnalysisConfig {
        method: SegmentMethod::Words,
        words_per_chunk,
        ..AnalysisConfig::default()
    }
}

const STORY: &str = "\
The morning was bright and everyone was happy. We laughed and smiled at the sun.
Then the storm came without warning. It was sudden and shocking, and we were scared.
Some of us were terrified, others simply afraid. The children began to cry.
By evening we were safe again, and I felt confident we could trust each other.
I love this town, and I cherish every dear friend in it.";

#[test]
fn test_mixed_sentences_form_one_segment() {
    let text = "I am so happy and grateful today. But yesterday I was scared and anxious.";
    let result = analyze(text, &AnalysisConfig::default(), Lexicon::builtin()).unwrap();

    assert_eq!(result.len(), 1);
    let scores = &result.rows()[0].scores;
    assert!(scores.get(Emotion::Joy) > 0.0);
    assert!(scores.get(Emotion::Fear) > 0.0);
    assert_eq!(scores.get(Emotion::Anger), 0.0);
}

#[test]
fn test_twenty_words_make_two_chunks() {
    let text = "one two three four five six seven eight nine ten \
                eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty";
    let result = analyze(text, &words_config(10), Lexicon::builtin()).unwrap();

    assert_eq!(result.len(), 2);
    for row in result.rows() {
        assert_eq!(row.segment.text.split_whitespace().count(), 10);
    }
}

#[test]
fn test_empty_paste_leaves_prior_result() {
    let mut timeline = Timeline::default();
    assert_eq!(timeline.analyze(""), Err(AnalysisError::EmptyInput));
    assert!(timeline.result().is_none());

    timeline.analyze(STORY).unwrap();
    let before = timeline.result().cloned();
    let err = timeline
        .analyze_source(TextSource::Pasted("\n\n   \t".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "Please paste text or upload a .txt file.");
    assert_eq!(timeline.result().cloned(), before);
}

#[test]
fn test_scores_stay_in_unit_interval() {
    for config in [AnalysisConfig::default(), words_config(10), words_config(1)] {
        let result = analyze(STORY, &config, Lexicon::builtin()).unwrap();
        for row in result.rows() {
            for (emotion, score) in row.scores.iter() {
                assert!((0.0..=1.0).contains(&score), "{} = {}", emotion, score);
            }
            assert_eq!(row.scores.get(Emotion::Disgust), 0.0);
        }
    }
}

#[test]
fn test_word_chunks_cover_story_in_order() {
    let result = analyze(STORY, &words_config(12), Lexicon::builtin()).unwrap();
    let rejoined: Vec<String> = result.rows().iter().map(|r| r.segment.text.clone()).collect();
    let rejoined = rejoined.join(" ");
    assert_eq!(
        rejoined.split_whitespace().collect::<Vec<_>>(),
        STORY.split_whitespace().collect::<Vec<_>>()
    );
    let indices: Vec<usize> = result.rows().iter().map(|r| r.segment.index).collect();
    assert_eq!(indices, (1..=result.len()).collect::<Vec<_>>());
}

#[test]
fn test_reanalysis_is_identical() {
    let config = words_config(15);
    let first = analyze(STORY, &config, Lexicon::builtin()).unwrap();
    let second = analyze(STORY, &config, Lexicon::builtin()).unwrap();
    assert_eq!(first, second);
    assert_eq!(to_csv(&first).unwrap(), to_csv(&second).unwrap());
}

#[test]
fn test_smoothing_window_shrink() {
    let values: Vec<f64> = (0..9).map(|i| (i * i) as f64).collect();
    let window = 5;
    let radius = window / 2;
    let smoothed = moving_average(&values, window);
    assert_eq!(smoothed.len(), values.len());

    for i in 0..values.len() {
        let start = i.saturating_sub(radius);
        let end = (i + radius + 1).min(values.len());
        let expected: f64 = values[start..end].iter().sum::<f64>() / (end - start) as f64;
        assert_eq!(smoothed[i], expected);
        if i < radius || i + radius >= values.len() {
            assert!(end - start < 2 * radius + 1);
        } else {
            assert_eq!(end - start, 2 * radius + 1);
        }
    }
}

#[test]
fn test_default_selection_grows_with_k() {
    let result = analyze(STORY, &words_config(10), Lexicon::builtin()).unwrap();
    let mut previous: Vec<Emotion> = Vec::new();
    for k in 1..=Emotion::ALL.len() + 2 {
        let top = top_emotions(&result, k);
        assert_eq!(top.len(), k.min(Emotion::ALL.len()));
        assert!(previous.iter().all(|e| top.contains(e)));
        previous = top;
    }
}
