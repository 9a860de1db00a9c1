//! Integration tests for the content scoring engine

use image::{DynamicImage, Rgb, RgbImage};
use verascore::{AnalysisConfig, AnalysisEngine, ImageInput, ReferenceStore, Sentiment};

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(AnalysisConfig::default(), ReferenceStore::empty())
        .expect("heuristic engine construction cannot fail")
}

/// Colorful block pattern with enough structure to avoid the blur and
/// uniformity heuristics
fn textured_image() -> DynamicImage {
    let img = RgbImage::from_fn(128, 128, |x, y| {
        if ((x / 8) + (y / 8)) % 2 == 0 {
            Rgb([230, 40, 40])
        } else {
            Rgb([(x * 2) as u8, (y * 2) as u8, 160])
        }
    });
    DynamicImage::ImageRgb8(img)
}

fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("in-memory PNG encoding");
    bytes
}

#[test]
fn test_clickbait_text_scores_low() {
    let result = engine().analyze_text("Miracle cure discovered! Doctors hate this one trick!");

    assert!(result.score < 50, "expected low score, got {}", result.score);
    assert!(!result.reasons.is_empty());
    assert!(result
        .claims
        .contains(&"Contains clickbait language".to_string()));
    assert!(result.summary.contains(&format!("Score: {}/100", result.score)));
}

#[test]
fn test_empty_text_is_valid() {
    let result = engine().analyze_text("");
    assert_eq!(result.score, 50);
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert!(result.reasons.is_empty());
}

#[test]
fn test_invalid_image_bytes_degrade() {
    let result = engine().analyze_image_bytes(b"definitely not an image", None);

    assert_eq!(result.score, 0);
    assert_eq!(result.manipulation_probability, 1.0);
    assert!(result.matches.is_empty());
    assert!(result.reasons.contains(&"Failed to load image".to_string()));
}

#[test]
fn test_missing_image_file_degrades() {
    let result = engine().analyze_image_file("/nonexistent/upload.png", Some("ocr text"));

    assert_eq!(result.score, 0);
    assert_eq!(result.manipulation_probability, 1.0);
    assert_eq!(result.ocr_text, "ocr text");
    assert!(result.reasons.contains(&"Failed to load image".to_string()));
}

#[test]
fn test_reference_directory_end_to_end() {
    // Write reference images to disk, load the store, then match an
    // identical input against it
    let dir = tempfile::tempdir().unwrap();
    textured_image().save(dir.path().join("known_photo.png")).unwrap();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(128, 128, Rgb([10, 200, 10])))
        .save(dir.path().join("other.png"))
        .unwrap();

    let references = ReferenceStore::load_dir(dir.path()).unwrap();
    assert_eq!(references.len(), 2);

    let engine = AnalysisEngine::new(AnalysisConfig::default(), references).unwrap();
    let result = engine.analyze_image(&ImageInput::from_pixels(textured_image()), None);

    assert!(!result.matches.is_empty());
    assert_eq!(result.matches[0].source_label, "Sample image: known_photo.png");
    assert_eq!(result.matches[0].reference_url, "/samples/known_photo.png");
    assert_eq!(result.matches[0].confidence, 1.0);
    assert!(result
        .reasons
        .iter()
        .any(|r| r.starts_with("Found") && r.ends_with("matching source(s)")));
}

#[test]
fn test_multi_modal_analysis() {
    let engine = engine();
    let input = ImageInput::from_bytes(&png_bytes(&textured_image())).unwrap();

    let fused = engine.analyze(
        Some("Shocking secret: this guaranteed cure is exclusive!"),
        Some(&input),
        Some("SHARE BEFORE DELETED"),
    );

    let text_score = fused.text_score.expect("text was analyzed");
    let visual_score = fused.visual_score.expect("image was analyzed");

    // Weighted fusion, banker's rounding
    let expected = 0.6 * f64::from(text_score) + 0.4 * f64::from(visual_score);
    assert!((f64::from(fused.credibility_score) - expected).abs() <= 0.5);

    assert_eq!(fused.ocr_text.as_deref(), Some("SHARE BEFORE DELETED"));
    assert!(fused.explainability.top_reasons.len() <= 3);
    assert_eq!(fused.explainability.text_contribution, text_score);
    assert_eq!(fused.explainability.visual_contribution, visual_score);
    // Text reasons come first in the concatenation
    assert_eq!(fused.reasons[0], "Detected 3 clickbait indicator(s)");
}

#[test]
fn test_single_modality_text_passthrough() {
    let fused = engine().analyze(Some("Plain factual statement."), None, None);
    assert_eq!(fused.credibility_score, 50);
    assert_eq!(fused.text_score, Some(50));
    assert_eq!(fused.visual_score, None);
    assert!(fused.matches.is_empty());
}

#[test]
fn test_whitespace_text_is_skipped() {
    let fused = engine().analyze(Some("   \n\t  "), None, None);
    assert_eq!(fused.text_score, None);
    assert_eq!(fused.credibility_score, 50);
    assert_eq!(fused.sentiment, None);
}

#[test]
fn test_neither_modality_is_neutral() {
    let fused = engine().analyze(None, None, None);
    assert_eq!(fused.credibility_score, 50);
    assert!(fused.reasons.is_empty());
}

#[test]
fn test_determinism_across_engines() {
    let text = "Breaking: everyone always knew this terrible secret!";
    let input = ImageInput::from_bytes(&png_bytes(&textured_image())).unwrap();

    let a = engine().analyze(Some(text), Some(&input), Some("ocr"));
    let b = engine().analyze(Some(text), Some(&input), Some("ocr"));
    assert_eq!(a, b);
}

#[test]
fn test_output_caps_hold_under_stress() {
    // Fire every text rule and every image penalty at once
    let text = "Miracle cure! Shocking secret doctors hate - you won't believe it. \
                Urgent, act now, limited time, exclusive, breaking! \
                Never trust them, they always lie, all of them, everyone knows, \
                nobody is safe, it is impossible. All or none. \
                Guaranteed to treat, heal and prevent the worst, terrible, awful disease.";
    let flat = ImageInput::from_pixels(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        64,
        64,
        Rgb([100, 100, 100]),
    )));

    let fused = engine().analyze(Some(text), Some(&flat), None);

    let text_result = engine().analyze_text(text);
    assert!(text_result.reasons.len() <= 5);
    assert!(text_result.claims.len() <= 5);

    let image_result = engine().analyze_image(&flat, None);
    assert!(image_result.reasons.len() <= 5);
    assert!(image_result.matches.len() <= 3);

    assert!(fused.explainability.top_reasons.len() <= 3);
    assert!(fused.credibility_score <= 100);
}

#[test]
fn test_fused_result_serializes_as_flat_record() {
    let fused = engine().analyze(Some("Plain statement."), None, None);
    let json: serde_json::Value = serde_json::to_value(&fused).unwrap();

    for key in [
        "text_score",
        "visual_score",
        "sentiment",
        "claims",
        "contradictions",
        "summary",
        "reasons",
        "manipulation_probability",
        "matches",
        "ocr_text",
        "credibility_score",
        "explainability",
    ] {
        assert!(json.get(key).is_some(), "missing transport field {}", key);
    }
    assert!(json["explainability"].get("top_reasons").is_some());
    assert!(json["explainability"].get("text_contribution").is_some());
    assert!(json["explainability"].get("visual_contribution").is_some());
}

#[cfg(feature = "ml")]
mod ml_backend {
    use super::*;
    use verascore::ScorerBackend;

    #[test]
    fn test_model_backend_not_yet_available() {
        let config = AnalysisConfig {
            text_backend: ScorerBackend::Model,
            ..AnalysisConfig::default()
        };
        let err = AnalysisEngine::new(config, ReferenceStore::empty()).unwrap_err();
        assert!(err.to_string().contains("Not implemented"));
    }
}
