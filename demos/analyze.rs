//! Example: score a piece of content from the command line
//!
//! Run with `RUST_LOG=debug` to see per-heuristic diagnostics:
//!
//! ```text
//! cargo run --example analyze -- --text "Miracle cure discovered!"
//! cargo run --example analyze -- --text "caption" --image photo.jpg
//! ```

use verascore::{AnalysisConfig, AnalysisEngine, ImageInput, ReferenceStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut text: Option<String> = None;
    let mut image_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => text = args.next(),
            "--image" => image_path = args.next(),
            _ => {
                eprintln!("Usage: analyze [--text <text>] [--image <path>]");
                std::process::exit(2);
            }
        }
    }

    // Reference images are optional; a missing directory means no evidence
    let references = ReferenceStore::load_dir("samples")?;
    let engine = AnalysisEngine::new(AnalysisConfig::default(), references)?;

    let image = match &image_path {
        Some(path) => Some(ImageInput::from_file(path)?),
        None => None,
    };

    let result = engine.analyze(text.as_deref(), image.as_ref(), None);

    // Print results
    println!("Credibility score: {}/100", result.credibility_score);
    if let Some(score) = result.text_score {
        println!("  Text score: {}/100", score);
    }
    if let Some(score) = result.visual_score {
        println!("  Visual score: {}/100", score);
    }
    for source in &result.matches {
        println!("  Match: {} (confidence {:.2})", source.source_label, source.confidence);
    }
    for reason in &result.reasons {
        println!("  - {}", reason);
    }

    Ok(())
}
