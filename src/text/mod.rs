//! Text analysis modules
//!
//! Rule-based lexical credibility analysis:
//! - Fixed lexicons for clickbait, absolutist, urgency, and medical language
//! - Sentiment classification
//! - Contradiction pattern detection
//! - Heuristic scoring

pub mod lexicon;
pub mod scorer;
pub mod sentiment;
