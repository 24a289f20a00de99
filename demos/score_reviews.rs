//! # Review Scoring Example
//!
//! Demonstrates text normalization and sentiment scoring on review texts.

use steam_sentiment::{ReviewAnalyzer, TextNormalizer};

fn main() {
    println!("=== Steam Review Sentiment Demo ===\n");

    let analyzer = ReviewAnalyzer::new();
    let normalizer = TextNormalizer::new();

    let texts = vec![
        "Great game! I love playing this with my friends.",
        "This game is terrible. Too many bugs and constant crashes.",
        "It has a keyboard settings menu and some maps.",
        "Really fun gameplay, but the servers are laggy.",
        "Not worth the price. Broken and abandoned by the developers.",
        "Absolutely amazing, a masterpiece. Best game in years!",
        "Kinda boring after the first few hours.",
        "10/10 would recommend, smooth and polished experience.",
    ];

    println!("Scoring {} review texts...\n", texts.len());
    println!("{}", "=".repeat(70));

    for text in texts {
        let row = analyzer.score_text(text);

        println!("\nText: \"{}\"", text);
        println!("{}", "-".repeat(60));
        println!("  Compound: {:.3}", row.scores.compound);
        println!("  Label: {}", row.label.as_str());
        println!(
            "  Proportions: pos {:.2} / neu {:.2} / neg {:.2}",
            row.scores.positive, row.scores.neutral, row.scores.negative
        );
        println!("  Cleaned: \"{}\"", row.cleaned_text);
    }

    println!("\n{}", "=".repeat(70));

    println!("\n=== Normalization Demo ===\n");

    let raw_text = "BEST fps I've played since 2012 — 10/10, would frag again! 🎮";
    println!("Raw text: \"{}\"", raw_text);
    println!("Normalized: \"{}\"", normalizer.normalize(raw_text));
}
