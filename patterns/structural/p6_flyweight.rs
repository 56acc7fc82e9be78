//! Structural Pattern 6: Flyweight
//! Example: a random document drawn through a cache of shared coloured glyphs
//!
//! Run with: cargo run --bin p6_flyweight
//! Tune with PATTERNS_DOCUMENT_LEN, PATTERNS_POINT_SIZE and PATTERNS_SEED.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use design_patterns::{
    logging, Character, DemoConfig, GlyphCache, Numeral, RandomVariant, Variant, VariantPolicy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_document(len: usize, rng: &mut StdRng) -> String {
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn paint(text: &str, variant: Variant) -> ColoredString {
    match variant {
        Variant::Blue => text.bright_white().on_blue(),
        Variant::Green => text.bright_white().on_green(),
        Variant::Red => text.bright_white().on_red(),
    }
}

/// Draws every character of `document`, bumping the extrinsic point size each time.
fn draw_document(
    document: &str,
    cache: &mut GlyphCache,
    policy: &mut dyn VariantPolicy,
    base_point_size: usize,
) -> Result<Vec<String>> {
    let mut point_size = base_point_size;
    let mut lines = Vec::with_capacity(document.len());

    for symbol in document.chars() {
        point_size += 1;
        let glyph = cache.get_with_policy(symbol, policy)?;
        lines.push(format!(
            "{} {}",
            paint(&symbol.to_string(), glyph.variant()),
            glyph.display(point_size)
        ));
    }

    Ok(lines)
}

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::from_env().context("reading flyweight demo settings")?;

    let (mut doc_rng, mut policy) = match config.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            RandomVariant::seeded(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), RandomVariant::from_entropy()),
    };

    let document = random_document(config.document_len, &mut doc_rng);
    println!("random message created ({} characters)", document.len());

    let mut cache = GlyphCache::new();
    for line in draw_document(&document, &mut cache, &mut policy, config.base_point_size)? {
        println!("{}", line);
    }

    println!();
    println!("=== Unshared flyweights ===");
    let numerals: Vec<Box<dyn Character>> = vec![
        Box::new(Numeral::new(1)),
        Box::new(Numeral::new(2)),
        Box::new(Numeral::new(3)),
    ];
    for (i, numeral) in numerals.iter().enumerate() {
        println!("{}", numeral.display(config.base_point_size + i));
    }

    println!();
    println!(
        "{} characters drawn with {} shared glyphs",
        document.chars().count(),
        cache.created()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::FixedVariant;

    #[test]
    fn test_random_document_is_lowercase() {
        let mut rng = StdRng::seed_from_u64(1);
        let doc = random_document(500, &mut rng);
        assert_eq!(doc.len(), 500);
        assert!(doc.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_draw_document_shares_glyphs() {
        let mut cache = GlyphCache::new();
        let mut policy = FixedVariant(0);
        let lines = draw_document("abab", &mut cache, &mut policy, 10).unwrap();

        assert_eq!(lines.len(), 4);
        let (first, last) = (&lines[0], &lines[3]);
        assert!(first.ends_with("symbol a with color Blue (pointsize 11)"));
        assert!(last.ends_with("symbol b with color Blue (pointsize 14)"));
        assert_eq!(cache.created(), 2);
    }

    #[test]
    fn test_draw_document_propagates_unsupported_variant() {
        let mut cache = GlyphCache::new();
        let result = draw_document("a", &mut cache, &mut FixedVariant(5), 10);
        assert!(result.is_err());
    }
}
