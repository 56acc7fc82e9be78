use design_patterns::{
    FixedVariant, GlyphCache, GlyphKey, Node, PatternError, RandomVariant, Variant,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

// ============================================================================
// Flyweight
// ============================================================================

proptest! {
    #[test]
    fn repeated_requests_share_one_glyph(
        symbol in any::<char>(),
        variant in 0u8..=2,
        repeats in 1usize..20,
    ) {
        let mut cache = GlyphCache::new();
        let first = cache.get_or_create(symbol, variant).unwrap();

        for _ in 0..repeats {
            let again = cache.get_or_create(symbol, variant).unwrap();
            prop_assert!(Rc::ptr_eq(&first, &again));
        }
        prop_assert_eq!(cache.created(), 1);
    }

    #[test]
    fn created_count_matches_distinct_keys(
        requests in prop::collection::vec((prop::char::range('a', 'z'), 0u8..=2), 0..200),
    ) {
        let mut cache = GlyphCache::new();
        let mut distinct = HashSet::new();

        for (symbol, variant) in &requests {
            cache.get_or_create(*symbol, *variant).unwrap();
            distinct.insert(GlyphKey::new(*symbol, *variant));
        }

        prop_assert_eq!(cache.created(), distinct.len());
        prop_assert_eq!(cache.len(), distinct.len());
    }

    #[test]
    fn out_of_range_variants_are_rejected(
        symbol in any::<char>(),
        variant in 3u8..=u8::MAX,
    ) {
        let mut cache = GlyphCache::new();
        prop_assert_eq!(
            cache.get_or_create(symbol, variant).unwrap_err(),
            PatternError::UnsupportedVariant(variant)
        );
        prop_assert!(cache.is_empty());
    }
}

#[test]
fn distinct_keys_give_distinct_glyphs() {
    let mut cache = GlyphCache::new();
    let glyphs: Vec<_> = ['a', 'b']
        .iter()
        .flat_map(|&s| Variant::ALL.map(|v| (s, v.index())))
        .map(|(s, v)| cache.get_or_create(s, v).unwrap())
        .collect();

    for (i, a) in glyphs.iter().enumerate() {
        for b in &glyphs[i + 1..] {
            assert!(!Rc::ptr_eq(a, b));
        }
    }
    assert_eq!(cache.created(), 6);
}

#[test]
fn random_policy_only_creates_supported_variants() {
    let mut cache = GlyphCache::new();
    let mut policy = RandomVariant::seeded(2019);

    for symbol in "the quick brown fox jumps over the lazy dog".chars() {
        let glyph = cache.get_with_policy(symbol, &mut policy).unwrap();
        assert_eq!(glyph.symbol(), symbol);
    }
    // 27 distinct symbols (space included), at most three colours each.
    assert!(cache.len() <= 27 * 3);
    assert!(cache.len() >= 27);
}

#[test]
fn fixed_policy_can_request_unsupported_variant() {
    let mut cache = GlyphCache::new();
    let err = cache.get_with_policy('x', &mut FixedVariant(9)).unwrap_err();
    assert_eq!(err.to_string(), "unsupported variant 9 (expected 0..=2)");
}

// ============================================================================
// Composite
// ============================================================================

proptest! {
    #[test]
    fn group_renders_children_in_insertion_order(
        names in prop::collection::vec("[a-z]{1,6}", 0..12),
    ) {
        let group = Node::group("G");
        let leaves: Vec<_> = names.iter().map(|n| Node::leaf(n.as_str())).collect();
        for leaf in &leaves {
            group.add(leaf);
        }

        let rendered: Vec<String> = names.iter().map(|n| format!("[{}]", n)).collect();
        let expected = format!("({})", rendered.join(" "));
        prop_assert_eq!(group.render(), expected);
    }

    #[test]
    fn dropping_children_only_removes_them(
        names in prop::collection::vec("[a-z]{1,6}", 1..12),
        mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let group = Node::group("G");
        let mut leaves: Vec<Option<Rc<Node>>> = names
            .iter()
            .map(|n| Some(Node::leaf(n.as_str())))
            .collect();
        for leaf in leaves.iter().flatten() {
            group.add(leaf);
        }

        for (slot, drop_it) in leaves.iter_mut().zip(&mask) {
            if *drop_it {
                *slot = None;
            }
        }

        let survivors: Vec<String> = leaves.iter().flatten().map(|leaf| leaf.render()).collect();
        prop_assert_eq!(group.render(), format!("({})", survivors.join(" ")));
        prop_assert_eq!(group.children().len(), survivors.len());
    }
}

#[test]
fn other_insertions_do_not_affect_order() {
    let g = Node::group("G");
    let other = Node::group("other");
    let a = Node::leaf("A");
    let b = Node::leaf("B");
    let c = Node::leaf("C");

    g.add(&a);
    other.add(&c);
    g.add(&b);
    other.add(&a);
    g.add(&c);

    assert_eq!(g.render(), "([A] [B] [C])");
    assert_eq!(other.render(), "([C] [A])");
}
