//! Flyweight: one shared, immutable glyph per (symbol, variant).
//!
//! A document of thousands of characters only ever holds as many `Glyph`
//! allocations as there are distinct keys. The extrinsic state (point size)
//! is passed in at display time and never stored in the shared object.
//!
//! ```
//! use design_patterns::GlyphCache;
//! use std::rc::Rc;
//!
//! let mut cache = GlyphCache::new();
//! let first = cache.get_or_create('a', 0).unwrap();
//! let again = cache.get_or_create('a', 0).unwrap();
//! assert!(Rc::ptr_eq(&first, &again));
//! assert_eq!(cache.created(), 1);
//! ```

use crate::error::PatternError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// The closed set of glyph colours the cache knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Blue,
    Green,
    Red,
}

impl Variant {
    pub const MAX_INDEX: u8 = 2;
    pub const ALL: [Variant; 3] = [Variant::Blue, Variant::Green, Variant::Red];

    pub fn index(self) -> u8 {
        match self {
            Variant::Blue => 0,
            Variant::Green => 1,
            Variant::Red => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Blue => "Blue",
            Variant::Green => "Green",
            Variant::Red => "Red",
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = PatternError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Variant::Blue),
            1 => Ok(Variant::Green),
            2 => Ok(Variant::Red),
            other => Err(PatternError::UnsupportedVariant(other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup key. The variant is kept as the raw index the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub symbol: char,
    pub variant: u8,
}

impl GlyphKey {
    pub fn new(symbol: char, variant: u8) -> Self {
        GlyphKey { symbol, variant }
    }
}

/// Anything that can be drawn at a given point size.
pub trait Character {
    fn display(&self, point_size: usize) -> String;
}

/// Shared flyweight holding only intrinsic state.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
    variant: Variant,
}

impl Glyph {
    fn new(symbol: char, variant: Variant) -> Self {
        Glyph { symbol, variant }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn key(&self) -> GlyphKey {
        GlyphKey::new(self.symbol, self.variant.index())
    }
}

impl Character for Glyph {
    fn display(&self, point_size: usize) -> String {
        format!(
            "symbol {} with color {} (pointsize {})",
            self.symbol, self.variant, point_size
        )
    }
}

/// Unshared flyweight: same interface, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    state: usize,
}

impl Numeral {
    pub fn new(state: usize) -> Self {
        Numeral { state }
    }
}

impl Character for Numeral {
    fn display(&self, point_size: usize) -> String {
        format!("unshared numeral {} (pointsize {})", self.state, point_size)
    }
}

/// Source of variant indices for [`GlyphCache::get_with_policy`].
pub trait VariantPolicy {
    fn next_variant(&mut self) -> u8;
}

/// Always hands out the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedVariant(pub u8);

impl VariantPolicy for FixedVariant {
    fn next_variant(&mut self) -> u8 {
        self.0
    }
}

/// Uniform draw over every supported variant.
pub struct RandomVariant {
    rng: StdRng,
}

impl RandomVariant {
    pub fn from_entropy() -> Self {
        RandomVariant {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomVariant {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl VariantPolicy for RandomVariant {
    fn next_variant(&mut self) -> u8 {
        self.rng.gen_range(0..=Variant::MAX_INDEX)
    }
}

/// Flyweight factory. Entries are never evicted.
#[derive(Debug, Default)]
pub struct GlyphCache {
    glyphs: HashMap<GlyphKey, Rc<Glyph>>,
    created: usize,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the glyph for `(symbol, variant)`, building it on first request.
    ///
    /// A hit hands back a clone of the stored `Rc` and has no other effect.
    /// A miss validates the variant, builds the glyph, emits the one-time
    /// creation event and stores it. An unknown variant leaves the cache
    /// untouched.
    pub fn get_or_create(
        &mut self,
        symbol: char,
        variant: u8,
    ) -> Result<Rc<Glyph>, PatternError> {
        match self.glyphs.entry(GlyphKey::new(symbol, variant)) {
            Entry::Occupied(entry) => {
                debug!(%symbol, variant, "reusing shared glyph");
                Ok(Rc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                let variant = Variant::try_from(variant)?;
                info!(%symbol, color = %variant, "create new symbol");
                self.created += 1;
                let glyph = Rc::new(Glyph::new(symbol, variant));
                Ok(Rc::clone(entry.insert(glyph)))
            }
        }
    }

    /// Draws a variant from `policy` once, then defers to
    /// [`get_or_create`](Self::get_or_create).
    pub fn get_with_policy<P>(
        &mut self,
        symbol: char,
        policy: &mut P,
    ) -> Result<Rc<Glyph>, PatternError>
    where
        P: VariantPolicy + ?Sized,
    {
        let variant = policy.next_variant();
        self.get_or_create(symbol, variant)
    }

    pub fn contains(&self, key: &GlyphKey) -> bool {
        self.glyphs.contains_key(key)
    }

    /// Number of glyphs ever constructed. Equals `len()` since nothing is evicted.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
