//! # Design Patterns
//!
//! Classic object-oriented design patterns expressed in Rust, plus a handful of
//! SOLID-principle illustrations. Every pattern ships as a runnable demo binary.
//!
//! ## Library Components
//!
//! 1. **Flyweight** ([`flyweight`])
//!    - `GlyphCache` memoises one shared `Rc<Glyph>` per (symbol, variant)
//!    - Variant selection is supplied by the caller through `VariantPolicy`
//!
//! 2. **Composite** ([`composite`])
//!    - Leaf and group nodes behind one `Node` enum
//!    - Groups keep `Weak` links to children; dead links are skipped on render
//!
//! ## Running Examples
//!
//! ```bash
//! # Creational
//! cargo run --bin p1_abstract_factory
//! cargo run --bin p2_builder
//! cargo run --bin p3_factory_method
//! cargo run --bin p4_prototype
//! cargo run --bin p5_singleton
//!
//! # Structural
//! cargo run --bin p1_adapter
//! cargo run --bin p2_bridge
//! cargo run --bin p3_composite
//! cargo run --bin p4_decorator
//! cargo run --bin p5_facade
//! cargo run --bin p6_flyweight
//! cargo run --bin p7_proxy
//!
//! # SOLID
//! cargo run --bin p1_srp
//! cargo run --bin p2_ocp
//! cargo run --bin p3_lsp
//! cargo run --bin p4_isp
//! cargo run --bin p5_dip
//! ```
//!
//! Set `RUST_LOG=debug` to see flyweight cache hits and composite links as
//! well as glyph creations.

pub mod composite;
pub mod config;
pub mod error;
pub mod flyweight;
pub mod logging;

pub use composite::Node;
pub use config::DemoConfig;
pub use error::PatternError;
pub use flyweight::{
    Character, FixedVariant, Glyph, GlyphCache, GlyphKey, Numeral, RandomVariant, Variant,
    VariantPolicy,
};
