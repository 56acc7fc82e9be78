//! Creational Pattern 5: Singleton
//! Example: a process-wide instance created on first access and never reset
//!
//! Run with: cargo run --bin p5_singleton

use lazy_static::lazy_static;
use std::sync::atomic::{AtomicUsize, Ordering};

static INIT_COUNT: AtomicUsize = AtomicUsize::new(0);

struct Registry {
    name: &'static str,
}

impl Registry {
    fn new() -> Self {
        println!("Initializing Singleton");
        INIT_COUNT.fetch_add(1, Ordering::SeqCst);
        Registry { name: "global registry" }
    }

    fn instance() -> &'static Registry {
        println!("Getting Singleton instance");
        &INSTANCE
    }
}

lazy_static! {
    static ref INSTANCE: Registry = Registry::new();
}

fn main() {
    let s1 = Registry::instance();
    let s2 = Registry::instance();

    let same = std::ptr::eq(s1, s2);
    println!("s1 and s2 are the same instance: {}", same);
    let inits = INIT_COUNT.load(Ordering::SeqCst);
    println!("{} initialised {} time(s)", s1.name, inits);
}
