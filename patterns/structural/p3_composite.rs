//! Structural Pattern 3: Composite
//! Example: song groups that nest other groups through non-owning links
//!
//! Run with: cargo run --bin p3_composite
//! RUST_LOG=debug also logs every child link as it is made.

use design_patterns::{logging, Node};
use std::rc::Rc;

/// Owns every node; groups only point at them.
struct Library {
    nodes: Vec<Rc<Node>>,
}

impl Library {
    fn new() -> Self {
        Library { nodes: Vec::new() }
    }

    fn song(&mut self, name: &str) -> Rc<Node> {
        self.keep(Node::leaf(name))
    }

    fn group(&mut self, name: &str) -> Rc<Node> {
        self.keep(Node::group(name))
    }

    fn keep(&mut self, node: Rc<Node>) -> Rc<Node> {
        self.nodes.push(Rc::clone(&node));
        node
    }

    fn remove(&mut self, name: &str) {
        self.nodes.retain(|node| node.name() != name);
    }
}

fn build_seasons(library: &mut Library) -> (Rc<Node>, Rc<Node>, Rc<Node>) {
    let season = library.group("Season");
    let spring = library.group("Spring");
    let winter = library.group("Winter");

    let songs: Vec<Rc<Node>> = (1..=5)
        .map(|i| library.song(&format!("Song{}", i)))
        .collect();

    season.add(&songs[0]);
    season.add(&spring);

    spring.add(&songs[1]);
    spring.add(&songs[2]);

    winter.add(&songs[3]);
    winter.add(&songs[4]);

    spring.add(&winter);

    (season, spring, winter)
}

fn main() {
    logging::init();

    let mut library = Library::new();
    let (season, spring, winter) = build_seasons(&mut library);

    println!("Season : {}", season);
    println!("Spring : {}", spring);
    println!("Winter : {}", winter);

    if let Some(song5) = winter.children().last() {
        println!("{} : {}", song5.name(), song5);
    }

    println!();
    println!("=== Removing Song3 from the library ===");
    library.remove("Song3");
    println!("Season : {}", season);
    println!("{} nodes still owned", library.nodes.len());
}
