//! Composite: leaves and groups rendered through one interface.
//!
//! Whoever builds a node owns it (`Rc<Node>`). A group only keeps `Weak`
//! links to its children, so listing a node under a group never extends its
//! lifetime and no ownership cycle can form. Links whose target has been
//! dropped are skipped at render time.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

#[derive(Debug)]
pub enum Node {
    Leaf {
        name: String,
    },
    Group {
        name: String,
        children: RefCell<Vec<Weak<Node>>>,
    },
}

impl Node {
    pub fn leaf(name: impl Into<String>) -> Rc<Node> {
        Rc::new(Node::Leaf { name: name.into() })
    }

    pub fn group(name: impl Into<String>) -> Rc<Node> {
        Rc::new(Node::Group {
            name: name.into(),
            children: RefCell::new(Vec::new()),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Leaf { name } | Node::Group { name, .. } => name,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group { .. })
    }

    /// Appends a non-owning link to this group.
    ///
    /// Returns `false` without touching the child list when the link is
    /// already dead (including `Weak::new()`) or when `self` is a leaf.
    pub fn add_child(&self, child: Weak<Node>) -> bool {
        match self {
            Node::Leaf { name } => {
                debug!(leaf = %name, "leaf cannot hold children");
                false
            }
            Node::Group { name, children } => {
                let Some(target) = child.upgrade() else {
                    debug!(group = %name, "ignoring dead child link");
                    return false;
                };
                debug!(group = %name, child = %target.name(), "linked child");
                children.borrow_mut().push(child);
                true
            }
        }
    }

    pub fn add(&self, child: &Rc<Node>) -> bool {
        self.add_child(Rc::downgrade(child))
    }

    /// Live children in insertion order. Always empty for a leaf.
    pub fn children(&self) -> Vec<Rc<Node>> {
        match self {
            Node::Leaf { .. } => Vec::new(),
            Node::Group { children, .. } => children
                .borrow()
                .iter()
                .filter_map(Weak::upgrade)
                .collect(),
        }
    }

    /// `[name]` for a leaf; `(` + live children separated by spaces + `)` for a group.
    ///
    /// Recurses without cycle detection.
    pub fn render(&self) -> String {
        match self {
            Node::Leaf { name } => format!("[{}]", name),
            Node::Group { children, .. } => {
                let parts: Vec<String> = children
                    .borrow()
                    .iter()
                    .filter_map(Weak::upgrade)
                    .map(|child| child.render())
                    .collect();
                format!("({})", parts.join(" "))
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_render() {
        let leaf = Node::leaf("x");
        assert_eq!(leaf.render(), "[x]");
        assert_eq!(leaf.name(), "x");
        assert!(!leaf.is_group());
    }

    #[test]
    fn test_group_render_in_insertion_order() {
        let g = Node::group("G");
        let x = Node::leaf("x");
        let y = Node::leaf("y");

        assert!(g.add(&x));
        assert!(g.add(&y));
        assert_eq!(g.render(), "([x] [y])");
    }

    #[test]
    fn test_empty_group() {
        let g = Node::group("empty");
        assert_eq!(g.render(), "()");
        assert!(g.children().is_empty());
    }

    #[test]
    fn test_dropped_child_is_skipped() {
        let g = Node::group("G");
        let a = Node::leaf("a");
        let b = Node::leaf("b");
        let c = Node::leaf("c");
        g.add(&a);
        g.add(&b);
        g.add(&c);

        drop(b);
        assert_eq!(g.render(), "([a] [c])");
        assert_eq!(g.children().len(), 2);
    }

    #[test]
    fn test_dead_link_not_added() {
        let g = Node::group("G");
        assert!(!g.add_child(Weak::new()));

        let gone = Node::leaf("gone");
        let link = Rc::downgrade(&gone);
        drop(gone);
        assert!(!g.add_child(link));

        assert!(g.children().is_empty());
        assert_eq!(g.render(), "()");
    }

    #[test]
    fn test_leaf_ignores_children() {
        let leaf = Node::leaf("solo");
        let other = Node::leaf("other");
        assert!(!leaf.add(&other));
        assert_eq!(leaf.render(), "[solo]");
    }

    #[test]
    fn test_group_does_not_own_children() {
        let g = Node::group("G");
        let x = Node::leaf("x");
        g.add(&x);
        assert_eq!(Rc::strong_count(&x), 1);
        assert_eq!(Rc::weak_count(&x), 1);
    }

    #[test]
    fn test_nested_groups_and_late_additions() {
        let season = Node::group("Season");
        let spring = Node::group("Spring");
        let song1 = Node::leaf("Song1");
        let song2 = Node::leaf("Song2");

        season.add(&song1);
        season.add(&spring);
        // Added after spring was linked into season; still visible from season.
        spring.add(&song2);

        assert_eq!(season.render(), "([Song1] ([Song2]))");
        assert_eq!(season.to_string(), season.render());
    }

    #[test]
    fn test_shared_child_under_two_groups() {
        let left = Node::group("left");
        let right = Node::group("right");
        let shared = Node::leaf("s");
        left.add(&shared);
        right.add(&shared);

        assert_eq!(left.render(), "([s])");
        assert_eq!(right.render(), "([s])");

        drop(shared);
        assert_eq!(left.render(), "()");
        assert_eq!(right.render(), "()");
    }
}
