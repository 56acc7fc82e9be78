//! SOLID 1: Single Responsibility
//! Example: a journal that only keeps entries, and a separate persistence format
//!
//! Run with: cargo run --bin p1_srp

struct Journal {
    title: String,
    entries: Vec<String>,
}

impl Journal {
    fn new(title: impl Into<String>) -> Self {
        Journal {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Saving is a separate concern; it only needs read access to the journal.
struct PersistenceManager;

impl PersistenceManager {
    fn render(journal: &Journal) -> String {
        let mut out = format!("# {}\n", journal.title);
        for (i, entry) in journal.entries().iter().enumerate() {
            out.push_str(&format!("{}: {}\n", i + 1, entry));
        }
        out
    }
}

fn main() {
    let mut journal = Journal::new("Rust SOLID");
    journal.add("Single responsibility principle");
    journal.add("Open-closed principle");
    journal.add("Liskov substitution principle");
    journal.add("Interface segregation principle");
    journal.add("Dependency inversion principle");

    print!("{}", PersistenceManager::render(&journal));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_entries() {
        let mut journal = Journal::new("t");
        journal.add("a");
        journal.add("b");
        assert_eq!(PersistenceManager::render(&journal), "# t\n1: a\n2: b\n");
    }

    #[test]
    fn test_empty_journal() {
        let journal = Journal::new("empty");
        assert_eq!(PersistenceManager::render(&journal), "# empty\n");
    }
}
