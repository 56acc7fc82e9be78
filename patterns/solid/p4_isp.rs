//! SOLID 4: Interface Segregation
//! Example: printer, scanner and fax as separate traits, combined by delegation
//!
//! Run with: cargo run --bin p4_isp

#[derive(Debug, Clone)]
struct Document {
    name: String,
    kind: String,
}

impl Document {
    fn new(name: &str, kind: &str) -> Self {
        Document {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }
}

trait Printer {
    fn print(&self, docs: &[Document]) -> Vec<String>;
}

trait Scanner {
    fn scan(&self, docs: &[Document]) -> Vec<String>;
}

trait Fax {
    fn fax(&self, docs: &[Document]) -> Vec<String>;
}

struct InkjetPrinter;
struct FlatbedScanner;
struct FaxModem;

fn each(verb: &str, docs: &[Document]) -> Vec<String> {
    docs.iter()
        .map(|d| format!("{} {} ({})", verb, d.name, d.kind))
        .collect()
}

impl Printer for InkjetPrinter {
    fn print(&self, docs: &[Document]) -> Vec<String> {
        each("print", docs)
    }
}

impl Scanner for FlatbedScanner {
    fn scan(&self, docs: &[Document]) -> Vec<String> {
        each("scan", docs)
    }
}

impl Fax for FaxModem {
    fn fax(&self, docs: &[Document]) -> Vec<String> {
        each("fax", docs)
    }
}

/// A multifunction machine built from the small interfaces, not a fat one.
struct Machine<'a> {
    printer: &'a dyn Printer,
    scanner: &'a dyn Scanner,
    fax: &'a dyn Fax,
}

impl Printer for Machine<'_> {
    fn print(&self, docs: &[Document]) -> Vec<String> {
        self.printer.print(docs)
    }
}

impl Scanner for Machine<'_> {
    fn scan(&self, docs: &[Document]) -> Vec<String> {
        self.scanner.scan(docs)
    }
}

impl Fax for Machine<'_> {
    fn fax(&self, docs: &[Document]) -> Vec<String> {
        self.fax.fax(docs)
    }
}

/// Only needs printing, so only asks for a printer.
fn print_report(printer: &dyn Printer, docs: &[Document]) -> Vec<String> {
    printer.print(docs)
}

fn main() {
    let docs = vec![
        Document::new("report", "pdf"),
        Document::new("invoice", "txt"),
    ];

    let machine = Machine {
        printer: &InkjetPrinter,
        scanner: &FlatbedScanner,
        fax: &FaxModem,
    };

    let jobs = [
        machine.print(&docs),
        machine.scan(&docs),
        machine.fax(&docs),
    ];
    for line in jobs.iter().flatten() {
        println!("{}", line);
    }

    for line in print_report(&InkjetPrinter, &docs[..1]) {
        println!("standalone printer: {}", line);
    }
}
