//! Creational Pattern 3: Factory Method
//! Example: a creator choosing the concrete car from a nationality code
//!
//! Run with: cargo run --bin p3_factory_method

trait Car {
    fn name(&self) -> &str;
    fn manufacturer(&self) -> &str;
}

struct Kangoo;
struct Cinquecento;

impl Car for Kangoo {
    fn name(&self) -> &str {
        "Kangoo"
    }
    fn manufacturer(&self) -> &str {
        "Renault"
    }
}

impl Car for Cinquecento {
    fn name(&self) -> &str {
        "Cinquecento"
    }
    fn manufacturer(&self) -> &str {
        "Fiat"
    }
}

trait Creator {
    fn create_car(&self, nationality: &str) -> Option<Box<dyn Car>>;
}

struct NationalCreator;

impl Creator for NationalCreator {
    fn create_car(&self, nationality: &str) -> Option<Box<dyn Car>> {
        match nationality.to_ascii_lowercase().as_str() {
            "fr" => Some(Box::new(Kangoo)),
            "it" => Some(Box::new(Cinquecento)),
            _ => None,
        }
    }
}

fn describe(car: Option<&dyn Car>) -> String {
    match car {
        Some(car) => format!(
            "car name: {}, manufactured by {}",
            car.name(),
            car.manufacturer()
        ),
        None => "car empty".to_string(),
    }
}

fn main() {
    let creator: Box<dyn Creator> = Box::new(NationalCreator);

    for code in ["FR", "it", "de"] {
        let car = creator.create_car(code);
        println!("Product car {}: {}", code, describe(car.as_deref()));
    }
}
