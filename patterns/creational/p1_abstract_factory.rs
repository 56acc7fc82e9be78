//! Creational Pattern 1: Abstract Factory
//! Example: national factories producing a matching family of vehicles
//!
//! Run with: cargo run --bin p1_abstract_factory

use std::fmt;

trait Car {
    fn name(&self) -> &str;
    fn manufacturer(&self) -> &str;
}

trait Truck {
    fn name(&self) -> &str;
    fn manufacturer(&self) -> &str;
}

struct Kangoo;
struct Cinquecento;
struct Maxity;
struct Ducato;

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

impl Truck for Maxity {
    fn name(&self) -> &str {
        "Maxity"
    }
    fn manufacturer(&self) -> &str {
        "Renault"
    }
}

impl Truck for Ducato {
    fn name(&self) -> &str {
        "Ducato"
    }
    fn manufacturer(&self) -> &str {
        "Fiat"
    }
}

impl fmt::Display for dyn Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "car name: {}, manufactured by {}",
            self.name(),
            self.manufacturer()
        )
    }
}

impl fmt::Display for dyn Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "truck name: {}, manufactured by {}",
            self.name(),
            self.manufacturer()
        )
    }
}

/// One factory per product family; products from the same factory always match.
trait VehicleFactory {
    fn create_car(&self) -> Box<dyn Car>;
    fn create_truck(&self) -> Box<dyn Truck>;
}

struct FrenchFactory;
struct ItalianFactory;

impl VehicleFactory for FrenchFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Kangoo)
    }
    fn create_truck(&self) -> Box<dyn Truck> {
        Box::new(Maxity)
    }
}

impl VehicleFactory for ItalianFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Cinquecento)
    }
    fn create_truck(&self) -> Box<dyn Truck> {
        Box::new(Ducato)
    }
}

/// Client code only sees the abstract factory.
fn application(factory: &dyn VehicleFactory) -> Vec<String> {
    let car = factory.create_car();
    let truck = factory.create_truck();
    vec![car.to_string(), truck.to_string()]
}

fn main() {
    let factories: [(&str, Box<dyn VehicleFactory>); 2] = [
        ("French", Box::new(FrenchFactory)),
        ("Italian", Box::new(ItalianFactory)),
    ];

    for (label, factory) in &factories {
        println!("=== {} factory ===", label);
        for line in application(factory.as_ref()) {
            println!("{}", line);
        }
    }

    println!();
    let car1 = FrenchFactory.create_car();
    println!("Product car1: {}", car1.name());
    let car2 = ItalianFactory.create_car();
    println!("Product car2: {}", car2.name());
}
