//! Creational Pattern 2: Builder
//! Example: a director driving interchangeable car builders step by step
//!
//! Run with: cargo run --bin p2_builder

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default, PartialEq)]
struct Car {
    seat: String,
    engine: String,
    wheel: String,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seat: {}, Engine: {}, Wheel: {}",
            self.seat, self.engine, self.wheel
        )
    }
}

trait CarBuilder {
    fn build_seat(&self, car: &mut Car);
    fn build_engine(&self, car: &mut Car);
    fn build_wheel(&self, car: &mut Car);
}

struct LuxuryBuilder;
struct BasicBuilder;

impl CarBuilder for LuxuryBuilder {
    fn build_seat(&self, car: &mut Car) {
        car.seat = "Luxury Seat".to_string();
    }
    fn build_engine(&self, car: &mut Car) {
        car.engine = "Luxury Engine".to_string();
    }
    fn build_wheel(&self, car: &mut Car) {
        car.wheel = "Luxury Wheel".to_string();
    }
}

impl CarBuilder for BasicBuilder {
    fn build_seat(&self, car: &mut Car) {
        car.seat = "Basic Seat".to_string();
    }
    fn build_engine(&self, car: &mut Car) {
        car.engine = "Basic Engine".to_string();
    }
    fn build_wheel(&self, car: &mut Car) {
        car.wheel = "Basic Wheel".to_string();
    }
}

/// Fixes the construction order; the builder decides what each step produces.
struct Director {
    builder: Rc<dyn CarBuilder>,
}

impl Director {
    fn new(builder: Rc<dyn CarBuilder>) -> Self {
        Director { builder }
    }

    fn set(&mut self, builder: Rc<dyn CarBuilder>) {
        self.builder = builder;
    }

    fn construct(&self) -> Car {
        let mut car = Car::default();
        self.builder.build_seat(&mut car);
        self.builder.build_engine(&mut car);
        self.builder.build_wheel(&mut car);
        car
    }
}

fn main() {
    let mut director = Director::new(Rc::new(LuxuryBuilder));
    let luxury = director.construct();
    println!("Product car1 {}", luxury);

    director.set(Rc::new(BasicBuilder));
    let basic = director.construct();
    println!("Product car2 {}", basic);
}
