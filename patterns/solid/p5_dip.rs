//! SOLID 5: Dependency Inversion
//! Example: a car depending on a logger abstraction injected at construction
//!
//! Run with: cargo run --bin p5_dip

use design_patterns::logging;
use std::fmt;
use std::rc::Rc;

trait Logger {
    fn log(&self, message: &str);
}

/// Production logger backed by `tracing`.
struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

#[derive(Debug)]
struct Engine {
    volume: f32,
    horse_power: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            volume: 5.0,
            horse_power: 400,
        }
    }
}

struct Car {
    engine: Rc<Engine>,
    logger: Rc<dyn Logger>,
}

impl Car {
    fn new(engine: Rc<Engine>, logger: Rc<dyn Logger>) -> Self {
        logger.log("Created a car");
        Car { engine, logger }
    }

    fn drive(&self, km: u32) {
        self.logger.log(&format!("Drove {} km", km));
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "car with engine: volume: {} horse_power: {}",
            self.engine.volume, self.engine.horse_power
        )
    }
}

fn main() {
    logging::init();

    let car = Car::new(Rc::new(Engine::default()), Rc::new(TracingLogger));
    car.drive(12);
    println!("{}", car);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test double that records messages.
    #[derive(Default)]
    struct MemoryLogger {
        lines: RefCell<Vec<String>>,
    }

    impl Logger for MemoryLogger {
        fn log(&self, message: &str) {
            self.lines.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_injected_logger_receives_messages() {
        let logger = Rc::new(MemoryLogger::default());
        let car = Car::new(Rc::new(Engine::default()), logger.clone());
        car.drive(3);

        assert_eq!(*logger.lines.borrow(), vec!["Created a car", "Drove 3 km"]);
    }

    #[test]
    fn test_display() {
        let logger = Rc::new(MemoryLogger::default());
        let car = Car::new(Rc::new(Engine::default()), logger);
        assert_eq!(
            car.to_string(),
            "car with engine: volume: 5 horse_power: 400"
        );
    }
}
