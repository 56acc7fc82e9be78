//! Structural Pattern 1: Adapter
//! Example: a furnace with its own API exposed through the heater interface
//!
//! Run with: cargo run --bin p1_adapter

/// Interface the client expects.
trait Heater {
    fn turn_on(&self) -> Vec<String>;
    fn temperature_hot(&self) -> Vec<String>;
    fn temperature_very_hot(&self) -> Vec<String>;
    fn turn_off(&self) -> Vec<String>;
}

/// Existing component with an incompatible API.
struct Furnace;

impl Furnace {
    fn open(&self) -> String {
        "specific request Open".to_string()
    }

    fn close(&self) -> String {
        "specific request Close".to_string()
    }

    fn thermostat(&self, temperature: i32) -> String {
        format!("specific request set temperature = {}", temperature)
    }

    fn power_on(&self) -> String {
        "specific request Turn On".to_string()
    }

    fn power_off(&self) -> String {
        "specific request Turn Off".to_string()
    }
}

struct FurnaceAsRadiator {
    furnace: Furnace,
}

impl FurnaceAsRadiator {
    fn new(furnace: Furnace) -> Self {
        FurnaceAsRadiator { furnace }
    }
}

impl Heater for FurnaceAsRadiator {
    fn turn_on(&self) -> Vec<String> {
        vec![self.furnace.open(), self.furnace.power_on()]
    }

    fn temperature_hot(&self) -> Vec<String> {
        vec![self.furnace.thermostat(5)]
    }

    fn temperature_very_hot(&self) -> Vec<String> {
        vec![self.furnace.thermostat(10)]
    }

    fn turn_off(&self) -> Vec<String> {
        vec![self.furnace.close(), self.furnace.power_off()]
    }
}

fn main() {
    let heater: Box<dyn Heater> = Box::new(FurnaceAsRadiator::new(Furnace));

    let session = [
        heater.turn_on(),
        heater.temperature_hot(),
        heater.temperature_very_hot(),
        heater.turn_off(),
    ];
    for line in session.iter().flatten() {
        println!("{}", line);
    }
}
