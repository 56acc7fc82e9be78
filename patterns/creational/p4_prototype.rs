//! Creational Pattern 4: Prototype
//! Example: cloning animals through a trait object without knowing their type
//!
//! Run with: cargo run --bin p4_prototype

trait Animal {
    fn kind(&self) -> &str;
    fn clone_box(&self) -> Box<dyn Animal>;
}

#[derive(Clone)]
struct Sheep {
    wool_kg: u32,
}

#[derive(Clone)]
struct Mouse;

impl Animal for Sheep {
    fn kind(&self) -> &str {
        "Sheep"
    }

    fn clone_box(&self) -> Box<dyn Animal> {
        Box::new(self.clone())
    }
}

impl Animal for Mouse {
    fn kind(&self) -> &str {
        "Mouse"
    }

    fn clone_box(&self) -> Box<dyn Animal> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Animal> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

fn cloning_machine(prototype: &dyn Animal) -> Box<dyn Animal> {
    prototype.clone_box()
}

fn main() {
    let dolly = Sheep { wool_kg: 4 };
    let animal = cloning_machine(&dolly);
    println!(
        "Prototype animal: {} ({} kg of wool on the original)",
        animal.kind(),
        dolly.wool_kg
    );

    let herd: Vec<Box<dyn Animal>> = vec![Box::new(Mouse), animal];
    let copies = herd.clone();
    for copy in &copies {
        println!("Cloned: {}", copy.kind());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_keeps_kind() {
        let mouse: Box<dyn Animal> = Box::new(Mouse);
        assert_eq!(cloning_machine(mouse.as_ref()).kind(), "Mouse");
    }

    #[test]
    fn test_clone_is_a_new_allocation() {
        let original: Box<dyn Animal> = Box::new(Sheep { wool_kg: 2 });
        let copy = original.clone();
        let a = original.as_ref() as *const dyn Animal as *const u8;
        let b = copy.as_ref() as *const dyn Animal as *const u8;
        assert_ne!(a, b);
    }
}
