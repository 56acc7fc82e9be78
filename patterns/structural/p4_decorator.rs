//! Structural Pattern 4: Decorator
//! Example: drinks wrapped in ingredients that extend description and price
//!
//! Run with: cargo run --bin p4_decorator

trait Drink {
    fn describe(&self) -> String;
    fn price(&self) -> u32;
}

struct Water;
struct Milk;

impl Drink for Water {
    fn describe(&self) -> String {
        "Water".to_string()
    }
    fn price(&self) -> u32 {
        1
    }
}

impl Drink for Milk {
    fn describe(&self) -> String {
        "Milk".to_string()
    }
    fn price(&self) -> u32 {
        10
    }
}

/// A single decorator type; each ingredient is data rather than a subclass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Ingredient {
    Coffee,
    Sugar,
    IceCube,
}

impl Ingredient {
    fn label(self) -> &'static str {
        match self {
            Ingredient::Coffee => "Coffee",
            Ingredient::Sugar => "Sugar",
            Ingredient::IceCube => "Ice Cube",
        }
    }

    fn extra(self) -> u32 {
        match self {
            Ingredient::Coffee => 5,
            Ingredient::Sugar | Ingredient::IceCube => 1,
        }
    }
}

struct With {
    ingredient: Ingredient,
    inner: Box<dyn Drink>,
}

impl Drink for With {
    fn describe(&self) -> String {
        format!("{} + {}", self.inner.describe(), self.ingredient.label())
    }

    fn price(&self) -> u32 {
        self.inner.price() + self.ingredient.extra()
    }
}

trait DrinkExt: Drink + Sized + 'static {
    fn with(self, ingredient: Ingredient) -> With {
        With {
            ingredient,
            inner: Box::new(self),
        }
    }
}

impl<T: Drink + 'static> DrinkExt for T {}

fn main() {
    let iced_coffee = Water
        .with(Ingredient::Sugar)
        .with(Ingredient::IceCube)
        .with(Ingredient::Coffee);
    println!("recipe of Iced Coffee: {}", iced_coffee.describe());
    println!("price: {} $", iced_coffee.price());

    let cafe_latte = Milk.with(Ingredient::Sugar).with(Ingredient::Coffee);
    println!("recipe of Cafe Latte: {}", cafe_latte.describe());
    println!("price: {} $", cafe_latte.price());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iced_coffee() {
        let drink = Water
            .with(Ingredient::Sugar)
            .with(Ingredient::IceCube)
            .with(Ingredient::Coffee);
        assert_eq!(drink.describe(), "Water + Sugar + Ice Cube + Coffee");
        assert_eq!(drink.price(), 8);
    }

    #[test]
    fn test_cafe_latte() {
        let drink = Milk.with(Ingredient::Sugar).with(Ingredient::Coffee);
        assert_eq!(drink.price(), 16);
    }

    #[test]
    fn test_undecorated() {
        assert_eq!(Milk.describe(), "Milk");
        assert_eq!(Water.price(), 1);
    }
}
