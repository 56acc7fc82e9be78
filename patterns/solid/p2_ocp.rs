//! SOLID 2: Open-Closed
//! Example: a product filter extended with new specifications, never modified
//!
//! Run with: cargo run --bin p2_ocp

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug)]
struct Product {
    name: &'static str,
    color: Color,
    size: Size,
}

trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

struct ColorSpec(Color);
struct SizeSpec(Size);

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

impl Specification<Product> for SizeSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Combinators are new types, so adding them never touches existing specs.
struct And<A, B>(A, B);
struct Or<A, B>(A, B);

impl<T, A, B> Specification<T> for And<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) && self.1.is_satisfied(item)
    }
}

impl<T, A, B> Specification<T> for Or<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) || self.1.is_satisfied(item)
    }
}

fn filter<'a, T>(items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
    items.iter().filter(|item| spec.is_satisfied(item)).collect()
}

fn names(products: &[&Product]) -> Vec<&'static str> {
    products.iter().map(|p| p.name).collect()
}

fn catalogue() -> Vec<Product> {
    vec![
        Product {
            name: "Apple",
            color: Color::Green,
            size: Size::Medium,
        },
        Product {
            name: "Tree",
            color: Color::Green,
            size: Size::Large,
        },
        Product {
            name: "House",
            color: Color::Blue,
            size: Size::Large,
        },
        Product {
            name: "Cherry",
            color: Color::Red,
            size: Size::Small,
        },
    ]
}

fn main() {
    let products = catalogue();
    let green = ColorSpec(Color::Green);
    let large = SizeSpec(Size::Large);

    let select = |spec: &dyn Specification<Product>| names(&filter(&products, spec));

    println!("Green products: {:?}", select(&green));
    println!("Large products: {:?}", select(&large));
    println!("Green and large: {:?}", select(&And(&green, &large)));
    println!("Green or large: {:?}", select(&Or(&green, &large)));
}
