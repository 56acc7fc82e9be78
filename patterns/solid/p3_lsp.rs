//! SOLID 3: Liskov Substitution
//! Example: a square that breaks the expectations of rectangle-handling code
//!
//! Run with: cargo run --bin p3_lsp

trait Quad {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);

    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl Quad for Rectangle {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn set_width(&mut self, width: f64) {
        self.width = width;
    }
    fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

/// Keeps both sides equal, so setting one side silently changes the other.
struct Square {
    side: f64,
}

impl Quad for Square {
    fn width(&self) -> f64 {
        self.side
    }
    fn height(&self) -> f64 {
        self.side
    }
    fn set_width(&mut self, width: f64) {
        self.side = width;
    }
    fn set_height(&mut self, height: f64) {
        self.side = height;
    }
}

/// Sizes the shape to 5 x 10 and returns (expected, actual) area.
fn process(quad: &mut dyn Quad) -> (f64, f64) {
    quad.set_width(5.0);
    quad.set_height(10.0);
    (5.0 * 10.0, quad.area())
}

fn main() {
    let mut rectangle = Rectangle {
        width: 2.0,
        height: 3.0,
    };
    let (expected, actual) = process(&mut rectangle);
    println!("rectangle: area expected = {}, got = {}", expected, actual);

    let mut square = Square { side: 7.0 };
    let (expected, actual) = process(&mut square);
    println!("square:    area expected = {}, got = {}", expected, actual);
    println!(
        "square sides after set_width(5) then set_height(10): {} x {}",
        square.width(),
        square.height()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_honours_contract() {
        let mut rectangle = Rectangle {
            width: 1.0,
            height: 1.0,
        };
        let (expected, actual) = process(&mut rectangle);
        assert_eq!(expected, actual);
        assert_eq!((rectangle.width(), rectangle.height()), (5.0, 10.0));
    }

    #[test]
    fn test_square_violates_contract() {
        let mut square = Square { side: 1.0 };
        let (expected, actual) = process(&mut square);
        assert_eq!(expected, 50.0);
        assert_eq!(actual, 100.0);
        // set_height overwrote the width set just before it.
        assert_eq!(square.width(), 10.0);
    }
}
