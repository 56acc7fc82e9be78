//! Structural Pattern 2: Bridge
//! Example: shapes delegating their drawing to a swappable implementor
//!
//! Run with: cargo run --bin p2_bridge

use std::rc::Rc;

/// Implementor side of the bridge.
trait Drawing {
    fn draw_square(&self, side: f64) -> String;
}

struct Pencil;
struct Brush;

impl Drawing for Pencil {
    fn draw_square(&self, side: f64) -> String {
        format!("draw square of side {} with pencil", side)
    }
}

impl Drawing for Brush {
    fn draw_square(&self, side: f64) -> String {
        format!("draw square of side {} with brush", side)
    }
}

/// Abstraction side of the bridge.
trait Shape {
    fn draw(&self) -> String;
    fn resize(&mut self, factor: f64);
}

struct Square {
    side: f64,
    drawing: Rc<dyn Drawing>,
}

impl Square {
    fn new(side: f64, drawing: Rc<dyn Drawing>) -> Self {
        Square { side, drawing }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        self.drawing.draw_square(self.side)
    }

    fn resize(&mut self, factor: f64) {
        self.side *= factor;
    }
}

fn main() {
    let brush: Rc<dyn Drawing> = Rc::new(Brush);
    let pencil: Rc<dyn Drawing> = Rc::new(Pencil);

    let mut square: Box<dyn Shape> = Box::new(Square::new(5.0, Rc::clone(&brush)));
    println!("{}", square.draw());
    println!("Resize square by 2");
    square.resize(2.0);
    println!("{}", square.draw());

    square = Box::new(Square::new(10.0, pencil));
    println!("{}", square.draw());
}
