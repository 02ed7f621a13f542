//! Drawable capability shared by everything that occupies board cells.
//!
//! Renderers only need to know which cells an entity covers and how to colour
//! them, so they can draw snake and food uniformly through `&dyn Drawable`.

use crate::food::Food;
use crate::snake::Snake;
use crate::types::{Cell, Rgb, APPLE_COLOR, BORDER_COLOR, SNAKE_COLOR};

pub trait Drawable {
    /// Call `f` once for every occupied cell.
    fn for_each_cell(&self, f: &mut dyn FnMut(Cell));

    /// Fill colour of each cell.
    fn color(&self) -> Rgb;

    /// Outline colour of each cell.
    fn border_color(&self) -> Rgb {
        BORDER_COLOR
    }
}

impl Drawable for Snake {
    fn for_each_cell(&self, f: &mut dyn FnMut(Cell)) {
        for &cell in self.body() {
            f(cell);
        }
    }

    fn color(&self) -> Rgb {
        SNAKE_COLOR
    }
}

impl Drawable for Food {
    fn for_each_cell(&self, f: &mut dyn FnMut(Cell)) {
        f(self.position());
    }

    fn color(&self) -> Rgb {
        APPLE_COLOR
    }
}
