use eventboard_core::Category;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run() {
    println!("{}", "Categorieën".bold());
    for category in Category::ALL {
        println!("  {}", category.render());
    }
}
