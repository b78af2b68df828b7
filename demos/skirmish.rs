//! Terminal walkthrough of the skirmish queries.
//!
//! Run: cargo run --bin skirmish

use skirmish_aoe::{AoeShape, AreaOfEffect};
use skirmish_core::BoardConfig;
use skirmish_demos::{ARENA, Scenario};

const MOVEMENT: i32 = 4;

fn main() {
    let mut scenario = match Scenario::new(ARENA, BoardConfig::default().with_starry(true), 3, 42) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let range = scenario.move_range(MOVEMENT);
    println!("Move range ({} tiles):", range.len());
    println!("{}", scenario.render(&range, '+'));

    scenario.pointer_moved((7.5, 4.5));
    println!("Hover: {:?}", scenario.hover);
    match scenario.path_to_hover(MOVEMENT as usize) {
        Some(path) => {
            println!("Path ({} steps):", path.len().saturating_sub(1));
            println!("{}", scenario.render(&path, '*'));
        }
        None => println!("No path to the hovered tile.\n"),
    }

    for (shape, size) in [
        (AoeShape::Square, 3),
        (AoeShape::Circle, 2),
        (AoeShape::Cone, 3),
        (AoeShape::Line, 5),
    ] {
        let aoe = AreaOfEffect::new(shape, size)
            .with_line_of_sight(true)
            .with_aoe_line_of_sight(true);
        let hit = scenario.aoe_at_hover(&aoe);
        println!("{shape:?} {size} ({} tiles):", hit.len());
        println!("{}", scenario.render(&hit, 'o'));
    }
}
