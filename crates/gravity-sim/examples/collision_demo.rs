//! Collision detection and resolution example
//!
//! A row of touching equal-mass balls is struck by one more ball, cradle
//! style. Gravity is switched off so only collisions move anything, and the
//! diagnostics show momentum and kinetic energy surviving every contact.
//!
//! Run with: cargo run --package gravity-sim --example collision_demo

use gravity_sim::collisions::{CollisionDetector, DirectDetector};
use gravity_sim::{Shape, SimError, Simulation, Vector2};

fn main() -> Result<(), SimError> {
    env_logger::init();

    println!("Elastic collision demo: a row of equal balls\n");
    println!("{}", "=".repeat(60));

    let mut sim = Simulation::new(0.0, [1000.0, 1000.0]);

    // Striker, then five resting balls spaced wider than their diameter
    sim.add_body(
        10.0,
        Some(Vector2::new(100.0, 500.0)),
        Some(Vector2::new(4.0, 0.0)),
        Shape::Circle,
    )?;
    for i in 0..5 {
        let x = 300.0 + 25.0 * f64::from(i);
        sim.add_body(10.0, Some(Vector2::new(x, 500.0)), None, Shape::Circle)?;
    }

    // A square "other" body on the same line: collisions ignore it
    sim.add_body(10.0, Some(Vector2::new(700.0, 500.0)), None, Shape::Other)?;

    let initial = sim.measure();
    println!("\nInitial state:");
    println!("  Bodies: {}", sim.body_count());
    println!("  Kinetic energy: {:.4}", initial.total_kinetic_energy);
    println!("  Momentum: {:.4}", initial.total_momentum);

    let overlapping = DirectDetector.detect(sim.bodies());
    println!("  Overlapping pairs at start: {}", overlapping.len());

    println!("\n{}", "=".repeat(60));
    println!("Running 200 ticks...\n");

    let mut collision_count = 0;
    for _ in 0..200 {
        sim.step();

        for event in sim.last_collisions() {
            println!(
                "tick {:4}: bodies {} and {} touch, separation={:.2}, penetration={:.2}",
                sim.ticks(),
                event.body_a.0,
                event.body_b.0,
                event.separation,
                event.penetration()
            );
        }
        collision_count += sim.last_collisions().len();
    }

    let last = sim.measure();
    println!("\n{}", "=".repeat(60));
    println!("Final statistics:");
    println!("  Ticks: {}", sim.ticks());
    println!("  Collisions resolved: {}", collision_count);
    println!(
        "  Kinetic energy: {:.4} (started at {:.4})",
        last.total_kinetic_energy, initial.total_kinetic_energy
    );
    println!(
        "  Momentum: {:.4} (started at {:.4})",
        last.total_momentum, initial.total_momentum
    );

    println!("\nFinal bodies:");
    for body in sim.bodies() {
        println!(
            "  Body {}: {:?}, pos={}, vel={}",
            body.id.0, body.shape, body.position, body.velocity
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
    Ok(())
}
