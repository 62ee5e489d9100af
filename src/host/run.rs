//! The host-driven update/render loop.
//!
//! Single-threaded cooperative poll loop: each frame drains pending input
//! events, conditionally runs one generation step, redraws every cell and
//! sleeps to cap the frame rate. The grid is exclusively owned by this loop.

use crate::config::Settings;
use crate::engine::{Grid, RuleTable, Species};
use crate::host::frame::FrameLimiter;
use crate::host::scheduler::StepScheduler;
use crate::host::traits::{Event, InputSource, Renderer, SpriteHandle};
use anyhow::{Context, Result};

/// Run the simulation until a quit event or the configured generation limit.
/// Returns the final grid and the number of generations stepped.
pub fn run_loop(
    settings: &Settings,
    mut grid: Grid,
    rules: &RuleTable,
    renderer: &mut dyn Renderer,
    input: &mut dyn InputSource,
) -> Result<(Grid, u64)> {
    let sprite_a = renderer
        .load_sprite(&settings.species.a.sprite)
        .with_context(|| format!("Failed to load sprite '{}'", settings.species.a.sprite))?;
    let sprite_b = renderer
        .load_sprite(&settings.species.b.sprite)
        .with_context(|| format!("Failed to load sprite '{}'", settings.species.b.sprite))?;

    let mut scheduler = StepScheduler::new(settings.simulation.period);
    let mut limiter = FrameLimiter::new(settings.display.max_fps);
    let mut generation: u64 = 0;

    log::info!(
        "Starting host loop: {}x{} cells, period {}",
        grid.width,
        grid.height,
        settings.simulation.period
    );

    loop {
        for event in input.poll_events() {
            match event {
                Event::Quit => {
                    log::info!("Quit requested at generation {generation}");
                    return Ok((grid, generation));
                }
                Event::ToggleStart => scheduler.start(),
            }
        }

        if scheduler.tick() {
            grid = rules.step(&grid);
            generation += 1;
            log::info!("generation {generation}");
        }

        draw_frame(renderer, &grid, sprite_a, sprite_b, settings)?;

        if let Some(max) = settings.simulation.max_generations {
            if generation >= max {
                log::info!("Generation limit {max} reached");
                return Ok((grid, generation));
            }
        }

        limiter.sleep();
    }
}

/// Redraw all cells: clear to the dead color, then one sprite per live cell
fn draw_frame(
    renderer: &mut dyn Renderer,
    grid: &Grid,
    sprite_a: SpriteHandle,
    sprite_b: SpriteHandle,
    settings: &Settings,
) -> Result<()> {
    renderer.clear(settings.display.dead_color);
    for (row, col) in grid.living_cells() {
        let sprite = match grid.get(row, col).species() {
            Some(Species::A) => sprite_a,
            _ => sprite_b,
        };
        renderer.draw_sprite(sprite, col, row);
    }
    renderer.present()
}
