use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::GridView;

/// Something cells can be painted onto. Positions and sizes are in pixels.
pub trait Surface {
    /// Paint an alive cell
    fn fill_cell(&mut self, x: f32, y: f32, size: f32);

    /// Paint a dead cell
    fn clear_cell(&mut self, x: f32, y: f32, size: f32);
}

/// Draws straight to the macroquad window
#[derive(Clone, Copy, Debug)]
pub struct MacroquadSurface {
    pub alive: Color,
    pub dead: Color,
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self {
            alive: BLACK,
            dead: WHITE,
        }
    }
}

impl Surface for MacroquadSurface {
    fn fill_cell(&mut self, x: f32, y: f32, size: f32) {
        draw_rectangle(x, y, size, size, self.alive);
    }

    fn clear_cell(&mut self, x: f32, y: f32, size: f32) {
        draw_rectangle(x, y, size, size, self.dead);
    }
}

/// Draw every cell of the current generation as a `cell_size` square at
/// `(i * cell_size, j * cell_size)`
pub fn draw_grid<S: Surface + ?Sized>(view: GridView<'_>, surface: &mut S, cell_size: f32) {
    for (i, j, alive) in view.iter_cells() {
        let x = i as f32 * cell_size;
        let y = j as f32 * cell_size;
        if alive {
            surface.fill_cell(x, y, cell_size);
        } else {
            surface.clear_cell(x, y, cell_size);
        }
    }
}

/// One-line status text for the overlay
pub fn status_line(sim: &Simulation) -> String {
    let grid = sim.grid();
    let state = if sim.is_running() { "" } else { " [paused]" };
    format!(
        "Gen {} | Pop {} | {} ms{}",
        grid.generation(),
        grid.population(),
        sim.interval().as_millis(),
        state
    )
}

/// Draw the status overlay with a backing box so it reads over any cells
pub fn draw_status(sim: &Simulation, x: f32, y: f32) {
    let text = status_line(sim);
    let dims = measure_text(&text, None, 16, 1.0);
    draw_rectangle(
        x - 4.0,
        y - dims.offset_y - 4.0,
        dims.width + 8.0,
        dims.height + 8.0,
        Color::from_rgba(30, 30, 30, 200),
    );
    draw_text(&text, x, y, 16.0, Color::from_rgba(0, 255, 150, 255));
}
