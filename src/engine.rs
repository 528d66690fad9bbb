use crate::{random_soup, ActiveRegion, Grid, GridError, Position, SeedPattern};
use ahash::AHashSet;
use anyhow::Result;
use std::time::Duration;

/// Boundary to the rendering/pooling collaborator.
///
/// The engine calls these exactly once per actual state change: a cell that
/// survives a generation step produces no notification at all.
pub trait CellRenderer {
    /// A dead cell became alive; show a marker at its anchor.
    fn cell_activated(&mut self, position: Position);
    /// An alive cell died; hide the marker at its anchor.
    fn cell_deactivated(&mut self, position: Position);
}

/// Renderer that discards every notification. Useful for headless runs and
/// tests that only care about grid state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl CellRenderer for NullRenderer {
    fn cell_activated(&mut self, _position: Position) {}
    fn cell_deactivated(&mut self, _position: Position) {}
}

/// Scheduling state of the simulation. Transitions are driven entirely by
/// the external timing collaborator through [`LifeEngine::start`] and
/// [`LifeEngine::pause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Paused,
    Running,
}

const IN_SCAN: &str = "scan rect stays inside the grid";
const IN_INTERIOR: &str = "interior coordinates are inside the grid";

/// Orchestrates generation stepping over a [`Grid`], restricting work to the
/// rectangle the [`ActiveRegion`] knows may contain life.
///
/// Every activation, whether from stepping, pattern seeding or user edits,
/// flows through [`LifeEngine::make_alive`], so the region is consistent
/// with the grid regardless of where a cell came from.
pub struct LifeEngine {
    grid: Grid,
    region: ActiveRegion,
    state: SimState,
    interval: Duration,
    renderer: Box<dyn CellRenderer + Send>,
}

impl LifeEngine {
    /// Creates a paused engine over an all-dead grid, discarding render
    /// notifications.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are below the grid's minimum side length.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_renderer(width, height, Box::new(NullRenderer))
    }

    /// Creates a paused engine that reports cell transitions to `renderer`.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are below the grid's minimum side length.
    pub fn with_renderer(
        width: usize,
        height: usize,
        renderer: Box<dyn CellRenderer + Send>,
    ) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        let (cx, cy) = grid.center();
        Ok(Self {
            grid,
            region: ActiveRegion::new(cx, cy),
            state: SimState::Paused,
            interval: Duration::from_secs(1),
            renderer,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn region(&self) -> &ActiveRegion {
        &self.region
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    pub fn start(&mut self) {
        self.state = SimState::Running;
    }

    pub fn pause(&mut self) {
        self.state = SimState::Paused;
    }

    /// Maps a normalized `[0, 1]` speed to the tick interval:
    /// `interval = 1 - value` seconds, with `0.05` substituted when the
    /// subtraction yields zero.
    pub fn set_speed(&mut self, value: f64) {
        let mut secs = 1.0 - value.clamp(0.0, 1.0);
        if secs == 0.0 {
            secs = 0.05;
        }
        self.interval = Duration::from_secs_f64(secs);
    }

    /// Delay between scheduled steps, consumed by the timing collaborator.
    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Coordinates of every alive cell, collected from the tracked region.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        let (width, height) = self.grid.dimensions();
        self.region
            .scan_rect(width, height)
            .iter()
            .filter(|&(x, y)| self.grid.is_alive(x, y).expect(IN_SCAN))
            .collect()
    }

    /// Advances the simulation by one generation.
    ///
    /// The tracked rectangle is scanned once to build the next alive set
    /// under B3/S23 (birth on exactly 3 live neighbors, survival on 2 or 3),
    /// the region is rebuilt from scratch around the cells that end up
    /// alive, and the renderer hears about every transition exactly once.
    pub fn step(&mut self) {
        let (width, height) = self.grid.dimensions();
        let rect = self.region.scan_rect(width, height);

        let mut next_alive = AHashSet::new();
        for (x, y) in rect.iter() {
            let neighbors = self.grid.alive_neighbors(x, y).expect(IN_SCAN);
            let alive = self.grid.is_alive(x, y).expect(IN_SCAN);
            if neighbors == 3 || (alive && neighbors == 2) {
                next_alive.insert((x, y));
            }
        }

        let (cx, cy) = self.grid.center();
        self.region.reset(cx, cy);

        for (x, y) in rect.iter() {
            let alive = next_alive.contains(&(x, y));
            if alive {
                self.region.expand(x, y);
            }
            let was_alive = self.grid.is_alive(x, y).expect(IN_SCAN);
            if was_alive != alive {
                self.grid.set_alive(x, y, alive).expect(IN_SCAN);
                let position = self.grid.get(x, y).expect(IN_SCAN).position();
                if alive {
                    self.renderer.cell_activated(position);
                } else {
                    self.renderer.cell_deactivated(position);
                }
            }
        }
    }

    /// Sets the cell alive, notifies the renderer if it was dead, and grows
    /// the tracked region to include it. Single entry point for generation
    /// stepping, pattern seeding and user edits alike.
    ///
    /// The border frame is not fenced off here: stepping and seeding stay in
    /// the interior on their own, and pointer edits go through
    /// [`LifeEngine::toggle_cell`], which enforces the fence. External
    /// callers should do the same.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn make_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let was_alive = self.grid.is_alive(x, y)?;
        self.grid.set_alive(x, y, true)?;
        self.region.expand(x, y);
        if !was_alive {
            let position = self.grid.get(x, y)?.position();
            self.renderer.cell_activated(position);
        }
        Ok(())
    }

    /// Flips the cell under a pointer edit. The 1-cell border frame is never
    /// user-editable: edits there, or outside the grid entirely, are a
    /// silent no-op.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if !self.in_interior(x, y) {
            return;
        }
        if self.grid.is_alive(x, y).expect(IN_INTERIOR) {
            self.grid.set_alive(x, y, false).expect(IN_INTERIOR);
            let position = self.grid.get(x, y).expect(IN_INTERIOR).position();
            self.renderer.cell_deactivated(position);
        } else {
            self.make_alive(x, y).expect(IN_INTERIOR);
        }
    }

    /// Kills every cell in the tracked rectangle and collapses the region
    /// back to the grid center. Alive cells never escape the scan rectangle,
    /// so this clears the whole field; repeating it is a no-op.
    pub fn clear(&mut self) {
        let (width, height) = self.grid.dimensions();
        for (x, y) in self.region.scan_rect(width, height).iter() {
            if self.grid.is_alive(x, y).expect(IN_SCAN) {
                self.grid.set_alive(x, y, false).expect(IN_SCAN);
                let position = self.grid.get(x, y).expect(IN_SCAN).position();
                self.renderer.cell_deactivated(position);
            }
        }
        let (cx, cy) = self.grid.center();
        self.region.reset(cx, cy);
    }

    /// Clears the field and seeds `pattern` at the grid center. Pattern
    /// cells that miss the editable interior are skipped.
    pub fn load_pattern(&mut self, pattern: SeedPattern) {
        self.clear();
        let (cx, cy) = self.grid.center();
        for (x, y) in pattern.cells_at(cx, cy) {
            if self.in_interior(x, y) {
                self.make_alive(x, y).expect(IN_INTERIOR);
            }
        }
    }

    /// Seeds a pattern by name. Unknown names seed nothing and return
    /// `false`; the field is left untouched.
    pub fn load_pattern_named(&mut self, name: &str) -> bool {
        match SeedPattern::from_name(name) {
            Some(pattern) => {
                self.load_pattern(pattern);
                true
            }
            None => false,
        }
    }

    /// Clears the field and fills the interior with a random soup of the
    /// given density. `Some` seed makes the fill reproducible.
    pub fn load_soup(&mut self, density: f64, seed: Option<u64>) {
        self.clear();
        let (width, height) = self.grid.dimensions();
        for (x, y) in random_soup(width, height, density, seed) {
            self.make_alive(x, y).expect(IN_INTERIOR);
        }
    }

    fn in_interior(&self, x: usize, y: usize) -> bool {
        let (width, height) = self.grid.dimensions();
        x >= 1 && y >= 1 && x < width - 1 && y < height - 1
    }
}
