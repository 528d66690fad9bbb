use rand::{Rng, SeedableRng};

/// Named seed patterns, stored as cell offsets relative to a placement
/// center. Loading one touches no grid state directly: the caller clears the
/// field and routes every returned coordinate through the same activation
/// path as user edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli_deps", derive(clap::ValueEnum))]
pub enum SeedPattern {
    /// 2x2 still life.
    Block,
    /// Period-2 oscillator, seeded in its vertical phase.
    Blinker,
    /// Period-2 oscillator of two staggered rows.
    Toad,
    /// Period-2 oscillator of two blinking corners.
    Beacon,
    /// Period-3 oscillator, 48 cells.
    Pulsar,
    /// Methuselah that stays chaotic for over a thousand generations.
    RPentomino,
    /// The 5-cell diagonal spaceship.
    Glider,
    /// Gun emitting a glider every 30 generations.
    GosperGliderGun,
}

impl SeedPattern {
    pub const ALL: [SeedPattern; 8] = [
        SeedPattern::Block,
        SeedPattern::Blinker,
        SeedPattern::Toad,
        SeedPattern::Beacon,
        SeedPattern::Pulsar,
        SeedPattern::RPentomino,
        SeedPattern::Glider,
        SeedPattern::GosperGliderGun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SeedPattern::Block => "block",
            SeedPattern::Blinker => "blinker",
            SeedPattern::Toad => "toad",
            SeedPattern::Beacon => "beacon",
            SeedPattern::Pulsar => "pulsar",
            SeedPattern::RPentomino => "r-pentomino",
            SeedPattern::Glider => "glider",
            SeedPattern::GosperGliderGun => "gosper-glider-gun",
        }
    }

    /// Case-insensitive lookup. Unknown identifiers yield `None`, which
    /// callers treat as a no-op seed rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Cell offsets relative to the placement center.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            SeedPattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            SeedPattern::Blinker => &[(0, -1), (0, 0), (0, 1)],
            SeedPattern::Toad => &[(0, 0), (1, 0), (2, 0), (-1, 1), (0, 1), (1, 1)],
            SeedPattern::Beacon => &[
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 2),
                (3, 2),
                (2, 3),
                (3, 3),
            ],
            SeedPattern::Pulsar => &[
                (-4, -6),
                (-3, -6),
                (-2, -6),
                (2, -6),
                (3, -6),
                (4, -6),
                (-6, -4),
                (-1, -4),
                (1, -4),
                (6, -4),
                (-6, -3),
                (-1, -3),
                (1, -3),
                (6, -3),
                (-6, -2),
                (-1, -2),
                (1, -2),
                (6, -2),
                (-4, -1),
                (-3, -1),
                (-2, -1),
                (2, -1),
                (3, -1),
                (4, -1),
                (-4, 1),
                (-3, 1),
                (-2, 1),
                (2, 1),
                (3, 1),
                (4, 1),
                (-6, 2),
                (-1, 2),
                (1, 2),
                (6, 2),
                (-6, 3),
                (-1, 3),
                (1, 3),
                (6, 3),
                (-6, 4),
                (-1, 4),
                (1, 4),
                (6, 4),
                (-4, 6),
                (-3, 6),
                (-2, 6),
                (2, 6),
                (3, 6),
                (4, 6),
            ],
            SeedPattern::RPentomino => &[(0, 0), (1, 0), (1, -1), (0, 1), (-1, 1)],
            SeedPattern::Glider => &[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)],
            SeedPattern::GosperGliderGun => &[
                (-17, 0),
                (-16, 0),
                (-17, 1),
                (-16, 1),
                (-7, 0),
                (-7, 1),
                (-7, 2),
                (-6, -1),
                (-6, 3),
                (-5, -2),
                (-5, 4),
                (-4, -2),
                (-4, 4),
                (-3, 1),
                (-2, -1),
                (-2, 3),
                (-1, 0),
                (-1, 1),
                (-1, 2),
                (0, 1),
                (3, -2),
                (3, -1),
                (3, 0),
                (4, -2),
                (4, -1),
                (4, 0),
                (5, -3),
                (5, 1),
                (7, -4),
                (7, -3),
                (7, 1),
                (7, 2),
                (17, -2),
                (17, -1),
                (18, -2),
                (18, -1),
            ],
        }
    }

    /// Absolute coordinates of the pattern centered on `(cx, cy)`. Offsets
    /// that would underflow the coordinate space are dropped; the loader
    /// discards anything else that misses the grid interior.
    pub fn cells_at(self, cx: usize, cy: usize) -> Vec<(usize, usize)> {
        self.offsets()
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = cx.checked_add_signed(dx as isize)?;
                let y = cy.checked_add_signed(dy as isize)?;
                Some((x, y))
            })
            .collect()
    }
}

/// Fills the editable interior of a `width` x `height` field with a random
/// soup of the given density.
///
/// The outermost frame is left dead, matching the user-edit fence. `Some`
/// seed makes the soup reproducible; `None` seeds from the OS.
pub fn random_soup(
    width: usize,
    height: usize,
    density: f64,
    seed: Option<u64>,
) -> Vec<(usize, usize)> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_os_rng()
    };

    let mut cells = Vec::new();
    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if rng.random::<f64>() < density {
                cells.push((x, y));
            }
        }
    }
    cells
}
