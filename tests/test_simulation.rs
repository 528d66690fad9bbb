#[cfg(test)]
mod tests {
    use gol_arena::*;

    fn alive_set(engine: &LifeEngine) -> std::collections::BTreeSet<(usize, usize)> {
        engine.alive_cells().into_iter().collect()
    }

    fn translated(
        cells: &std::collections::BTreeSet<(usize, usize)>,
        dx: usize,
        dy: usize,
    ) -> std::collections::BTreeSet<(usize, usize)> {
        cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut engine = LifeEngine::new(32, 32).unwrap();
        engine.load_pattern(SeedPattern::Glider);
        let initial = alive_set(&engine);
        assert_eq!(initial.len(), 5);

        for _ in 0..4 {
            engine.step();
        }
        assert_eq!(alive_set(&engine), translated(&initial, 1, 1));

        for _ in 0..4 {
            engine.step();
        }
        assert_eq!(alive_set(&engine), translated(&initial, 2, 2));
    }

    #[test]
    fn test_toad_has_period_two() {
        let mut engine = LifeEngine::new(16, 16).unwrap();
        engine.load_pattern(SeedPattern::Toad);
        let seed = alive_set(&engine);

        engine.step();
        assert_ne!(alive_set(&engine), seed);
        engine.step();
        assert_eq!(alive_set(&engine), seed);
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let mut engine = LifeEngine::new(32, 32).unwrap();
        engine.load_pattern(SeedPattern::Pulsar);
        let seed = alive_set(&engine);
        assert_eq!(seed.len(), 48);

        engine.step();
        assert_ne!(alive_set(&engine), seed);
        engine.step();
        assert_ne!(alive_set(&engine), seed);
        engine.step();
        assert_eq!(alive_set(&engine), seed);
    }

    #[test]
    fn test_beacon_has_period_two() {
        let mut engine = LifeEngine::new(16, 16).unwrap();
        engine.load_pattern(SeedPattern::Beacon);
        let seed = alive_set(&engine);

        engine.step();
        engine.step();
        assert_eq!(alive_set(&engine), seed);
    }

    #[test]
    fn test_gun_grows_the_population() {
        // nothing reaches the border within 64 generations on this field
        let mut engine = LifeEngine::new(96, 96).unwrap();
        engine.load_pattern(SeedPattern::GosperGliderGun);
        assert_eq!(engine.population(), 36);

        for _ in 0..64 {
            engine.step();
        }
        assert!(
            engine.population() > 36,
            "expected emitted gliders, population is {}",
            engine.population()
        );
    }

    #[test]
    fn test_region_bounds_every_activation() {
        let mut engine = LifeEngine::new(64, 64).unwrap();
        let cells = [(5, 5), (60, 12), (33, 33), (2, 58), (47, 3)];
        for &(x, y) in &cells {
            engine.make_alive(x, y).unwrap();
        }
        let region = engine.region();
        for &(x, y) in &cells {
            assert!(region.contains(x, y));
        }
        assert_eq!(region.min_x(), 2);
        assert_eq!(region.max_x(), 60);
        assert_eq!(region.min_y(), 3);
        assert_eq!(region.max_y(), 58);
    }

    #[test]
    fn test_identical_soups_evolve_identically() {
        let mut a = LifeEngine::new(48, 48).unwrap();
        let mut b = LifeEngine::new(48, 48).unwrap();
        a.load_soup(0.3, Some(1234));
        b.load_soup(0.3, Some(1234));

        for _ in 0..20 {
            a.step();
            b.step();
            assert_eq!(alive_set(&a), alive_set(&b));
        }
    }
}
