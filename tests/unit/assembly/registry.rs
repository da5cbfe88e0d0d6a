//! Tests for the closed domain of cell states

#[cfg(test)]
mod tests {
    use cinetile::assembly::registry::StateRegistry;
    use cinetile::assembly::state::CellState;
    use cinetile::io::configuration::{BLOCKS_X_MAX, BLOCKS_Y_MAX};
    use cinetile::spatial::orientation::Orientation;
    use std::collections::HashSet;

    // Tests the global domain covers the largest grid in every orientation
    // Verified by omitting the tilted orientations
    #[test]
    fn test_global_size() {
        let registry = StateRegistry::global();
        assert_eq!(registry.width(), BLOCKS_X_MAX);
        assert_eq!(registry.height(), BLOCKS_Y_MAX);
        assert_eq!(registry.len(), 6 * 6 * 12);
        assert_eq!(registry.states().len(), registry.len());
    }

    // Tests every state name is unique and resolvable
    // Verified by dropping the orientation from the name
    #[test]
    fn test_names_unique() {
        let registry = StateRegistry::new(3, 2);
        let names: HashSet<String> = registry.names().collect();
        assert_eq!(names.len(), 3 * 2 * 12);

        for name in &names {
            let state = registry.by_name(name).unwrap();
            assert_eq!(&state.to_string(), name);
        }
        assert!(registry.by_name("3_0_north").is_none());
    }

    // Tests listing order follows state ordering
    // Verified by listing in orientation index order
    #[test]
    fn test_listing_sorted() {
        let registry = StateRegistry::new(2, 2);
        assert!(registry.states().windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(registry.names().next().as_deref(), Some("0_0_east"));
        assert_eq!(registry.names().last().as_deref(), Some("1_1_west_up"));
    }

    // Tests membership is bounded by the grid
    // Verified by accepting any coordinates
    #[test]
    fn test_contains_and_get() {
        let registry = StateRegistry::new(2, 3);
        let inside = CellState::new(1, 2, Orientation::SOUTH_DOWN);
        assert!(registry.contains(&inside));
        assert_eq!(registry.get(1, 2, Orientation::SOUTH_DOWN), Some(inside));

        assert!(!registry.contains(&CellState::new(2, 0, Orientation::NORTH)));
        assert_eq!(registry.get(0, 3, Orientation::NORTH), None);
    }

    // Tests every orientation is stored under its own index
    // Verified by filling unknown orientation slots with north
    #[test]
    fn test_every_orientation_registered() {
        let registry = StateRegistry::new(1, 1);
        for orientation in Orientation::ALL {
            assert_eq!(
                registry.get(0, 0, orientation),
                Some(CellState::new(0, 0, orientation))
            );
        }
        let orientations: HashSet<Orientation> =
            registry.states().iter().map(CellState::orientation).collect();
        assert_eq!(orientations.len(), Orientation::ALL.len());
    }

    // Tests an empty grid has an empty domain
    // Verified by clamping dimensions to one
    #[test]
    fn test_empty_domain() {
        let registry = StateRegistry::new(0, 4);
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
    }
}
