//! Tests for opening validation and cell membership

#[cfg(test)]
mod tests {
    use tilegrout::LayoutError;
    use tilegrout::geometry::dimensions::{Opening, Surface};
    use tilegrout::geometry::grid::CellBounds;
    use tilegrout::layout::opening::{OpeningTest, validate_opening};

    const WALL: Surface = Surface::new(4300.0, 2500.0);

    fn bounds(left: f64, top: f64, right: f64, bottom: f64) -> CellBounds {
        CellBounds {
            left,
            top,
            right,
            bottom,
        }
    }

    // Tests that openings inside the surface are accepted
    #[test]
    fn test_validate_opening_inside_surface() {
        assert!(validate_opening(&WALL, &Opening::new(800.0, 1018.0, 2100.0, 1200.0)).is_ok());
        assert!(validate_opening(&WALL, &Opening::new(800.0, 0.0, 800.0, 2000.0)).is_ok());
    }

    // Tests that an opening touching the far edges is contained
    #[test]
    fn test_validate_opening_touching_far_edge() {
        let opening = Opening::new(2300.0, 500.0, 2000.0, 2000.0);

        assert!(validate_opening(&WALL, &opening).is_ok());
    }

    // Tests that an opening past the surface width names the far edge
    #[test]
    fn test_validate_opening_past_width() {
        let opening = Opening::new(2301.0, 0.0, 2000.0, 100.0);

        match validate_opening(&WALL, &opening) {
            Err(LayoutError::OpeningOutOfBounds {
                field,
                value,
                limit,
            }) => {
                assert_eq!(field, "opening.x + opening.width");
                assert!((value - 4301.0).abs() < f64::EPSILON);
                assert!((limit - 4300.0).abs() < f64::EPSILON);
            }
            other => panic!("expected OpeningOutOfBounds, got {other:?}"),
        }
    }

    // Tests that an opening past the surface length is rejected
    #[test]
    fn test_validate_opening_past_length() {
        let opening = Opening::new(0.0, 1000.0, 100.0, 1501.0);

        assert!(matches!(
            validate_opening(&WALL, &opening),
            Err(LayoutError::OpeningOutOfBounds {
                field: "opening.y + opening.height",
                ..
            })
        ));
    }

    // Tests that negative or undefined offsets are rejected
    #[test]
    fn test_validate_opening_negative_offset() {
        assert!(matches!(
            validate_opening(&WALL, &Opening::new(-1.0, 0.0, 100.0, 100.0)),
            Err(LayoutError::OpeningOutOfBounds {
                field: "opening.x",
                ..
            })
        ));
        assert!(matches!(
            validate_opening(&WALL, &Opening::new(0.0, f64::NAN, 100.0, 100.0)),
            Err(LayoutError::OpeningOutOfBounds {
                field: "opening.y",
                ..
            })
        ));
    }

    // Tests that empty openings are invalid dimensions, not bounds errors
    #[test]
    fn test_validate_opening_empty_size() {
        assert!(matches!(
            validate_opening(&WALL, &Opening::new(0.0, 0.0, 0.0, 100.0)),
            Err(LayoutError::InvalidDimension {
                field: "opening.width",
                ..
            })
        ));
        assert!(matches!(
            validate_opening(&WALL, &Opening::new(0.0, 0.0, 100.0, -3.0)),
            Err(LayoutError::InvalidDimension {
                field: "opening.height",
                ..
            })
        ));
    }

    // Tests that the corner test only looks at the far corner of the cell
    #[test]
    fn test_trailing_corner_membership() {
        let opening = Opening::new(6.0, 6.0, 3.0, 3.0);
        let test = OpeningTest::TrailingCorner;

        assert!(test.contains(&opening, &bounds(6.0, 6.0, 9.0, 9.0)));
        // Far corner on the near opening edge
        assert!(test.contains(&opening, &bounds(3.0, 3.0, 6.0, 6.0)));
        assert!(!test.contains(&opening, &bounds(9.0, 6.0, 12.0, 9.0)));
        assert!(!test.contains(&opening, &bounds(0.0, 0.0, 3.0, 3.0)));
    }

    // Tests that the overlap test needs a positive shared area
    #[test]
    fn test_overlap_membership() {
        let opening = Opening::new(6.0, 6.0, 3.0, 3.0);
        let test = OpeningTest::Overlap;

        assert!(test.contains(&opening, &bounds(6.0, 6.0, 9.0, 9.0)));
        assert!(test.contains(&opening, &bounds(8.0, 8.0, 12.0, 12.0)));
        assert!(!test.contains(&opening, &bounds(3.0, 3.0, 6.0, 6.0)));
        assert!(!test.contains(&opening, &bounds(9.0, 6.0, 12.0, 9.0)));
    }

    // Tests the default membership rule
    #[test]
    fn test_default_is_trailing_corner() {
        assert_eq!(OpeningTest::default(), OpeningTest::TrailingCorner);
    }
}
