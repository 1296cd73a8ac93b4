//! Tests for axis band planning

#[cfg(test)]
mod tests {
    use tilegrout::LayoutError;
    use tilegrout::geometry::band::{Band, BandKind, plan_axis};

    fn sizes(bands: &[Band]) -> Vec<f64> {
        bands.iter().map(|band| band.size).collect()
    }

    // Tests that band sizes always add up to the planned extent
    #[test]
    fn test_plan_axis_sums_to_extent() {
        let cases = [
            (4000.0, 185.0, 3.0),
            (4300.0, 598.0, 3.0),
            (2500.0, 200.0, 3.0),
            (1000.0, 200.0, 3.0),
            (10.0, 2.0, 3.0),
            (9.0, 3.0, 3.0),
            (2.0, 5.0, 3.0),
            (611.0, 300.0, 5.0),
        ];

        for (extent, unit, separator) in cases {
            let bands = plan_axis(extent, unit, separator).unwrap();
            let total: f64 = bands.iter().map(|band| band.size).sum();
            assert!(
                (total - extent).abs() < 1e-9,
                "bands for {extent}/{unit}/{separator} sum to {total}"
            );
        }
    }

    // Tests that bands alternate grout and tile, starting and ending with grout
    #[test]
    fn test_plan_axis_alternates_kinds() {
        for (extent, unit, separator) in [(4000.0, 185.0, 3.0), (1000.0, 200.0, 3.0)] {
            let bands = plan_axis(extent, unit, separator).unwrap();

            assert_eq!(bands.len() % 2, 1);
            for (index, band) in bands.iter().enumerate() {
                let expected = if index % 2 == 0 {
                    BandKind::Grout
                } else {
                    BandKind::Tile
                };
                assert_eq!(band.kind, expected, "band {} of {extent}", index + 1);
            }
        }
    }

    // Tests that only the final tile band is trimmed
    #[test]
    fn test_plan_axis_trims_last_tile() {
        let bands = plan_axis(1000.0, 200.0, 3.0).unwrap();

        assert_eq!(
            sizes(&bands),
            vec![3.0, 200.0, 3.0, 200.0, 3.0, 200.0, 3.0, 200.0, 3.0, 182.0, 3.0]
        );
        let trimmed: Vec<usize> = bands
            .iter()
            .enumerate()
            .filter(|(_, band)| band.trimmed)
            .map(|(index, _)| index + 1)
            .collect();
        assert_eq!(trimmed, vec![10]);
    }

    // Tests the floor width used by the built-in jobs
    #[test]
    fn test_plan_axis_floor_width() {
        let bands = plan_axis(4000.0, 185.0, 3.0).unwrap();

        assert_eq!(bands.len(), 45);
        assert_eq!(bands.iter().filter(|band| band.is_tile()).count(), 22);
        assert_eq!(bands.get(43), Some(&Band::tile(46.0, true)));
        assert_eq!(bands.last(), Some(&Band::grout(3.0)));
    }

    // Tests that a tile plus joint exactly filling the axis is not trimmed
    #[test]
    fn test_plan_axis_exact_fit() {
        let bands = plan_axis(9.0, 3.0, 3.0).unwrap();

        assert_eq!(
            bands,
            vec![Band::grout(3.0), Band::tile(3.0, false), Band::grout(3.0)]
        );
    }

    // Tests that a strip too narrow for a tile widens the preceding joint
    #[test]
    fn test_plan_axis_absorbs_sliver() {
        let bands = plan_axis(10.0, 2.0, 3.0).unwrap();

        assert_eq!(
            bands,
            vec![Band::grout(3.0), Band::tile(2.0, false), Band::grout(5.0)]
        );
        assert!(bands.iter().all(|band| band.size > 0.0));
    }

    // Tests that an axis shorter than one joint is a single grout band
    #[test]
    fn test_plan_axis_shorter_than_joint() {
        let bands = plan_axis(2.0, 5.0, 3.0).unwrap();

        assert_eq!(bands, vec![Band::grout(2.0)]);
    }

    // Tests that an axis holding no complete tile still yields a trimmed one
    #[test]
    fn test_plan_axis_tile_longer_than_extent() {
        let bands = plan_axis(100.0, 598.0, 3.0).unwrap();

        assert_eq!(
            bands,
            vec![Band::grout(3.0), Band::tile(94.0, true), Band::grout(3.0)]
        );
    }

    // Tests that a decimal exact fit keeps every tile full-sized and untrimmed
    #[test]
    fn test_plan_axis_decimal_exact_fit() {
        let bands = plan_axis(1513.2, 300.0, 2.2).unwrap();

        assert_eq!(bands.len(), 11);
        let tiles: Vec<&Band> = bands.iter().filter(|band| band.is_tile()).collect();
        assert_eq!(tiles.len(), 5);
        assert!(tiles.iter().all(|band| !band.trimmed && band.size == 300.0));
        let closing = bands.last().unwrap();
        assert_eq!(closing.kind, BandKind::Grout);
        assert!((closing.size - 2.2).abs() < 1e-9);
    }

    // Tests exact fits across decimal tile and joint sizes
    #[test]
    fn test_plan_axis_decimal_fits_sweep() {
        for tile in [297.3, 200.1, 33.3, 598.7] {
            for joint in [0.7, 1.5, 2.2, 3.1] {
                for count in 1..=8_u32 {
                    let extent = f64::from(count) * (tile + joint) + joint;
                    let bands = plan_axis(extent, tile, joint).unwrap();

                    let tiles: Vec<&Band> = bands.iter().filter(|band| band.is_tile()).collect();
                    assert_eq!(tiles.len(), count as usize, "{count} x {tile} + {joint}");
                    assert!(
                        tiles.iter().all(|band| !band.trimmed && band.size == tile),
                        "{count} x {tile} + {joint} trimmed a full tile"
                    );
                }
            }
        }
    }

    // Tests that a leftover of exactly one joint never becomes a micro tile
    #[test]
    fn test_plan_axis_decimal_leftover_widens_joint() {
        for tile in [297.3, 200.1, 33.3, 598.7] {
            for joint in [0.7, 1.5, 2.2, 3.1] {
                for count in 1..=8_u32 {
                    let extent = f64::from(count) * (tile + joint) + 2.0 * joint;
                    let bands = plan_axis(extent, tile, joint).unwrap();

                    let label = format!("{count} x {tile} + {joint}");
                    assert_eq!(bands.len(), 2 * count as usize + 1, "{label}");
                    assert!(bands.iter().all(|band| band.size >= joint - 1e-9), "{label}");
                    let closing = bands.last().unwrap();
                    assert!((closing.size - 2.0 * joint).abs() < 1e-9, "{label}");
                }
            }
        }
    }

    // Tests that the leftover strip of a decimal surface widens the last joint
    #[test]
    fn test_plan_axis_decimal_sliver() {
        let bands = plan_axis(1791.8, 297.3, 1.0).unwrap();

        assert_eq!(bands.len(), 13);
        assert_eq!(bands.iter().filter(|band| band.is_tile()).count(), 6);
        assert!(bands.iter().all(|band| band.size >= 1.0 - 1e-9));
        assert!((bands.last().unwrap().size - 2.0).abs() < 1e-9);
    }

    // Tests that every non-positive or non-finite input is rejected by name
    #[test]
    fn test_plan_axis_rejects_invalid_inputs() {
        let cases = [
            (0.0, 200.0, 3.0, "extent"),
            (-5.0, 200.0, 3.0, "extent"),
            (f64::NAN, 200.0, 3.0, "extent"),
            (1000.0, 0.0, 3.0, "unit_size"),
            (1000.0, f64::INFINITY, 3.0, "unit_size"),
            (1000.0, 200.0, -1.0, "separator_size"),
        ];

        for (extent, unit, separator, expected) in cases {
            match plan_axis(extent, unit, separator) {
                Err(LayoutError::InvalidDimension { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidDimension for {expected}, got {other:?}"),
            }
        }
    }

    // Tests that absurd extent to tile ratios are refused before allocating
    #[test]
    fn test_plan_axis_rejects_too_many_bands() {
        let result = plan_axis(1.0e9, 1.0, 1.0);

        assert!(matches!(
            result,
            Err(LayoutError::GridTooLarge { limit: 10_000, .. })
        ));
    }

    // Tests the band constructors and tile check
    #[test]
    fn test_band_constructors() {
        let grout = Band::grout(3.0);
        let tile = Band::tile(200.0, false);

        assert_eq!(grout.kind, BandKind::Grout);
        assert!(!grout.is_tile());
        assert!(!grout.trimmed);
        assert!(tile.is_tile());
        assert!(Band::tile(12.0, true).trimmed);
    }
}
