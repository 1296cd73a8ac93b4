//! Tests for the grid sink contract and in-memory sheet

#[cfg(test)]
mod tests {
    use tilegrout::LayoutError;
    use tilegrout::io::sink::{GridSink, MemorySheet, SheetValue};
    use tilegrout::layout::classify::{Cell, CellClass, CellKind};

    // Tests value conversions and display
    #[test]
    fn test_sheet_value_conversions() {
        assert_eq!(SheetValue::from(3.5), SheetValue::Number(3.5));
        assert_eq!(SheetValue::from(4_usize), SheetValue::Number(4.0));
        assert_eq!(SheetValue::from("floor"), SheetValue::Text("floor".to_string()));
        assert_eq!(SheetValue::from(9.0).to_string(), "9");
        assert_eq!(SheetValue::from("a b").to_string(), "a b");
    }

    // Tests that written cells carry their class and tile number
    #[test]
    fn test_memory_sheet_write_cell() {
        let mut sheet = MemorySheet::new("floor");
        sheet
            .write_cell(&Cell {
                row: 2,
                col: 2,
                kind: CellKind::Tile { number: 1 },
            })
            .unwrap();
        sheet
            .write_cell(&Cell {
                row: 1,
                col: 2,
                kind: CellKind::Grout { area: 555.0 },
            })
            .unwrap();

        assert_eq!(sheet.class(2, 2), Some(CellClass::Tile));
        assert_eq!(sheet.value(2, 2), Some(&SheetValue::Number(1.0)));
        assert_eq!(sheet.class(1, 2), Some(CellClass::Grout));
        assert_eq!(sheet.value(1, 2), None);
        assert_eq!(sheet.len(), 2);
    }

    // Tests that values and fills on the same address coexist
    #[test]
    fn test_memory_sheet_value_keeps_class() {
        let mut sheet = MemorySheet::new("wall");
        sheet.write_value(1, 1, SheetValue::Number(3.0)).unwrap();
        sheet
            .write_cell(&Cell {
                row: 1,
                col: 1,
                kind: CellKind::Opening,
            })
            .unwrap();

        assert_eq!(sheet.value(1, 1), Some(&SheetValue::Number(3.0)));
        assert_eq!(sheet.class(1, 1), Some(CellClass::Opening));
        assert_eq!(sheet.title(), "wall");
        assert_eq!(sheet.describe(), "sheet 'wall'");
    }

    // Tests tab-separated export of a sparse sheet
    #[test]
    fn test_memory_sheet_to_tsv() {
        let mut sheet = MemorySheet::new("t");
        assert!(sheet.is_empty());
        assert_eq!(sheet.extent(), (0, 0));
        assert_eq!(sheet.to_tsv(), "");

        sheet.write_value(1, 1, SheetValue::from(3.0)).unwrap();
        sheet.write_value(1, 3, SheetValue::from("a\tb")).unwrap();
        sheet.write_value(3, 2, SheetValue::from(7_usize)).unwrap();

        assert_eq!(sheet.extent(), (3, 3));
        assert_eq!(sheet.to_tsv(), "3\t\ta b\n\n\t7\n");
    }

    // Tests writing to disk and failing on an unusable path
    #[test]
    fn test_memory_sheet_write_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let mut sheet = MemorySheet::new("t");
        sheet.write_value(1, 1, SheetValue::from(1.5)).unwrap();

        let path = dir.path().join("t.tsv");
        sheet.write_tsv(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.5\n");

        let blocked = dir.path().join("missing").join("t.tsv");
        assert!(matches!(
            sheet.write_tsv(&blocked),
            Err(LayoutError::SinkUnavailable { .. })
        ));
    }
}
