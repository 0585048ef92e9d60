//! Named page sizes in PDF points.
//!
//! This is reference data consumed by the configuration layer when listing
//! page sizes; the resolver takes the table as a parameter and never depends
//! on this module maintaining any particular set of names.

/// A named page size with its dimensions in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub name: &'static str,
    pub width_pts: f64,
    pub height_pts: f64,
}

const fn page(name: &'static str, width_pts: f64, height_pts: f64) -> PageSize {
    PageSize {
        name,
        width_pts,
        height_pts,
    }
}

/// Every page size known to the PDF layer, sorted by name.
pub const PAGE_SIZES: &[PageSize] = &[
    page("2A0", 3370.39, 4767.87),
    page("4A0", 4767.87, 6740.79),
    page("A0", 2383.94, 3370.39),
    page("A1", 1683.78, 2383.94),
    page("A10", 73.70, 104.88),
    page("A2", 1190.55, 1683.78),
    page("A3", 841.89, 1190.55),
    page("A4", 595.28, 841.89),
    page("A5", 419.53, 595.28),
    page("A6", 297.64, 419.53),
    page("A7", 209.76, 297.64),
    page("A8", 147.40, 209.76),
    page("A9", 104.88, 147.40),
    page("B0", 2834.65, 4008.19),
    page("B1", 2004.09, 2834.65),
    page("B10", 87.87, 124.72),
    page("B2", 1417.32, 2004.09),
    page("B3", 1000.63, 1417.32),
    page("B4", 708.66, 1000.63),
    page("B5", 498.90, 708.66),
    page("B6", 354.33, 498.90),
    page("B7", 249.45, 354.33),
    page("B8", 175.75, 249.45),
    page("B9", 124.72, 175.75),
    page("C0", 2599.37, 3676.54),
    page("C1", 1836.85, 2599.37),
    page("C10", 79.37, 113.39),
    page("C2", 1298.27, 1836.85),
    page("C3", 918.43, 1298.27),
    page("C4", 649.13, 918.43),
    page("C5", 459.21, 649.13),
    page("C6", 323.15, 459.21),
    page("C7", 229.61, 323.15),
    page("C8", 161.57, 229.61),
    page("C9", 113.39, 161.57),
    page("EXECUTIVE", 521.86, 756.00),
    page("FOLIO", 612.00, 936.00),
    page("LEGAL", 612.00, 1008.00),
    page("LETTER", 612.00, 792.00),
    page("RA0", 2437.80, 3458.27),
    page("RA1", 1729.13, 2437.80),
    page("RA2", 1218.90, 1729.13),
    page("RA3", 864.57, 1218.90),
    page("RA4", 609.45, 864.57),
    page("SRA0", 2551.18, 3628.35),
    page("SRA1", 1814.17, 2551.18),
    page("SRA2", 1275.59, 1814.17),
    page("SRA3", 907.09, 1275.59),
    page("SRA4", 637.80, 907.09),
    page("TABLOID", 792.00, 1224.00),
];

/// Look up a page size by name.
pub fn lookup(name: &str) -> Option<&'static PageSize> {
    PAGE_SIZES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_sizes() {
        let letter = lookup("LETTER").unwrap();
        assert_eq!(letter.width_pts, 612.0);
        assert_eq!(letter.height_pts, 792.0);

        let a4 = lookup("A4").unwrap();
        assert_eq!(a4.width_pts, 595.28);
    }

    #[test]
    fn test_lookup_unknown_size() {
        assert!(lookup("NAPKIN").is_none());
    }

    #[test]
    fn test_table_is_sorted_by_name() {
        for pair in PAGE_SIZES.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} >= {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_all_dimensions_positive() {
        for size in PAGE_SIZES {
            assert!(size.width_pts > 0.0);
            assert!(size.height_pts > 0.0);
        }
    }
}
