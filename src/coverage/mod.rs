//! Coverage module
//!
//! Provides:
//! - Cobertura XML parsing
//! - Per-file coverage records with a defined report ordering

mod cobertura;

pub use cobertura::*;

use std::cmp::Ordering;

/// Coverage data extracted from one report
#[derive(Debug, Clone, Default)]
pub struct CoverageData {
    /// Overall line coverage as a percentage (0.0 - 100.0)
    pub line_coverage: f64,
    /// Overall branch coverage as a percentage (0.0 - 100.0)
    pub branch_coverage: f64,
    /// One record per `<class>` element, sorted by filename
    pub classes: Vec<ClassCoverage>,
}

/// Coverage data for a single file (one `<class>` element)
#[derive(Debug, Clone, PartialEq)]
pub struct ClassCoverage {
    pub filename: String,
    pub line_coverage: f64,
    pub branch_coverage: f64,
}

impl ClassCoverage {
    /// Ordering used for report rows: plain byte-wise filename comparison,
    /// not locale- or numeric-aware ("file10.php" sorts before "file2.php").
    pub fn by_filename(a: &Self, b: &Self) -> Ordering {
        a.filename.cmp(&b.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(filename: &str) -> ClassCoverage {
        ClassCoverage {
            filename: filename.to_string(),
            line_coverage: 0.0,
            branch_coverage: 0.0,
        }
    }

    #[test]
    fn test_ordering_is_bytewise_not_numeric() {
        assert_eq!(
            ClassCoverage::by_filename(&class("file10.php"), &class("file2.php")),
            Ordering::Less
        );
        assert_eq!(
            ClassCoverage::by_filename(&class("a.php"), &class("b.php")),
            Ordering::Less
        );
        assert_eq!(
            ClassCoverage::by_filename(&class("a.php"), &class("a.php")),
            Ordering::Equal
        );
    }
}
