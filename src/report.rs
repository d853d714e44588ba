use crate::category::Category;
use crate::tally::Tally;
use std::collections::HashMap;
use std::fmt;

/// The summary written to the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    total_recycled: i64,
    percentages: HashMap<Category, f64>,
}

impl Report {
    pub fn from_tally(tally: &Tally) -> Report {
        Report {
            total_recycled: tally.total_recycled(),
            percentages: tally.percentage_breakdown(),
        }
    }

    pub fn total_recycled(&self) -> i64 {
        self.total_recycled
    }

    /// Missing categories count as zero.
    pub fn percentage(&self, category: Category) -> f64 {
        self.percentages.get(&category).copied().unwrap_or(0.0)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total recycled: {}", self.total_recycled)?;
        for category in Category::ALL {
            write!(
                f,
                "\n{} percentage: {:.2}%",
                category.label(),
                self.percentage(category)
            )?;
        }
        Ok(())
    }
}
