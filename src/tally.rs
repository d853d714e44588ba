use crate::category::Category;
use std::collections::HashMap;

/// Running per-category counts and the raw lines that were rejected, for a
/// single processing run.
pub struct Tally {
    counts: HashMap<Category, i64>,
    invalid_inputs: Vec<String>,
}

impl Tally {
    pub fn new() -> Tally {
        Tally {
            counts: Default::default(),
            invalid_inputs: Vec::new(),
        }
    }

    pub fn add(&mut self, category: Category, quantity: i64) {
        *self.counts.entry(category).or_insert(0) += quantity;
    }

    pub fn add_paper(&mut self, quantity: i64) {
        self.add(Category::Paper, quantity)
    }

    pub fn add_plastic(&mut self, quantity: i64) {
        self.add(Category::Plastic, quantity)
    }

    pub fn add_glass(&mut self, quantity: i64) {
        self.add(Category::Glass, quantity)
    }

    pub fn add_metal(&mut self, quantity: i64) {
        self.add(Category::Metal, quantity)
    }

    pub fn add_invalid_input(&mut self, line: &str) {
        self.invalid_inputs.push(line.to_owned());
    }

    pub fn count(&self, category: Category) -> i64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total_recycled(&self) -> i64 {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Share of the total per category, in percent. Empty unless the total is
    /// strictly positive.
    pub fn percentage_breakdown(&self) -> HashMap<Category, f64> {
        let total = self.total_recycled();
        if total <= 0 {
            return HashMap::new();
        }

        Category::ALL
            .iter()
            .map(|c| (*c, self.count(*c) as f64 / total as f64 * 100.0))
            .collect()
    }

    pub fn rejected_inputs(&self) -> &[String] {
        &self.invalid_inputs
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn base_tally() -> Tally {
        let mut tally = Tally::new();
        tally.add_paper(10);
        tally.add_plastic(5);
        tally.add_glass(0);
        tally.add_metal(5);
        tally
    }

    #[test]
    fn empty() {
        let tally = Tally::new();
        assert_eq!(tally.total_recycled(), 0);
        assert!(tally.percentage_breakdown().is_empty());
        assert!(tally.rejected_inputs().is_empty());
    }

    #[test]
    fn add_per_category() {
        let mut tally = base_tally();
        tally.add_paper(3);
        assert_eq!(tally.count(Category::Paper), 13);
        assert_eq!(tally.count(Category::Plastic), 5);
        assert_eq!(tally.count(Category::Glass), 0);
        assert_eq!(tally.count(Category::Metal), 5);
    }

    #[test]
    fn total_is_sum_of_counts() {
        let mut tally = base_tally();
        tally.add(Category::Glass, 7);
        tally.add_invalid_input("cardboard, 3");
        let sum: i64 = Category::ALL.iter().map(|c| tally.count(*c)).sum();
        assert_eq!(tally.total_recycled(), sum);
        assert_eq!(tally.total_recycled(), 27);
    }

    #[test]
    fn negative_quantity_subtracts() {
        let mut tally = base_tally();
        tally.add_paper(-4);
        assert_eq!(tally.count(Category::Paper), 6);
        assert_eq!(tally.total_recycled(), 16);
    }

    #[test]
    fn percentage_breakdown() {
        let breakdown = base_tally().percentage_breakdown();
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[&Category::Paper], 50.0);
        assert_eq!(breakdown[&Category::Plastic], 25.0);
        assert_eq!(breakdown[&Category::Glass], 0.0);
        assert_eq!(breakdown[&Category::Metal], 25.0);
    }

    #[test]
    fn percentage_breakdown_sums_to_hundred() {
        let mut tally = Tally::new();
        tally.add_paper(1);
        tally.add_plastic(1);
        tally.add_glass(1);
        let sum: f64 = tally.percentage_breakdown().values().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_breakdown_zero_total() {
        let mut tally = Tally::new();
        tally.add_paper(5);
        tally.add_metal(-5);
        assert_eq!(tally.total_recycled(), 0);
        assert!(tally.percentage_breakdown().is_empty());
    }

    #[test]
    fn rejected_inputs_keep_order() {
        let mut tally = Tally::new();
        tally.add_invalid_input("paper");
        tally.add_invalid_input("");
        tally.add_invalid_input("Cardboard, 3");
        assert_eq!(tally.rejected_inputs(), ["paper", "", "Cardboard, 3"]);
        assert_eq!(tally.total_recycled(), 0);
    }
}
