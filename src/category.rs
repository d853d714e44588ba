use std::fmt;

#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Paper,
    Plastic,
    Glass,
    Metal,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 4] = [
        Category::Paper,
        Category::Plastic,
        Category::Glass,
        Category::Metal,
    ];

    /// Looks up a category by name. The name is lowercased first, no
    /// whitespace is trimmed.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.to_lowercase().as_str() {
            "paper" => Some(Category::Paper),
            "plastic" => Some(Category::Plastic),
            "glass" => Some(Category::Glass),
            "metal" => Some(Category::Metal),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Paper => "paper",
            Category::Plastic => "plastic",
            Category::Glass => "glass",
            Category::Metal => "metal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Paper => "Paper",
            Category::Plastic => "Plastic",
            Category::Glass => "Glass",
            Category::Metal => "Metal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
