use serde::{Deserialize, Serialize};

/// The kind of thing that was bought.
/// Drives the colour grouping of the purchase charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Food,
    Electronics,
    Appliance,
    Clothing,
    /// Catch-all; preselected on a fresh purchase form
    #[default]
    Other,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Electronics,
        Category::Appliance,
        Category::Clothing,
        Category::Other,
    ];

    /// Label shown in pickers and chart legends.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Electronics => "Electronics",
            Category::Appliance => "Appliance",
            Category::Clothing => "Clothing",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
