/// Product category a menu item is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Beverage,
    Food,
    Merch,
}

/// One sellable item of the menu catalog. Compiled-in configuration,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub product_id: String,
    pub product_name: String,
    pub category: Category,
    pub unit_price: f64,
    /// Expected to be <= unit_price, but not enforced.
    pub unit_cost: f64,
}

// --

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Beverage => "Beverage",
            Category::Food => "Food",
            Category::Merch => "Merch",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl MenuItem {
    pub fn new(
        product_id: &str,
        product_name: &str,
        category: Category,
        unit_price: f64,
        unit_cost: f64,
    ) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            category,
            unit_price,
            unit_cost,
        }
    }
}
