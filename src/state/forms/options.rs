//! Fixed option list offered by the Industry and Style selects

/// A selectable option with a display label and a submitted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl SelectOption {
    const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Options shared by the Industry and Style fields.
///
/// Both selects render this same list, so it carries industry entries as
/// well as the visual styles used by the asset generator.
pub const CATEGORY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Food & Drink", "Food"),
    SelectOption::new("Retail", "Retail"),
    SelectOption::new("Fashion", "Fashion"),
    SelectOption::new("Beauty", "Beauty"),
    SelectOption::new("Health & Fitness", "Health"),
    SelectOption::new("Technology", "Technology"),
    SelectOption::new("Education", "Education"),
    SelectOption::new("Entertainment", "Entertainment"),
    SelectOption::new("Travel", "Travel"),
    SelectOption::new("Finance", "Finance"),
    SelectOption::new("Modern", "Modern"),
    SelectOption::new("Classic", "Classic"),
    SelectOption::new("Playful", "Playful"),
    SelectOption::new("Minimalist", "Minimalist"),
];

/// Index of the option whose value matches `value`
pub fn option_index(value: &str) -> Option<usize> {
    CATEGORY_OPTIONS.iter().position(|o| o.value == value)
}
