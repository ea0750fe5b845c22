//! Fixed choices offered by the report and filter forms.

/// Problem categories, in display order.
pub const CATEGORIES: [&str; 7] = [
    "Road",
    "Water",
    "Garbage",
    "Drainage",
    "Electricity",
    "Footpath",
    "Others",
];

/// Number of wards in the municipality.
pub const WARD_COUNT: u32 = 50;

/// Ward numbers `"1"` through `"50"`.
pub fn wards() -> impl Iterator<Item = String> {
    (1..=WARD_COUNT).map(|n| n.to_string())
}

/// Whether `category` is one of [`CATEGORIES`].
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wards() {
        let wards: Vec<String> = wards().collect();
        assert_eq!(wards.len(), 50);
        assert_eq!(wards.first().map(String::as_str), Some("1"));
        assert_eq!(wards.last().map(String::as_str), Some("50"));
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category("Drainage"));
        assert!(!is_known_category("drainage"));
    }
}
