//! String casing helpers.

/// Capitalization of the first character only.
pub trait CapitalizedFirst {
    /// A copy where the first character is uppercased and the rest lowercased.
    fn capitalized_first(&self) -> String;
}

impl CapitalizedFirst for str {
    fn capitalized_first(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => {
                let mut result: String = first.to_uppercase().collect();
                result.push_str(&chars.as_str().to_lowercase());
                result
            }
            None => String::new(),
        }
    }
}
