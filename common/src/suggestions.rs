//! Presentation logic for suggestion cards
//!
//! Category ordering, price-range formatting, and shop-link labels. These
//! are static configuration tables plus pure functions so the rendering
//! components stay declarative.

use crate::types::Suggestion;
use std::collections::HashMap;

/// Categories the grid renders first, in this order. Anything else is
/// appended afterwards in first-seen order.
pub const PREFERRED_CATEGORY_ORDER: [&str; 6] =
    ["tops", "bottoms", "shoes", "outerwear", "accessories", "bags"];

/// Bucket for suggestions whose category is missing or blank.
pub const FALLBACK_CATEGORY: &str = "other";

/// Human-readable labels for known shop keys.
const SHOP_LABELS: [(&str, &str); 10] = [
    ("amazon", "Amazon"),
    ("nordstrom", "Nordstrom"),
    ("j_crew", "J.Crew"),
    ("banana_republic", "Banana Republic"),
    ("madewell", "Madewell"),
    ("asos", "ASOS"),
    ("zara", "Zara"),
    ("hm", "H&M"),
    ("uniqlo", "Uniqlo"),
    ("revolve", "Revolve"),
];

/// One rendered category bucket, in final display order.
#[derive(Debug, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub suggestions: Vec<&'a Suggestion>,
}

/// Group suggestions by lower-cased category: preferred categories first,
/// unrecognized ones appended in the order they were first seen, blank
/// categories collected under [`FALLBACK_CATEGORY`].
pub fn group_by_category(suggestions: &[Suggestion]) -> Vec<CategoryGroup<'_>> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<&Suggestion>> = HashMap::new();

    for suggestion in suggestions {
        let category = suggestion.category.trim().to_lowercase();
        let category = if category.is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            category
        };
        if !buckets.contains_key(&category) {
            first_seen.push(category.clone());
        }
        buckets.entry(category).or_default().push(suggestion);
    }

    let mut groups = Vec::new();
    for category in PREFERRED_CATEGORY_ORDER {
        if let Some(list) = buckets.remove(category) {
            groups.push(CategoryGroup {
                category: category.to_string(),
                suggestions: list,
            });
        }
    }
    for category in first_seen {
        if let Some(list) = buckets.remove(&category) {
            groups.push(CategoryGroup {
                category,
                suggestions: list,
            });
        }
    }
    groups
}

/// Format an estimated price range: both bounds, a single bound, or the
/// "Price varies" fallback when neither is present.
pub fn price_range(low: Option<f64>, high: Option<f64>) -> String {
    match (low, high) {
        (Some(lo), Some(hi)) => format!("${} – ${}", lo, hi),
        (Some(lo), None) => format!("${}", lo),
        (None, Some(hi)) => format!("${}", hi),
        (None, None) => "Price varies".to_string(),
    }
}

/// Label for a shop key: fixed table for known shops, otherwise the key
/// title-cased with underscores turned into spaces.
pub fn shop_label(key: &str) -> String {
    SHOP_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| title_case(&key.replace('_', " ")))
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(category: &str) -> Suggestion {
        Suggestion {
            category: category.to_string(),
            item: format!("{category} item"),
            ..Default::default()
        }
    }

    #[test]
    fn test_price_range_both_bounds() {
        assert_eq!(price_range(Some(20.0), Some(40.0)), "$20 – $40");
    }

    #[test]
    fn test_price_range_low_only() {
        assert_eq!(price_range(Some(20.0), None), "$20");
    }

    #[test]
    fn test_price_range_high_only() {
        assert_eq!(price_range(None, Some(85.0)), "$85");
    }

    #[test]
    fn test_price_range_fallback() {
        assert_eq!(price_range(None, None), "Price varies");
    }

    #[test]
    fn test_price_range_keeps_fractions() {
        assert_eq!(price_range(Some(19.5), Some(24.99)), "$19.5 – $24.99");
    }

    #[test]
    fn test_grouping_preferred_before_unknown() {
        let suggestions = vec![suggestion("shoes"), suggestion("tops"), suggestion("hats")];
        let groups = group_by_category(&suggestions);
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["tops", "shoes", "hats"]);
    }

    #[test]
    fn test_grouping_unknowns_keep_first_seen_order() {
        let suggestions = vec![
            suggestion("hats"),
            suggestion("scarves"),
            suggestion("hats"),
        ];
        let groups = group_by_category(&suggestions);
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["hats", "scarves"]);
        assert_eq!(groups[0].suggestions.len(), 2);
    }

    #[test]
    fn test_grouping_lowercases_categories() {
        let suggestions = vec![suggestion("Tops"), suggestion("TOPS")];
        let groups = group_by_category(&suggestions);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "tops");
        assert_eq!(groups[0].suggestions.len(), 2);
    }

    #[test]
    fn test_grouping_blank_category_goes_to_other() {
        let suggestions = vec![suggestion(""), suggestion("  "), suggestion("bags")];
        let groups = group_by_category(&suggestions);
        let order: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["bags", "other"]);
        assert_eq!(groups[1].suggestions.len(), 2);
    }

    #[test]
    fn test_grouping_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_shop_label_known_keys() {
        assert_eq!(shop_label("hm"), "H&M");
        assert_eq!(shop_label("j_crew"), "J.Crew");
        assert_eq!(shop_label("banana_republic"), "Banana Republic");
        assert_eq!(shop_label("asos"), "ASOS");
    }

    #[test]
    fn test_shop_label_unknown_key_title_cased() {
        assert_eq!(shop_label("free_people"), "Free People");
        assert_eq!(shop_label("ssense"), "Ssense");
    }
}
