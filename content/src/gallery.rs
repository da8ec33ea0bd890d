use serde::{Deserialize, Serialize};

// gallery categories are free-form, so they are kept as written in the config
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

// distinct categories in first-seen order, used to build the filter bar
pub fn categories(items: &[GalleryItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();

    for item in items {
        let category = item.category.trim();
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_owned());
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str) -> GalleryItem {
        GalleryItem {
            title: "t".into(),
            description: "d".into(),
            image: "i.jpg".into(),
            category: category.into(),
        }
    }

    #[test]
    fn categories_keep_first_seen_order_without_duplicates() {
        let items = vec![item("Sports"), item("Cultural"), item("Sports"), item(" "), item("Academic")];

        assert_eq!(categories(&items), vec!["Sports", "Cultural", "Academic"]);
    }
}
