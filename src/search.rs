use crate::catalog::{Card, CategoryId};

/// Case-insensitive substring match over everything a database card shows:
/// title, content, category name, and tags.
pub fn card_matches(card: &Card, query: &str) -> bool {
    let haystack = format!(
        "{} {} {} {}",
        card.entry.title,
        card.entry.content,
        card.category.display_name(),
        card.entry.tags.join(" ")
    )
    .to_lowercase();

    haystack.contains(&query.to_lowercase())
}

/// Filter predicate for the category tabs; `None` is the "all" tab.
pub fn card_in_filter(card: &Card, filter: Option<CategoryId>) -> bool {
    match filter {
        None => true,
        Some(category) => card.category == category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_matches_title_content_category_and_tags() {
        let cards = Catalog::build_cards();
        let first = &cards[0];

        assert!(card_matches(first, "背景替換")); // title
        assert!(card_matches(first, "小螃蟹")); // content
        assert!(card_matches(first, "基礎編輯")); // category display name
        assert!(card_matches(first, "服裝")); // tag
        assert!(!card_matches(first, "賽博龐克"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let cards = Catalog::build_cards();
        let scene = cards
            .iter()
            .find(|c| c.entry.title == "複雜場景合成")
            .unwrap();
        assert!(card_matches(scene, "8k"));
        assert!(card_matches(scene, "8K"));
    }

    #[test]
    fn test_filter_all_and_by_category() {
        let cards = Catalog::build_cards();
        assert!(cards.iter().all(|c| card_in_filter(c, None)));

        let basic: Vec<_> = cards
            .iter()
            .filter(|c| card_in_filter(c, Some(CategoryId::Basic)))
            .collect();
        assert_eq!(basic.len(), 4);
        assert!(basic.iter().all(|c| c.category == CategoryId::Basic));
    }
}
