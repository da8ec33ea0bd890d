use super::*;

#[test]
fn slugs_round_trip_through_from_slug() {
    for category in NewsCategory::all() {
        assert_eq!(NewsCategory::from_slug(category.slug()), Some(category));
    }
    assert_eq!(NewsCategory::from_slug(" Events "), Some(NewsCategory::Event));
    assert_eq!(NewsCategory::from_slug("sports"), None);
}

#[test]
fn badge_colours_follow_category() {
    assert_eq!(badge_class_for("event"), "bg-primary/80");
    assert_eq!(badge_class_for("announcement"), "bg-accent/80");
    assert_eq!(badge_class_for("Achievement"), "bg-secondary/80");
    assert_eq!(badge_class_for("unknown"), "bg-primary/80");
}

#[test]
fn display_date_is_long_form() {
    let item = NewsItem {
        title: "t".into(),
        summary: "s".into(),
        description: "d".into(),
        image: "i.jpg".into(),
        date: NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"),
        category: NewsCategory::Event,
    };

    assert_eq!(item.display_date(), "March 5, 2024");
}
