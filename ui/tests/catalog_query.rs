use ui::catalog::{
    categories, courses, courses_in_category, parse_price, run, subcategories_of, CatalogQuery,
    Course, SortKey, ALL_SUBCATEGORIES, FEATURED,
};

fn ids(result: &[&Course]) -> Vec<u32> {
    result.iter().map(|c| c.id).collect()
}

fn mentions(course: &Course, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [
        &course.title.ar,
        &course.title.en,
        &course.description.ar,
        &course.description.en,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[test]
fn category_helper_only_returns_that_category() {
    for category in categories().iter().filter(|c| c.key != FEATURED) {
        let found = courses_in_category(category.key);
        assert!(!found.is_empty(), "{} has no courses", category.key);
        assert!(found.iter().all(|c| c.category == category.key));
    }
}

#[test]
fn subcategory_results_carry_that_subcategory() {
    for category in categories() {
        for sub in subcategories_of(category.key) {
            let query = CatalogQuery::default()
                .category(category.key)
                .subcategory(sub.key);
            for course in run(courses(), &query) {
                assert_eq!(course.subcategory, Some(sub.key), "course {}", course.id);
            }
        }
    }
}

#[test]
fn every_search_hit_contains_the_query() {
    for needle in ["python", "Excel", "الويب", "design", "a"] {
        let result = run(courses(), &CatalogQuery::default().search(needle));
        assert!(result.iter().all(|c| mentions(c, needle)), "query {needle:?}");
        let expected = courses().iter().filter(|c| mentions(c, needle)).count();
        assert_eq!(result.len(), expected, "query {needle:?}");
    }
}

#[test]
fn rating_sort_is_non_increasing() {
    let result = run(courses(), &CatalogQuery::default().sort(SortKey::Rating));
    let ratings: Vec<f32> = result.iter().map(|c| c.rating.unwrap_or(0.0)).collect();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(result.len(), courses().len());
}

#[test]
fn price_low_sort_is_non_decreasing() {
    let result = run(courses(), &CatalogQuery::default().sort(SortKey::PriceLow));
    let prices: Vec<i64> = result
        .iter()
        .map(|c| c.price().map(parse_price).unwrap_or(0))
        .collect();
    assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn same_query_twice_gives_same_answer() {
    let query = CatalogQuery::default()
        .category("python")
        .search("a")
        .sort(SortKey::PriceHigh);
    assert_eq!(ids(&run(courses(), &query)), ids(&run(courses(), &query)));
}

#[test]
fn sorting_leaves_the_dataset_untouched() {
    let before: Vec<u32> = courses().iter().map(|c| c.id).collect();
    let _ = run(courses(), &CatalogQuery::default().sort(SortKey::Newest));
    let after: Vec<u32> = courses().iter().map(|c| c.id).collect();
    assert_eq!(before, after);
}

#[test]
fn excel_category_returns_its_two_courses_in_order() {
    let query = CatalogQuery::default()
        .category("excel")
        .subcategory(ALL_SUBCATEGORIES)
        .search("")
        .sort(SortKey::Featured);
    assert_eq!(ids(&run(courses(), &query)), vec![6, 7]);
}

#[test]
fn python_search_newest_first() {
    let query = CatalogQuery::default()
        .category(FEATURED)
        .search("python")
        .sort(SortKey::Newest);
    let result = run(courses(), &query);
    assert_eq!(ids(&result), vec![10, 7, 5, 4]);
    assert!(result.iter().all(|c| mentions(c, "python")));
}

#[test]
fn all_is_an_alias_for_featured() {
    let all = run(courses(), &CatalogQuery::default().category("all"));
    assert_eq!(all.len(), courses().len());
}
