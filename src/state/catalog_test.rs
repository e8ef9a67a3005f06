use super::*;

// =============================================================
// Seed
// =============================================================

#[test]
fn featured_vendors_seeds_ten_records_in_id_order() {
    let vendors = featured_vendors();
    assert_eq!(vendors.len(), 10);
    let ids: Vec<u32> = vendors.iter().map(|v| v.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[test]
fn featured_vendors_have_two_photos_each() {
    assert!(featured_vendors().iter().all(|v| v.food_photos.len() == 2));
}

#[test]
fn seeded_image_urls_are_sized() {
    let vendor = find_vendor(1).expect("vendor 1 seeded");
    assert!(vendor.image.ends_with("?w=100&h=100&fit=crop"));
    assert!(vendor.food_photos[0].url.ends_with("?w=400&h=300&fit=crop"));
    assert_eq!(vendor.food_photos[0].caption, "Signature Butter Chicken");
}

#[test]
fn find_vendor_unknown_id_is_none() {
    assert!(find_vendor(0).is_none());
    assert!(find_vendor(11).is_none());
}

#[test]
fn vendor_initials_take_first_two_chars() {
    let vendor = find_vendor(2).unwrap();
    assert_eq!(vendor.initials(), "Go");
}

#[test]
fn vendor_record_serializes_camel_case() {
    let json = serde_json::to_value(find_vendor(5).unwrap()).unwrap();
    assert_eq!(json["vendorType"], "Street Food");
    assert_eq!(json["reviewCount"], 35);
    assert!(json["foodPhotos"].is_array());
}

// =============================================================
// Ratings
// =============================================================

#[test]
fn rating_stars_floors_and_clamps() {
    assert_eq!(rating_stars(4.9), 4);
    assert_eq!(rating_stars(5.0), 5);
    assert_eq!(rating_stars(7.2), 5);
    assert_eq!(rating_stars(-1.0), 0);
}

// =============================================================
// VendorFilter
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    let filter = VendorFilter::default();
    assert!(filter.is_empty());
    assert_eq!(filter.apply(featured_vendors()).len(), 10);
}

#[test]
fn filter_by_cuisine_is_case_insensitive() {
    let filter = VendorFilter { cuisine: "thai".to_owned(), ..VendorFilter::default() };
    let hits = filter.apply(featured_vendors());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Bangkok Street Kitchen");
}

#[test]
fn filter_by_vendor_type_keeps_seed_order() {
    let filter = VendorFilter { vendor_type: "street food".to_owned(), ..VendorFilter::default() };
    let ids: Vec<u32> = filter.apply(featured_vendors()).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn filter_criteria_combine_with_and() {
    let filter = VendorFilter {
        cuisine: "Indian".to_owned(),
        location: "manchester".to_owned(),
        vendor_type: String::new(),
    };
    assert!(filter.apply(featured_vendors()).is_empty());

    let filter = VendorFilter { location: "london".to_owned(), ..filter };
    let hits = filter.apply(featured_vendors());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn whitespace_only_criterion_is_ignored() {
    let filter = VendorFilter { cuisine: "   ".to_owned(), ..VendorFilter::default() };
    assert!(filter.is_empty());
    assert_eq!(filter.apply(featured_vendors()).len(), 10);
}

#[test]
fn option_lists_have_expected_sizes() {
    assert_eq!(UK_MAJOR_CITIES.len(), 20);
    assert_eq!(CUISINE_TYPES.len(), 15);
    assert_eq!(VENDOR_TYPES.len(), 10);
}
