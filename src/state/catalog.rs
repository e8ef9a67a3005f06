//! Vendor directory: seeded vendor records, option lists, and search filter.
//!
//! DESIGN
//! ======
//! The catalog is immutable and seeded once at startup. Pages borrow from
//! the static slice; nothing in the app mutates a vendor record.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub const UK_MAJOR_CITIES: &[&str] = &[
    "London",
    "Manchester",
    "Birmingham",
    "Leeds",
    "Glasgow",
    "Sheffield",
    "Bradford",
    "Liverpool",
    "Edinburgh",
    "Bristol",
    "Cardiff",
    "Leicester",
    "Coventry",
    "Belfast",
    "Nottingham",
    "Newcastle",
    "Brighton",
    "Hull",
    "Plymouth",
    "Stoke-on-Trent",
];

pub const CUISINE_TYPES: &[&str] = &[
    "Indian",
    "Chinese",
    "Italian",
    "Mexican",
    "Thai",
    "Japanese",
    "Mediterranean",
    "British",
    "French",
    "American",
    "Korean",
    "Vietnamese",
    "Turkish",
    "Lebanese",
    "Caribbean",
];

pub const VENDOR_TYPES: &[&str] = &[
    "Street Food",
    "Restaurant",
    "Catering",
    "Pop-up",
    "Food Truck",
    "Bakery",
    "Cafe",
    "Bar & Grill",
    "Fast Casual",
    "Fine Dining",
];

/// A dish photo shown on vendor cards and in the profile modal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodPhoto {
    pub url: String,
    pub caption: String,
    pub category: String,
}

/// A food vendor listed in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub vendor_type: String,
    /// Average review score out of 5.
    pub rating: f32,
    pub review_count: u32,
    /// Avatar image URL.
    pub image: String,
    pub location: String,
    pub description: String,
    pub availability: String,
    /// Comma-separated kinds of space the vendor wants.
    pub looking_for: String,
    pub food_photos: Vec<FoodPhoto>,
}

impl VendorRecord {
    /// Two-letter avatar fallback used when the image fails to load.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect()
    }
}

/// Number of filled stars for a rating, clamped to `0..=5`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rating_stars(rating: f32) -> usize {
    rating.floor().clamp(0.0, 5.0) as usize
}

// =============================================================================
// SEED
// =============================================================================

struct Seed {
    id: u32,
    name: &'static str,
    cuisine: &'static str,
    rating: f32,
    review_count: u32,
    image: &'static str,
    vendor_type: &'static str,
    location: &'static str,
    description: &'static str,
    looking_for: &'static str,
    photos: [(&'static str, &'static str, &'static str); 2],
}

const UNSPLASH: &str = "https://images.unsplash.com/photo-";

const SEEDS: [Seed; 10] = [
    Seed {
        id: 1,
        name: "Mama's Authentic Curry",
        cuisine: "Indian",
        rating: 4.9,
        review_count: 47,
        image: "1595295333158-4742f28fbd85",
        vendor_type: "Restaurant",
        location: "London",
        description: "Traditional family recipes passed down through generations",
        looking_for: "Pub Kitchen, Restaurant Space",
        photos: [
            ("1585937421612-70a008356fbe", "Signature Butter Chicken", "Main Course"),
            ("1565557623262-b51c2513a641", "Fresh Naan Bread", "Sides"),
        ],
    },
    Seed {
        id: 2,
        name: "Golden Dragon Kitchen",
        cuisine: "Chinese",
        rating: 4.8,
        review_count: 52,
        image: "1559847844-d721426d6edc",
        vendor_type: "Restaurant",
        location: "Manchester",
        description: "Authentic Cantonese cuisine with modern presentation",
        looking_for: "Restaurant Space, Food Court",
        photos: [
            ("1563379091339-03246963d51a", "Peking Duck", "Main Course"),
            ("1496116218417-1a781b1c416c", "Dim Sum Selection", "Appetizers"),
        ],
    },
    Seed {
        id: 3,
        name: "Artisan Pizza Kitchen",
        cuisine: "Italian",
        rating: 4.7,
        review_count: 38,
        image: "1513104890138-7c749659a591",
        vendor_type: "Restaurant",
        location: "Birmingham",
        description: "Wood-fired pizzas made with imported Italian ingredients",
        looking_for: "Restaurant Space, Pub Kitchen",
        photos: [
            ("1513104890138-7c749659a591", "Wood-Fired Margherita", "Pizza"),
            ("1571997478779-2adcbbe9ab2f", "Fresh Pasta", "Main Course"),
        ],
    },
    Seed {
        id: 4,
        name: "The Crown & Anchor",
        cuisine: "British",
        rating: 4.6,
        review_count: 41,
        image: "1504674900247-0877df9cc836",
        vendor_type: "Pub",
        location: "Leeds",
        description: "Traditional British pub fare with locally sourced ingredients",
        looking_for: "Pub Space, Restaurant",
        photos: [
            ("1432139555190-58524dae6a55", "Fish & Chips", "Main Course"),
            ("1544025162-d76694265947", "Shepherd's Pie", "Main Course"),
        ],
    },
    Seed {
        id: 5,
        name: "Bangkok Street Kitchen",
        cuisine: "Thai",
        rating: 4.8,
        review_count: 35,
        image: "1559181567-c3190ca9959b",
        vendor_type: "Street Food",
        location: "Bristol",
        description: "Authentic Thai street food with bold flavors and fresh herbs",
        looking_for: "Food Court, Takeaway",
        photos: [
            ("1559181567-c3190ca9959b", "Pad Thai", "Main Course"),
            ("1562565652-a0d8f0c59eb4", "Green Curry", "Main Course"),
        ],
    },
    Seed {
        id: 6,
        name: "Street Taco Co.",
        cuisine: "Mexican",
        rating: 4.7,
        review_count: 29,
        image: "1565299624946-b28f40a0ca4b",
        vendor_type: "Street Food",
        location: "Glasgow",
        description: "Authentic Mexican street food with a modern twist",
        looking_for: "Food Court, Takeaway",
        photos: [
            ("1565299624946-b28f40a0ca4b", "Authentic Street Tacos", "Main Course"),
            ("1551504734-5ee1c4a1479b", "Fresh Guacamole", "Sides"),
        ],
    },
    Seed {
        id: 7,
        name: "Istanbul Grill House",
        cuisine: "Turkish",
        rating: 4.6,
        review_count: 44,
        image: "1529042410759-befb1204b468",
        vendor_type: "Restaurant",
        location: "Liverpool",
        description: "Traditional Turkish grills and mezze in a warm atmosphere",
        looking_for: "Restaurant Space, Takeaway",
        photos: [
            ("1529042410759-befb1204b468", "Mixed Grill Platter", "Main Course"),
            ("1551782450-17144efb9c50", "Turkish Kebab", "Main Course"),
        ],
    },
    Seed {
        id: 8,
        name: "Sakura Sushi Bar",
        cuisine: "Japanese",
        rating: 4.9,
        review_count: 31,
        image: "1579584425555-c3ce17fd4351",
        vendor_type: "Restaurant",
        location: "Edinburgh",
        description: "Fresh sushi and traditional Japanese dishes made by expert chefs",
        looking_for: "Restaurant Space, Bar",
        photos: [
            ("1579584425555-c3ce17fd4351", "Sushi Selection", "Main Course"),
            ("1617196034796-73dfa7b1fd56", "Ramen Bowl", "Main Course"),
        ],
    },
    Seed {
        id: 9,
        name: "Le Petit Bistro",
        cuisine: "French",
        rating: 4.5,
        review_count: 26,
        image: "1414235077428-338989a2e8c0",
        vendor_type: "Restaurant",
        location: "Cardiff",
        description: "Classic French cuisine with seasonal ingredients and wine pairings",
        looking_for: "Restaurant Space, Wine Bar",
        photos: [
            ("1414235077428-338989a2e8c0", "Coq au Vin", "Main Course"),
            ("1551218808-94e220e084d2", "French Onion Soup", "Appetizers"),
        ],
    },
    Seed {
        id: 10,
        name: "Brooklyn Burger Co.",
        cuisine: "American",
        rating: 4.4,
        review_count: 39,
        image: "1568901346375-23c9450c58cd",
        vendor_type: "Fast Casual",
        location: "Newcastle",
        description: "Gourmet burgers and American classics with locally sourced beef",
        looking_for: "Food Court, Pub Kitchen",
        photos: [
            ("1568901346375-23c9450c58cd", "Signature Burger", "Main Course"),
            ("1541592106381-b31e9677c0e5", "Loaded Fries", "Sides"),
        ],
    },
];

static FEATURED: LazyLock<Vec<VendorRecord>> = LazyLock::new(|| SEEDS.iter().map(Seed::build).collect());

impl Seed {
    fn build(&self) -> VendorRecord {
        VendorRecord {
            id: self.id,
            name: self.name.to_owned(),
            cuisine: self.cuisine.to_owned(),
            vendor_type: self.vendor_type.to_owned(),
            rating: self.rating,
            review_count: self.review_count,
            image: format!("{UNSPLASH}{}?w=100&h=100&fit=crop", self.image),
            location: self.location.to_owned(),
            description: self.description.to_owned(),
            availability: "Available".to_owned(),
            looking_for: self.looking_for.to_owned(),
            food_photos: self
                .photos
                .iter()
                .map(|(photo, caption, category)| FoodPhoto {
                    url: format!("{UNSPLASH}{photo}?w=400&h=300&fit=crop"),
                    caption: (*caption).to_owned(),
                    category: (*category).to_owned(),
                })
                .collect(),
        }
    }
}

/// All featured vendors in display order.
pub fn featured_vendors() -> &'static [VendorRecord] {
    &FEATURED
}

/// Look up a featured vendor by id.
pub fn find_vendor(id: u32) -> Option<&'static VendorRecord> {
    featured_vendors().iter().find(|v| v.id == id)
}

// =============================================================================
// FILTER
// =============================================================================

/// Directory search criteria. An empty criterion matches every vendor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorFilter {
    pub cuisine: String,
    pub location: String,
    pub vendor_type: String,
}

impl VendorFilter {
    /// True when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuisine.trim().is_empty() && self.location.trim().is_empty() && self.vendor_type.trim().is_empty()
    }

    /// Whether `vendor` satisfies every non-empty criterion.
    #[must_use]
    pub fn matches(&self, vendor: &VendorRecord) -> bool {
        criterion_matches(&self.cuisine, &vendor.cuisine)
            && criterion_matches(&self.location, &vendor.location)
            && criterion_matches(&self.vendor_type, &vendor.vendor_type)
    }

    /// Vendors matching this filter, in their original order.
    pub fn apply<'a>(&self, vendors: &'a [VendorRecord]) -> Vec<&'a VendorRecord> {
        vendors.iter().filter(|v| self.matches(v)).collect()
    }
}

fn criterion_matches(wanted: &str, actual: &str) -> bool {
    let wanted = wanted.trim();
    wanted.is_empty() || wanted.eq_ignore_ascii_case(actual.trim())
}
