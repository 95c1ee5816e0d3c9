//! Built-in phrase fragments for each keyword dimension.

/// Purifier and filter product variants.
pub const PRODUCT_TYPES: &[&str] = &[
    "RO purifier",
    "RO water purifier",
    "Water purifier",
    "Water filter",
    "RO",
    "RO UV purifier",
    "RO UV UF purifier",
    "UV water purifier",
    "Alkaline water purifier",
    "Copper RO purifier",
    "Mineral RO purifier",
    "Smart water purifier",
    "Under sink RO",
    "Wall mounted RO",
    "Kitchen water purifier",
    "Drinking water purifier",
    "Home RO system",
    "Office water purifier",
    "Water dispenser",
];

/// Rental and subscription phrasing.
pub const RENTAL_TERMS: &[&str] = &[
    "on rent",
    "rental",
    "for rent",
    "on subscription",
    "subscription",
    "rent",
    "monthly rent",
    "on monthly rental",
    "lease",
    "on lease",
    "rent plan",
    "subscription plan",
    "monthly plan",
];

/// Price-related phrasing.
pub const PRICE_TERMS: &[&str] = &[
    "299",
    "under 300",
    "cheap",
    "low cost",
    "affordable",
    "best price",
    "price",
    "cost",
    "per month",
    "monthly price",
    "starting 299",
    "lowest price",
    "budget",
    "free installation",
    "no deposit",
];

/// User-intent qualifiers.
pub const INTENT_MODIFIERS: &[&str] = &[
    "near me",
    "for bachelors",
    "for home",
    "for office",
    "for students",
    "for flats",
    "for PG",
    "for family",
    "best",
    "top",
    "service",
    "provider",
    "company",
    "online",
    "booking",
    "free trial",
    "doorstep service",
    "with maintenance",
    "with free service",
    "same day installation",
    "reviews",
    "contact number",
];

/// Colloquial transliterated fragments, placed between a product name and
/// the locality name.
pub const LOCALIZED_PHRASE_TEMPLATES: &[&str] = &[
    "ka price",
    "kiraye par",
    "chahiye",
    "rent pe",
    "kitne ka hai",
    "sasta",
];
