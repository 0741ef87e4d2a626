//! Built-in reference dataset: twenty cities of the north-eastern US and
//! south-eastern Canada joined by road distances.

use routegraph_core::config::Dataset;
use routegraph_core::graph::EdgeSpec;

pub const REFERENCE_NAME: &str = "Eastern road network";

const CITY_NAMES: [&str; 20] = [
    "New York",
    "Boston",
    "Philadelphia",
    "Washington D.C.",
    "Baltimore",
    "Pittsburgh",
    "Cleveland",
    "Detroit",
    "Chicago",
    "St. Louis",
    "Indianapolis",
    "Cincinnati",
    "Columbus",
    "Buffalo",
    "Toronto",
    "Montreal",
    "Ottawa",
    "Quebec City",
    "Richmond",
    "Raleigh",
];

/// (city, city, distance)
const ROADS: [(usize, usize, f64); 21] = [
    (0, 1, 215.0),   // New York - Boston
    (0, 2, 94.0),    // New York - Philadelphia
    (2, 3, 140.0),   // Philadelphia - Washington D.C.
    (3, 4, 40.0),    // Washington D.C. - Baltimore
    (2, 5, 305.0),   // Philadelphia - Pittsburgh
    (5, 6, 133.0),   // Pittsburgh - Cleveland
    (6, 7, 170.0),   // Cleveland - Detroit
    (7, 8, 285.0),   // Detroit - Chicago
    (8, 9, 296.0),   // Chicago - St. Louis
    (9, 10, 250.0),  // St. Louis - Indianapolis
    (10, 11, 180.0), // Indianapolis - Cincinnati
    (11, 12, 110.0), // Cincinnati - Columbus
    (12, 5, 185.0),  // Columbus - Pittsburgh
    (5, 13, 215.0),  // Pittsburgh - Buffalo
    (13, 0, 400.0),  // Buffalo - New York
    (13, 14, 100.0), // Buffalo - Toronto
    (14, 15, 310.0), // Toronto - Montreal
    (15, 16, 200.0), // Montreal - Ottawa
    (16, 17, 250.0), // Ottawa - Quebec City
    (3, 18, 110.0),  // Washington D.C. - Richmond
    (18, 19, 160.0), // Richmond - Raleigh
];

pub fn reference() -> Dataset {
    Dataset::new(
        Some(REFERENCE_NAME.to_string()),
        CITY_NAMES.iter().map(|name| name.to_string()).collect(),
        ROADS.iter().copied().map(EdgeSpec::from).collect(),
    )
}
