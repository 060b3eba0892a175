//! Well-known points of interest used when a direct city search finds nothing.

const CITY_LANDMARKS: &[(&str, &[&str])] = &[
    (
        "guntur",
        &[
            "Amaravathi Stupa",
            "Kondaveedu Fort",
            "Uppalapadu Bird Sanctuary",
            "Kotappakonda Temple",
            "Bhavani Island",
        ],
    ),
    (
        "dhanbad",
        &[
            "Maithon Dam",
            "Topchanchi Lake",
            "Birsa Munda Park",
            "Bhatinda Falls",
        ],
    ),
    (
        "ranchi",
        &[
            "Rock Garden Ranchi",
            "Hundru Falls",
            "Dassam Falls",
            "Tagore Hill",
            "Patratu Valley",
        ],
    ),
];

/// Landmarks for a city in search order; empty when the city is unknown
pub fn landmarks_for(city: &str) -> &'static [&'static str] {
    let key = city.to_lowercase();
    CITY_LANDMARKS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, landmarks)| *landmarks)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(landmarks_for("RANCHI"), landmarks_for("ranchi"));
        assert_eq!(landmarks_for("Guntur").len(), 5);
        assert_eq!(landmarks_for("Dhanbad")[0], "Maithon Dam");
    }

    #[test]
    fn ranchi_order_is_preserved() {
        assert_eq!(
            landmarks_for("Ranchi"),
            &[
                "Rock Garden Ranchi",
                "Hundru Falls",
                "Dassam Falls",
                "Tagore Hill",
                "Patratu Valley"
            ]
        );
    }

    #[test]
    fn unknown_city_has_no_landmarks() {
        assert!(landmarks_for("Springfield").is_empty());
        // keys are not trimmed
        assert!(landmarks_for(" ranchi").is_empty());
    }
}
