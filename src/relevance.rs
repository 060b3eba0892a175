/// Lower-cases text and keeps only ASCII letters, digits and spaces
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect()
}

/// Checks whether a photo's alt text names the city or, failing that, the landmark.
///
/// Matching is plain substring containment after normalization. Synonyms or
/// partial word overlap never match.
pub fn is_relevant(alt_text: Option<&str>, city: &str, landmark: Option<&str>) -> bool {
    let alt = match alt_text {
        Some(alt) if !alt.is_empty() => normalize(alt),
        _ => return false,
    };

    if alt.contains(&normalize(city)) {
        return true;
    }

    landmark.is_some_and(|landmark| alt.contains(&normalize(landmark)))
}
