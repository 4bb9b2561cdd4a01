use cull_core::library::ResolvedExclusions;

/// True iff the item's tag set intersects the always-keep set. Exempt items
/// short-circuit all further evaluation for the pass.
pub fn is_exempt(tag_ids: &[i64], exclusions: &ResolvedExclusions) -> bool {
    tag_ids.iter().any(|t| exclusions.keep_tag_ids.contains(t))
}

/// True iff the item has a genre facet and it intersects the unwanted set.
/// Checked after the keep-tag exemption and before the age classifier;
/// a hit forces immediate removal regardless of age.
pub fn has_unwanted_genre(genres: Option<&[String]>, exclusions: &ResolvedExclusions) -> bool {
    match genres {
        Some(genres) => genres.iter().any(|g| exclusions.unwanted_genres.contains(g)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn exclusions() -> ResolvedExclusions {
        ResolvedExclusions {
            keep_tag_ids: HashSet::from([7]),
            unwanted_genres: HashSet::from(["Horror".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn exempt_on_any_keep_tag() {
        assert!(is_exempt(&[1, 7], &exclusions()));
        assert!(!is_exempt(&[1, 2], &exclusions()));
        assert!(!is_exempt(&[], &exclusions()));
    }

    #[test]
    fn genre_check_only_applies_to_kinds_with_genres() {
        let genres = vec!["Drama".to_string(), "Horror".to_string()];
        assert!(has_unwanted_genre(Some(&genres), &exclusions()));
        assert!(!has_unwanted_genre(Some(&["Drama".to_string()]), &exclusions()));
        // Seasons have no genre facet.
        assert!(!has_unwanted_genre(None, &exclusions()));
    }
}
