//! Wire models for the *arr v3 API, mapped into [`TrackedItem`]s.

use serde::Deserialize;

use cull_core::library::{ItemKind, Tag, TrackedItem};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub sort_title: String,
    #[serde(default)]
    pub year: i32,
    pub path: String,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrSeries {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub sort_title: String,
    #[serde(default)]
    pub year: i32,
    pub path: String,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub seasons: Vec<ArrSeason>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrSeason {
    pub season_number: u32,
    #[serde(default)]
    pub statistics: ArrSeasonStatistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrSeasonStatistics {
    #[serde(default)]
    pub total_episode_count: u32,
    #[serde(default)]
    pub episode_file_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct ArrTag {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct ArrRootFolder {
    pub path: String,
}

impl From<ArrMovie> for TrackedItem {
    fn from(movie: ArrMovie) -> Self {
        let sort_title = non_empty(movie.sort_title, &movie.title);
        TrackedItem {
            id: movie.id,
            title: movie.title,
            sort_title,
            year: movie.year,
            path: movie.path.into(),
            tag_ids: movie.tags,
            genres: movie.genres,
            kind: ItemKind::Movie,
        }
    }
}

impl ArrSeries {
    /// Flatten a series into one evaluation item per season. Genres are not
    /// carried: seasons have no genre facet.
    pub fn into_items(self) -> Vec<TrackedItem> {
        let sort_title = non_empty(self.sort_title, &self.title);
        self.seasons
            .into_iter()
            .map(|season| TrackedItem {
                id: self.id,
                title: self.title.clone(),
                sort_title: sort_title.clone(),
                year: self.year,
                path: self.path.clone().into(),
                tag_ids: self.tags.clone(),
                genres: vec![],
                kind: ItemKind::Season {
                    number: season.season_number,
                    total_episodes: season.statistics.total_episode_count,
                    episode_files: season.statistics.episode_file_count,
                },
            })
            .collect()
    }
}

impl From<ArrTag> for Tag {
    fn from(tag: ArrTag) -> Self {
        Tag {
            id: tag.id,
            label: tag.label,
        }
    }
}

fn non_empty(sort_title: String, title: &str) -> String {
    if sort_title.is_empty() {
        title.to_lowercase()
    } else {
        sort_title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_payload_decodes_and_converts() {
        let json = r#"{
            "id": 42,
            "title": "Heat",
            "sortTitle": "heat",
            "year": 1995,
            "path": "/movies/Heat (1995)",
            "tags": [3, 9],
            "genres": ["Crime", "Drama"]
        }"#;
        let movie: ArrMovie = serde_json::from_str(json).unwrap();
        let item: TrackedItem = movie.into();

        assert_eq!(item.label(), "Heat (1995)");
        assert_eq!(item.tag_ids, vec![3, 9]);
        assert_eq!(item.genres, vec!["Crime", "Drama"]);
        assert_eq!(item.kind, ItemKind::Movie);
    }

    #[test]
    fn series_payload_flattens_to_season_items() {
        let json = r#"{
            "id": 7,
            "title": "Show",
            "sortTitle": "show",
            "year": 2020,
            "path": "/tv/Show",
            "tags": [1],
            "seasons": [
                {"seasonNumber": 0, "statistics": {"totalEpisodeCount": 2, "episodeFileCount": 0}},
                {"seasonNumber": 1, "statistics": {"totalEpisodeCount": 8, "episodeFileCount": 8}}
            ]
        }"#;
        let series: ArrSeries = serde_json::from_str(json).unwrap();
        let items = series.into_items();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.id == 7 && i.tag_ids == vec![1]));
        assert!(items[1].is_complete());
        assert!(!items[0].is_complete());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id": 1, "title": "Bare", "path": "/movies/Bare"}"#;
        let movie: ArrMovie = serde_json::from_str(json).unwrap();
        let item: TrackedItem = movie.into();

        assert_eq!(item.sort_title, "bare");
        assert!(item.genres.is_empty());
    }
}
