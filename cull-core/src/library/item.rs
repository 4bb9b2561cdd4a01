use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::SPECIALS_DIR;

/// What kind of evaluation unit an item is. Movies are evaluated whole;
/// a series is flattened into one item per season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Movie,
    Season {
        number: u32,
        /// Episodes the catalog expects for the season.
        total_episodes: u32,
        /// Episodes with a file on disk.
        episode_files: u32,
    },
}

/// One evaluation unit pulled from the media manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedItem {
    /// Catalog identifier of the movie or parent series.
    pub id: i64,
    pub title: String,
    /// Title normalized by the catalog for ordering; run iteration sorts on it.
    pub sort_title: String,
    pub year: i32,
    /// On-disk folder: the movie folder, or the series folder for seasons.
    pub path: PathBuf,
    /// Applied tag identifiers.
    pub tag_ids: Vec<i64>,
    /// Genre labels. The catalog only supplies these for movies.
    pub genres: Vec<String>,
    pub kind: ItemKind,
}

impl TrackedItem {
    /// Human-readable label used in every log line and notification.
    pub fn label(&self) -> String {
        match self.kind {
            ItemKind::Movie => format!("{} ({})", self.title, self.year),
            ItemKind::Season { number, .. } => {
                format!("{} Season {:02} ({})", self.title, number, self.year)
            }
        }
    }

    /// The directory holding this item's media files and its anchor marker.
    pub fn media_dir(&self) -> PathBuf {
        match self.kind {
            ItemKind::Movie => self.path.clone(),
            ItemKind::Season { number, .. } => self.path.join(season_dir_name(number)),
        }
    }

    /// Whether every expected media file is present. Movies report true here;
    /// their file presence is established by the anchor scan instead.
    pub fn is_complete(&self) -> bool {
        match self.kind {
            ItemKind::Movie => true,
            ItemKind::Season {
                total_episodes,
                episode_files,
                ..
            } => total_episodes == episode_files,
        }
    }
}

/// A catalog tag: label/id pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

/// Directory name the media manager uses for a season on disk.
pub fn season_dir_name(number: u32) -> String {
    if number == 0 {
        SPECIALS_DIR.to_string()
    } else {
        format!("Season {number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_zero_is_specials() {
        assert_eq!(season_dir_name(0), "Specials");
        assert_eq!(season_dir_name(3), "Season 3");
    }

    #[test]
    fn season_label_zero_pads() {
        let item = TrackedItem {
            id: 1,
            title: "Show".to_string(),
            sort_title: "show".to_string(),
            year: 2020,
            path: PathBuf::from("/tv/Show"),
            tag_ids: vec![],
            genres: vec![],
            kind: ItemKind::Season {
                number: 2,
                total_episodes: 10,
                episode_files: 10,
            },
        };
        assert_eq!(item.label(), "Show Season 02 (2020)");
        assert_eq!(item.media_dir(), PathBuf::from("/tv/Show/Season 2"));
    }
}
