use chrono::{DateTime, Utc};

use cull_core::library::{ItemKind, TrackedItem};
use cull_core::traits::IRetentionSubject;

/// A tracked item plus its observed anchor, viewed through the classifier's
/// capability trait. Seasons present no genre facet; movies always do.
pub struct ItemSubject<'a> {
    item: &'a TrackedItem,
    anchor: Option<DateTime<Utc>>,
}

impl<'a> ItemSubject<'a> {
    pub fn new(item: &'a TrackedItem, anchor: Option<DateTime<Utc>>) -> Self {
        Self { item, anchor }
    }
}

impl IRetentionSubject for ItemSubject<'_> {
    fn anchor(&self) -> Option<DateTime<Utc>> {
        self.anchor
    }

    fn tag_ids(&self) -> &[i64] {
        &self.item.tag_ids
    }

    fn genres(&self) -> Option<&[String]> {
        match self.item.kind {
            ItemKind::Movie => Some(&self.item.genres),
            ItemKind::Season { .. } => None,
        }
    }
}
