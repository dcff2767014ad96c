//! Body-part video catalog parsing

use crate::domain::video::normalize_video_url;

/// One catalog heading and the video links filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPart {
    pub name: String,
    pub videos: Vec<String>,
}

/// Mapping from body-part name to an ordered list of video URLs.
///
/// Preserves the order headings appear in the source file, and the order of
/// links under each heading. Duplicate links are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCatalog {
    parts: Vec<CatalogPart>,
}

impl VideoCatalog {
    /// Parse catalog source lines.
    ///
    /// A non-blank line without "://" starts a heading; a line containing
    /// "://" is a link filed under the most recent heading. Blank lines are
    /// skipped, and links before any heading are dropped. Re-encountering a
    /// heading name re-opens its existing entry.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut catalog = VideoCatalog::default();
        let mut current: Option<usize> = None;

        for raw in lines {
            let line = raw.trim();

            if line.is_empty() {
                continue;
            }

            if !line.contains("://") {
                current = Some(catalog.open_part(line));
            } else if let Some(index) = current {
                catalog.parts[index].videos.push(normalize_video_url(line));
            }
        }

        catalog
    }

    /// Index of the named part, creating an empty entry if it is new
    fn open_part(&mut self, name: &str) -> usize {
        if let Some(index) = self.parts.iter().position(|p| p.name == name) {
            return index;
        }
        self.parts.push(CatalogPart {
            name: name.to_string(),
            videos: Vec::new(),
        });
        self.parts.len() - 1
    }

    /// Body-part names in source order
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    /// Video URLs for the named part, or None if the part is not in the catalog
    pub fn videos(&self, part: &str) -> Option<&[String]> {
        self.parts
            .iter()
            .find(|p| p.name == part)
            .map(|p| p.videos.as_slice())
    }

    pub fn contains_part(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p.name == part)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }
}
