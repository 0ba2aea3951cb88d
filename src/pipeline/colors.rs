//! Color map accumulation across a batch.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::theme::ColorMap;

/// Document name -> color map, for every themed document in a run.
///
/// Keys are sorted so the aggregate file is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllColorMaps {
    maps: BTreeMap<String, ColorMap>,
}

impl AllColorMaps {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a document's map. Returns the previous map for that name.
    pub fn insert(&mut self, name: impl Into<String>, map: ColorMap) -> Option<ColorMap> {
        self.maps.insert(name.into(), map)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.maps.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorMap)> {
        self.maps.iter().map(|(name, map)| (name.as_str(), map))
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_svg;

    #[test]
    fn test_all_color_maps_json_is_sorted() {
        let mut all = AllColorMaps::new();
        all.insert("zebra", theme_svg("zebra", r##"<path fill="#000"/>"##).color_map);
        all.insert("apple", theme_svg("apple", r##"<path stroke="#fff"/>"##).color_map);

        let json = all.to_json().unwrap();
        let expected = "{\n  \"apple\": {\n    \"stroke\": \"#fff\"\n  },\n  \"zebra\": {\n    \"fill\": \"#000\"\n  }\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_insert_reports_replaced_map() {
        let mut all = AllColorMaps::new();
        let map = theme_svg("a", r##"<path fill="#000"/>"##).color_map;
        assert!(all.insert("a", map.clone()).is_none());
        assert_eq!(all.insert("a", map.clone()), Some(map));
        assert_eq!(all.len(), 1);
    }
}
