//! Slot assignment: distinct colors get stable CSS variable names.
//!
//! Naming per attribute kind: `fill`, `fill2`, `fill3`, ... in first-seen
//! order. Slots are keyed by canonical color, so a color seen again reuses
//! its slot no matter where it appears. The color -> slot table is shared by
//! both kinds: a stroke reusing a fill color gets the fill slot.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::Range;

use super::normalize::canonical_color;
use super::scan::{AttrKind, ColorAttribute};

/// Slot name -> canonical color for one document, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: Vec<(String, String)>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical color for a slot name.
    #[cfg(test)]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, color)| color.as_str())
    }

    /// Iterate `(slot, color)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(slot, color)| (slot.as_str(), color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, slot: String, color: String) {
        self.entries.push((slot, color));
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (slot, color) in &self.entries {
            map.serialize_entry(slot, color)?;
        }
        map.end()
    }
}

/// A slotted occurrence, ready for the rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub kind: AttrKind,
    /// Byte range of the original attribute.
    pub span: Range<usize>,
    pub slot: String,
    pub color: String,
    /// Whether this occurrence reused an existing slot.
    pub reused: bool,
}

impl Substitution {
    /// Replacement attribute text: `kind="var(--slot, color)"`.
    pub fn attribute(&self) -> String {
        format!("{}=\"var(--{}, {})\"", self.kind, self.slot, self.color)
    }
}

/// Per-document slot state. Create one per document.
#[derive(Debug, Default)]
pub struct SlotAllocator {
    counters: [usize; 2],
    assigned: HashMap<String, String>,
    map: ColorMap,
}

impl SlotAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `color`, minting a new one for unseen colors.
    ///
    /// Returns the slot name and whether it already existed.
    pub fn assign(&mut self, kind: AttrKind, color: &str) -> (String, bool) {
        if let Some(slot) = self.assigned.get(color) {
            return (slot.clone(), true);
        }

        let counter = &mut self.counters[kind.index()];
        *counter += 1;
        let slot = if *counter == 1 {
            kind.as_str().to_string()
        } else {
            format!("{kind}{counter}")
        };

        self.assigned.insert(color.to_string(), slot.clone());
        self.map.push(slot.clone(), color.to_string());
        (slot, false)
    }

    pub fn into_color_map(self) -> ColorMap {
        self.map
    }
}

/// Assign slots to scanned attributes.
///
/// Attributes whose value is not slottable (e.g. `red`, `rgb(bad)`) produce
/// no substitution and stay untouched.
pub fn assign_slots(attrs: &[ColorAttribute<'_>]) -> (ColorMap, Vec<Substitution>) {
    let mut allocator = SlotAllocator::new();
    let mut substitutions = Vec::with_capacity(attrs.len());

    for attr in attrs {
        let Some(color) = canonical_color(attr.value) else {
            continue;
        };
        let (slot, reused) = allocator.assign(attr.kind, &color);
        substitutions.push(Substitution {
            kind: attr.kind,
            span: attr.span.clone(),
            slot,
            color: color.into_owned(),
            reused,
        });
    }

    (allocator.into_color_map(), substitutions)
}
