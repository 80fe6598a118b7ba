//! Map markers created by scripts.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sqf_ir::Value;

/// A named map position.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec<Value>,
}

impl Marker {
    pub fn new(position: Vec<Value>) -> Self {
        Marker { position }
    }
}

/// Markers of one session, in creation order. Names are case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct MarkerTable {
    markers: IndexMap<String, Marker, FxBuildHasher>,
}

impl MarkerTable {
    pub fn get(&self, name: &str) -> Option<&Marker> {
        self.markers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    pub(crate) fn insert(&mut self, name: String, marker: Marker) {
        self.markers.insert(name, marker);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Marker> {
        self.markers.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }
}
