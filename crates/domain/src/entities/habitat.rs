//! Habitat entity - Where animals live and trees grow
//!
//! A habitat owns the keys of its trees and its per-species influence
//! settings. The animal and zookeeper sets are back-references kept in sync
//! by the hotel; they are rebuilt on load instead of being persisted.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ids::{AnimalId, EmployeeId, HabitatId, SpeciesId, TreeId};
use crate::types::HabitatInfluence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habitat {
    id: HabitatId,
    name: String,
    area: i32,
    trees: BTreeSet<TreeId>,
    influences: BTreeMap<SpeciesId, HabitatInfluence>,
    #[serde(skip)]
    animals: BTreeSet<AnimalId>,
    #[serde(skip)]
    zookeepers: BTreeSet<EmployeeId>,
}

impl Habitat {
    pub fn new(id: HabitatId, name: impl Into<String>, area: i32) -> Self {
        Self {
            id,
            name: name.into(),
            area,
            trees: BTreeSet::new(),
            influences: BTreeMap::new(),
            animals: BTreeSet::new(),
            zookeepers: BTreeSet::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &HabitatId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn area(&self) -> i32 {
        self.area
    }

    /// Number of animals living here.
    pub fn population(&self) -> usize {
        self.animals.len()
    }

    pub fn zookeeper_count(&self) -> usize {
        self.zookeepers.len()
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Tree keys, ordered case-insensitively.
    pub fn trees(&self) -> impl Iterator<Item = &TreeId> {
        self.trees.iter()
    }

    /// Animal keys, ordered case-insensitively.
    pub fn animals(&self) -> impl Iterator<Item = &AnimalId> {
        self.animals.iter()
    }

    pub fn zookeepers(&self) -> impl Iterator<Item = &EmployeeId> {
        self.zookeepers.iter()
    }

    pub fn has_animal(&self, id: &AnimalId) -> bool {
        self.animals.contains(id)
    }

    pub fn has_tree(&self, id: &TreeId) -> bool {
        self.trees.contains(id)
    }

    pub fn has_zookeeper(&self, id: &EmployeeId) -> bool {
        self.zookeepers.contains(id)
    }

    /// Influence of this habitat on a species; species never set are neutral.
    pub fn influence_on(&self, species: &SpeciesId) -> HabitatInfluence {
        self.influences.get(species).copied().unwrap_or_default()
    }

    pub(crate) fn influences(&self) -> impl Iterator<Item = (&SpeciesId, &HabitatInfluence)> {
        self.influences.iter()
    }

    // =========================================================================
    // Mutations (driven by the hotel)
    // =========================================================================

    pub(crate) fn change_area(&mut self, area: i32) {
        self.area = area;
    }

    pub(crate) fn change_influence(&mut self, species: SpeciesId, influence: HabitatInfluence) {
        self.influences.insert(species, influence);
    }

    pub(crate) fn add_tree(&mut self, id: TreeId) {
        self.trees.insert(id);
    }

    pub(crate) fn add_animal(&mut self, id: AnimalId) {
        self.animals.insert(id);
    }

    pub(crate) fn remove_animal(&mut self, id: &AnimalId) -> bool {
        self.animals.remove(id)
    }

    pub(crate) fn assign_zookeeper(&mut self, id: EmployeeId) {
        self.zookeepers.insert(id);
    }

    pub(crate) fn unassign_zookeeper(&mut self, id: &EmployeeId) {
        self.zookeepers.remove(id);
    }

    pub(crate) fn clear_references(&mut self) {
        self.animals.clear();
        self.zookeepers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_influence_is_neutral() {
        let habitat = Habitat::new(HabitatId::new("H1"), "Savana", 100);
        assert_eq!(
            habitat.influence_on(&SpeciesId::new("L")),
            HabitatInfluence::Neutral
        );
    }

    #[test]
    fn influence_is_per_species() {
        let mut habitat = Habitat::new(HabitatId::new("H1"), "Savana", 100);
        habitat.change_influence(SpeciesId::new("L"), HabitatInfluence::Positive);
        assert_eq!(
            habitat.influence_on(&SpeciesId::new("L")),
            HabitatInfluence::Positive
        );
        assert_eq!(
            habitat.influence_on(&SpeciesId::new("l")),
            HabitatInfluence::Neutral
        );
    }

    #[test]
    fn animals_are_indexed_case_insensitively() {
        let mut habitat = Habitat::new(HabitatId::new("H1"), "Savana", 100);
        habitat.add_animal(AnimalId::new("b"));
        habitat.add_animal(AnimalId::new("A"));
        let ids: Vec<&str> = habitat.animals().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["A", "b"]);
        assert!(habitat.remove_animal(&AnimalId::new("a")));
        assert_eq!(habitat.population(), 1);
    }

    #[test]
    fn serialization_skips_back_references() {
        let mut habitat = Habitat::new(HabitatId::new("H1"), "Savana", 100);
        habitat.add_animal(AnimalId::new("a1"));
        habitat.assign_zookeeper(EmployeeId::new("T1"));
        habitat.add_tree(TreeId::new("T9"));

        let json = serde_json::to_value(&habitat).unwrap();
        assert!(json.get("animals").is_none());
        assert!(json.get("zookeepers").is_none());
        assert_eq!(json["trees"], serde_json::json!(["T9"]));
    }
}
