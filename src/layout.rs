//! Generation layout around a focal person.
//!
//! The engine gathers up to four tiers (grandparents, parents, the focal
//! person with spouses, children), drops the empty ones, and places every
//! member on a grid: one row per tier, rows centred on the widest one. The
//! connecting lines are derived from the placements and the kinship indices.
//!
//! Layout is a pure function of the store, the focal id and the profile.
//! Positions are kept in a `BTreeMap` so repeated calls serialize
//! identically.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::Id;
use crate::error::{ArvoreError, Result};
use crate::store::{EntityStore, IdHasher};

/// Smallest left margin a centred layout may have.
pub const MIN_LEFT_MARGIN: f64 = 20.0;

/// Every dimension the layout needs; nothing is read from ambient state.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LayoutProfile {
    pub include_grandparents: bool,
    pub node_width: f64,
    pub node_height: f64,
    pub grandparent_node_width: f64,
    pub grandparent_node_height: f64,
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub container_width: f64,
    pub container_height: f64,
    pub start_y: f64,
    #[serde(default)]
    pub bottom_padding: f64,
    /// When set, vertical spacing shrinks (down to this floor) so that more
    /// than two tiers fit in `container_height`.
    #[serde(default)]
    pub fit_min_vertical_spacing: Option<f64>,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self {
            include_grandparents: true,
            node_width: 140.0,
            node_height: 75.0,
            grandparent_node_width: 120.0,
            grandparent_node_height: 65.0,
            horizontal_spacing: 160.0,
            vertical_spacing: 120.0,
            container_width: 1000.0,
            container_height: 600.0,
            start_y: 40.0,
            bottom_padding: 60.0,
            fit_min_vertical_spacing: None,
        }
    }
}

/// One horizontal tier of the tree.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Generation {
    /// Negative for ancestors, 0 for the focal tier, positive for descendants.
    pub depth: i32,
    pub members: Vec<Id>,
    pub is_grandparent_tier: bool,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Top-left corner and size of one person's node.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ParentChildEdge {
    pub parent: Id,
    pub child: Id,
    pub from: Point,
    pub to: Point,
    pub parent_node_height: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SpouseEdge {
    pub first: Id,
    pub second: Id,
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct LayoutResult {
    pub focal: Id,
    pub generations: Vec<Generation>,
    pub positions: BTreeMap<Id, Placement>,
    pub parent_child_edges: Vec<ParentChildEdge>,
    pub spouse_edges: Vec<SpouseEdge>,
    /// Spacing actually used between tiers (differs from the profile only
    /// when fitting to the container height).
    pub vertical_spacing: f64,
    pub required_height: f64,
}

impl LayoutResult {
    pub fn placement(&self, person: &Id) -> Option<&Placement> {
        self.positions.get(person)
    }
    /// Placed persons, tier by tier, left to right.
    pub fn placed(&self) -> impl Iterator<Item = &Id> {
        self.generations.iter().flat_map(|g| g.members.iter())
    }
}

/// Lays out family trees from one store.
pub struct LayoutEngine<'store> {
    store: &'store EntityStore,
}

impl<'store> LayoutEngine<'store> {
    pub fn new(store: &'store EntityStore) -> Self {
        Self { store }
    }

    pub fn layout(&self, focal: &Id, profile: &LayoutProfile) -> Result<LayoutResult> {
        if !self.store.contains_person(focal) {
            return Err(ArvoreError::PersonNotFound(focal.clone()));
        }
        let generations = self.generations(focal, profile.include_grandparents);
        let vertical_spacing = fitted_vertical_spacing(profile, generations.len());

        // horizontal extent is driven by the widest tier
        let max_row = generations.iter().map(|g| g.members.len()).max().unwrap_or(0);
        let overall_width = max_row as f64 * profile.horizontal_spacing;
        let overall_start_x =
            ((profile.container_width - overall_width) / 2.0).max(MIN_LEFT_MARGIN);

        let mut positions = BTreeMap::new();
        for (index, generation) in generations.iter().enumerate() {
            let y = profile.start_y + index as f64 * vertical_spacing;
            let row_width = generation.members.len() as f64 * profile.horizontal_spacing;
            let row_start_x = overall_start_x + (overall_width - row_width) / 2.0;
            let (width, height) = node_size(profile, generation);
            for (slot, member) in generation.members.iter().enumerate() {
                let x = row_start_x + slot as f64 * profile.horizontal_spacing;
                positions.insert(member.clone(), Placement { x, y, width, height });
            }
        }

        let parent_child_edges = self.parent_child_edges(&generations, &positions, profile);
        let spouse_edges = self.spouse_edges(&generations, &positions);
        let required_height = profile.start_y
            + generations.len().saturating_sub(1) as f64 * vertical_spacing
            + profile.node_height
            + profile.bottom_padding;

        debug!(
            focal = %focal,
            generations = generations.len(),
            placed = positions.len(),
            "layout computed"
        );
        Ok(LayoutResult {
            focal: focal.clone(),
            generations,
            positions,
            parent_child_edges,
            spouse_edges,
            vertical_spacing,
            required_height,
        })
    }

    /// Builds the non-empty tiers, top to bottom.
    ///
    /// Members missing from the store are dropped, and nobody appears twice:
    /// the first tier (top-down) that lists a person keeps them, except the
    /// focal person who always stays in tier 0.
    pub fn generations(&self, focal: &Id, include_grandparents: bool) -> Vec<Generation> {
        let store = self.store;
        let mut placed = HashSet::<Id, IdHasher>::default();
        placed.insert(focal.clone());
        let mut admit = |candidates: Vec<Id>| -> Vec<Id> {
            candidates
                .into_iter()
                .filter(|id| store.contains_person(id) && placed.insert(id.clone()))
                .collect()
        };

        let parents = store.parents_of(focal);
        let grandparents = if include_grandparents {
            let (paternal, maternal) = store.grandparents_of(focal);
            admit(paternal.iter().chain(maternal.iter()).cloned().collect())
        } else {
            Vec::new()
        };
        let parent_tier = admit(parents.iter().cloned().collect());
        let mut focal_tier = vec![focal.clone()];
        focal_tier.extend(admit(store.spouses_of(focal)));
        let children = admit(store.children_of(focal));

        [
            (-2, grandparents, true),
            (-1, parent_tier, false),
            (0, focal_tier, false),
            (1, children, false),
        ]
        .into_iter()
        .filter(|(_, members, _)| !members.is_empty())
        .map(|(depth, members, is_grandparent_tier)| Generation {
            depth,
            members,
            is_grandparent_tier,
        })
        .collect()
    }

    fn parent_child_edges(
        &self,
        generations: &[Generation],
        positions: &BTreeMap<Id, Placement>,
        profile: &LayoutProfile,
    ) -> Vec<ParentChildEdge> {
        let mut edges = Vec::new();
        for pair in generations.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            let parent_node_height = node_size(profile, upper).1;
            for parent in &upper.members {
                let Some(from) = positions.get(parent) else { continue };
                for child in self.store.children_of(parent) {
                    if !lower.members.contains(&child) {
                        continue;
                    }
                    if let Some(to) = positions.get(&child) {
                        edges.push(ParentChildEdge {
                            parent: parent.clone(),
                            child,
                            from: from.origin(),
                            to: to.origin(),
                            parent_node_height,
                        });
                    }
                }
            }
        }
        edges
    }

    fn spouse_edges(
        &self,
        generations: &[Generation],
        positions: &BTreeMap<Id, Placement>,
    ) -> Vec<SpouseEdge> {
        let Some(focal_tier) = generations.iter().find(|g| g.depth == 0) else {
            return Vec::new();
        };
        let members = &focal_tier.members;
        let mut edges = Vec::new();
        for (i, first) in members.iter().enumerate() {
            for second in &members[i + 1..] {
                if !self.store.are_spouses(first, second) {
                    continue;
                }
                if let (Some(a), Some(b)) = (positions.get(first), positions.get(second)) {
                    edges.push(SpouseEdge {
                        first: first.clone(),
                        second: second.clone(),
                        from: a.origin(),
                        to: b.origin(),
                    });
                }
            }
        }
        edges
    }
}

fn node_size(profile: &LayoutProfile, generation: &Generation) -> (f64, f64) {
    if generation.is_grandparent_tier {
        (profile.grandparent_node_width, profile.grandparent_node_height)
    } else {
        (profile.node_width, profile.node_height)
    }
}

// Shrinks tier spacing when the tree would overflow the container.
fn fitted_vertical_spacing(profile: &LayoutProfile, tiers: usize) -> f64 {
    let Some(floor) = profile.fit_min_vertical_spacing else {
        return profile.vertical_spacing;
    };
    let needed = profile.start_y
        + tiers as f64 * profile.vertical_spacing
        + profile.node_height
        + profile.bottom_padding;
    if needed > profile.container_height && tiers > 2 {
        let available = profile.container_height
            - profile.start_y
            - profile.node_height
            - profile.bottom_padding;
        (available / tiers as f64).max(floor)
    } else {
        profile.vertical_spacing
    }
}
