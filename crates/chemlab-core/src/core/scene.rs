//! Render primitives and click resolution for ball-and-stick models.
//!
//! A [`Scene`] is rebuilt from the working atom list whenever it changes. It holds one
//! sphere per atom and one cylinder per unordered bond, and it resolves clicks on atom
//! ids while respecting the interaction flags of the session.

use crate::core::elements::{BOND_RADIUS, style_for};
use crate::core::models::atom::{Atom, AtomType};
use crate::core::models::ids::AtomId;
use crate::core::models::topology::{Bond, unique_bonds};
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneOptions {
    /// Whether atom clicks should be forwarded to the session.
    pub can_interact: bool,
    /// Whether a cracking animation is running; clicks are ignored meanwhile.
    pub is_cracking: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomSphere {
    pub atom_id: AtomId,
    pub atom_type: AtomType,
    pub center: Point3<f64>,
    pub radius: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BondCylinder {
    pub bond: Bond,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub radius: f64,
}

impl BondCylinder {
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.start, &self.end)
    }
}

/// The atom a pointer click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomClick {
    pub atom_id: AtomId,
    pub atom_type: AtomType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub spheres: Vec<AtomSphere>,
    pub bonds: Vec<BondCylinder>,
    pub options: SceneOptions,
}

impl Scene {
    pub fn build(atoms: &[Atom], options: SceneOptions) -> Self {
        let positions: HashMap<&str, Point3<f64>> = atoms
            .iter()
            .map(|atom| (atom.id.as_str(), atom.position))
            .collect();

        let spheres = atoms
            .iter()
            .map(|atom| {
                let style = style_for(atom.atom_type);
                AtomSphere {
                    atom_id: atom.id.clone(),
                    atom_type: atom.atom_type,
                    center: atom.position,
                    radius: style.radius,
                    color: style.color,
                }
            })
            .collect();

        let bonds = unique_bonds(atoms)
            .into_iter()
            .filter_map(|bond| {
                let start = *positions.get(bond.first.as_str())?;
                let end = *positions.get(bond.second.as_str())?;
                Some(BondCylinder {
                    bond,
                    start,
                    end,
                    radius: BOND_RADIUS,
                })
            })
            .collect();

        Self {
            spheres,
            bonds,
            options,
        }
    }

    /// Whether clicks are currently accepted.
    pub fn accepts_clicks(&self) -> bool {
        self.options.can_interact && !self.options.is_cracking
    }

    /// Resolves a click on `atom_id`, or `None` when clicks are disabled or the atom is absent.
    pub fn click(&self, atom_id: &str) -> Option<AtomClick> {
        if !self.accepts_clicks() {
            return None;
        }
        self.spheres
            .iter()
            .find(|sphere| sphere.atom_id == atom_id)
            .map(|sphere| AtomClick {
                atom_id: sphere.atom_id.clone(),
                atom_type: sphere.atom_type,
            })
    }

    /// Axis-aligned bounds of all spheres, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let mut spheres = self.spheres.iter();
        let first = spheres.next()?;
        let r = Vector3::repeat(first.radius);
        let init = (first.center - r, first.center + r);
        Some(spheres.fold(init, |(min, max), sphere| {
            let r = Vector3::repeat(sphere.radius);
            (
                min.inf(&(sphere.center - r)),
                max.sup(&(sphere.center + r)),
            )
        }))
    }
}
