//! # Catalog Module
//!
//! The read-only set of molecules a session can load.
//!
//! The catalog is materialised once from the compiled-in fixture and validated
//! as a whole: every molecule must have a symmetric, connected bond graph and an
//! authored formula that matches the formula derived from its atoms. Query
//! operations are pure and cheap enough to run on every keystroke of a search box.
//!
//! ```ignore
//! use chemlab::core::catalog::{Catalog, CategoryFilter};
//!
//! let catalog = Catalog::builtin()?;
//! let butanes = catalog.filter("c4h", CategoryFilter::All);
//! ```

mod fixture;

use crate::core::formula::hill_formula;
use crate::core::models::atom::{Atom, ParseError};
use crate::core::models::ids::MoleculeId;
use crate::core::models::molecule::{Molecule, MoleculeCategory};
use crate::core::models::topology::{TopologyError, validate_bond_graph};
use nalgebra::Point3;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog contains no molecules")]
    Empty,

    #[error("Molecule id '{0}' appears more than once in the catalog")]
    DuplicateMolecule(MoleculeId),

    #[error("Invalid bond graph in molecule '{molecule}': {source}")]
    Topology {
        molecule: MoleculeId,
        #[source]
        source: TopologyError,
    },

    #[error("Molecule '{molecule}' is authored as {authored} but its atoms give {derived}")]
    FormulaMismatch {
        molecule: MoleculeId,
        authored: String,
        derived: String,
    },
}

/// Restricts a catalog query to one category, or lets every category through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MoleculeCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: MoleculeCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<MoleculeCategory> for CategoryFilter {
    fn from(category: MoleculeCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        MoleculeCategory::from_str(s).map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    molecules: Vec<Molecule>,
}

impl Catalog {
    /// Builds the catalog from the compiled-in fixture.
    pub fn builtin() -> Result<Self, CatalogError> {
        let molecules = fixture::MOLECULES
            .iter()
            .map(|spec| Molecule {
                id: MoleculeId::from(spec.id),
                name: spec.name.to_string(),
                formula: spec.formula.to_string(),
                category: spec.category,
                description: spec.description.to_string(),
                atoms: spec
                    .atoms
                    .iter()
                    .map(|a| {
                        let [x, y, z] = a.position;
                        Atom::new(a.id, a.atom_type, Point3::new(x, y, z), a.bonds.iter().copied())
                    })
                    .collect(),
            })
            .collect();
        Self::from_molecules(molecules)
    }

    /// The builtin catalog, built and validated on first use and shared by the whole process.
    pub fn shared() -> Result<&'static Catalog, CatalogError> {
        static SHARED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        SHARED.get_or_init(Catalog::builtin).as_ref().map_err(Clone::clone)
    }

    /// Validates and wraps an arbitrary list of molecules, keeping their order.
    pub fn from_molecules(molecules: Vec<Molecule>) -> Result<Self, CatalogError> {
        if molecules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(molecules.len());
        for molecule in &molecules {
            if !ids.insert(&molecule.id) {
                return Err(CatalogError::DuplicateMolecule(molecule.id.clone()));
            }
            validate_bond_graph(&molecule.atoms).map_err(|source| CatalogError::Topology {
                molecule: molecule.id.clone(),
                source,
            })?;
            let derived = hill_formula(&molecule.atoms);
            if derived != molecule.formula {
                return Err(CatalogError::FormulaMismatch {
                    molecule: molecule.id.clone(),
                    authored: molecule.formula.clone(),
                    derived,
                });
            }
        }

        debug!("Catalog validated with {} molecules.", molecules.len());
        Ok(Self { molecules })
    }

    /// Every molecule, in authored order. Never empty.
    pub fn list_all(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    /// The molecule a fresh session starts with.
    pub fn first(&self) -> &Molecule {
        // Construction rejects empty catalogs.
        &self.molecules[0]
    }

    pub fn get(&self, id: &str) -> Option<&Molecule> {
        self.molecules.iter().find(|molecule| molecule.id == id)
    }

    /// Case-insensitive substring search over names and formulas, restricted by category.
    ///
    /// An empty query matches every molecule of the selected category.
    pub fn filter(&self, query: &str, category: CategoryFilter) -> Vec<&Molecule> {
        let query = query.to_lowercase();
        self.molecules
            .iter()
            .filter(|molecule| category.matches(molecule.category))
            .filter(|molecule| {
                molecule.name.to_lowercase().contains(&query)
                    || molecule.formula.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// An owned copy of a molecule's atoms for use as session working state.
    pub fn working_copy(&self, id: &str) -> Option<Vec<Atom>> {
        self.get(id).map(Molecule::working_atoms)
    }
}
