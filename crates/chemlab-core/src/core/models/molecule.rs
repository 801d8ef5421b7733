use super::atom::{Atom, AtomType, ParseError};
use super::ids::{AtomId, MoleculeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hydrocarbon family a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoleculeCategory {
    Alkane,
    Alkene,
    Alkyne,
}

impl MoleculeCategory {
    pub const ALL: [MoleculeCategory; 3] = [
        MoleculeCategory::Alkane,
        MoleculeCategory::Alkene,
        MoleculeCategory::Alkyne,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MoleculeCategory::Alkane => "Alkane",
            MoleculeCategory::Alkene => "Alkene",
            MoleculeCategory::Alkyne => "Alkyne",
        }
    }
}

impl fmt::Display for MoleculeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoleculeCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alkane" | "alkanes" => Ok(MoleculeCategory::Alkane),
            "alkene" | "alkenes" => Ok(MoleculeCategory::Alkene),
            "alkyne" | "alkynes" => Ok(MoleculeCategory::Alkyne),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

/// A catalog record: display metadata plus the atoms of one connected molecule.
///
/// Molecules are built once when the catalog is materialised and never mutated.
/// Sessions work on a clone obtained from [`Molecule::working_atoms`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub id: MoleculeId,
    pub name: String,
    /// Authored empirical formula in Hill order.
    pub formula: String,
    pub category: MoleculeCategory,
    pub description: String,
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn atom(&self, id: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.id == id)
    }

    /// An owned copy of the atom list, independent of the catalog entry.
    pub fn working_atoms(&self) -> Vec<Atom> {
        self.atoms.clone()
    }

    pub fn count_of(&self, atom_type: AtomType) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.atom_type == atom_type)
            .count()
    }

    pub fn atom_ids(&self) -> impl Iterator<Item = &AtomId> {
        self.atoms.iter().map(|atom| &atom.id)
    }
}
