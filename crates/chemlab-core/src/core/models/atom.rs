use super::ids::AtomId;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The element tags known to the lab.
///
/// The set is closed: the catalog only contains hydrocarbons, and the only
/// elements that can enter a molecule afterwards are the two halogen reactants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AtomType {
    #[serde(rename = "C")]
    Carbon,
    #[serde(rename = "H")]
    Hydrogen,
    #[serde(rename = "Cl")]
    Chlorine,
    #[serde(rename = "Br")]
    Bromine,
}

impl AtomType {
    pub const ALL: [AtomType; 4] = [
        AtomType::Carbon,
        AtomType::Hydrogen,
        AtomType::Chlorine,
        AtomType::Bromine,
    ];

    /// The chemical symbol, as written in formulas.
    pub const fn symbol(self) -> &'static str {
        match self {
            AtomType::Carbon => "C",
            AtomType::Hydrogen => "H",
            AtomType::Chlorine => "Cl",
            AtomType::Bromine => "Br",
        }
    }

    /// The English element name.
    pub const fn name(self) -> &'static str {
        match self {
            AtomType::Carbon => "Carbon",
            AtomType::Hydrogen => "Hydrogen",
            AtomType::Chlorine => "Chlorine",
            AtomType::Bromine => "Bromine",
        }
    }

    pub const fn is_halogen(self) -> bool {
        matches!(self, AtomType::Chlorine | AtomType::Bromine)
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AtomType {
    type Err = ParseError;

    /// Parses an element from its symbol or English name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "carbon" => Ok(AtomType::Carbon),
            "h" | "hydrogen" => Ok(AtomType::Hydrogen),
            "cl" | "chlorine" => Ok(AtomType::Chlorine),
            "br" | "bromine" => Ok(AtomType::Bromine),
            _ => Err(ParseError::UnknownElement(s.to_string())),
        }
    }
}

/// A halogen that can replace a hydrogen atom in a substitution reaction.
///
/// Substitution only accepts this type, so asking the engine to substitute with
/// carbon or hydrogen cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reactant {
    Chlorine,
    Bromine,
}

impl Reactant {
    pub const ALL: [Reactant; 2] = [Reactant::Chlorine, Reactant::Bromine];

    /// The element the substituted atom becomes.
    pub const fn atom_type(self) -> AtomType {
        match self {
            Reactant::Chlorine => AtomType::Chlorine,
            Reactant::Bromine => AtomType::Bromine,
        }
    }

    pub const fn name(self) -> &'static str {
        self.atom_type().name()
    }

    /// Formula of the diatomic reagent that supplies the halogen.
    pub const fn reagent_formula(self) -> &'static str {
        match self {
            Reactant::Chlorine => "Cl2",
            Reactant::Bromine => "Br2",
        }
    }
}

impl fmt::Display for Reactant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<AtomType> for Reactant {
    type Error = ParseError;

    fn try_from(atom_type: AtomType) -> Result<Self, Self::Error> {
        match atom_type {
            AtomType::Chlorine => Ok(Reactant::Chlorine),
            AtomType::Bromine => Ok(Reactant::Bromine),
            other => Err(ParseError::NotAHalogen(other)),
        }
    }
}

impl FromStr for Reactant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let atom_type = match normalized.as_str() {
            "cl2" => AtomType::Chlorine,
            "br2" => AtomType::Bromine,
            _ => AtomType::from_str(&normalized)
                .map_err(|_| ParseError::UnknownReactant(s.to_string()))?,
        };
        Reactant::try_from(atom_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown element '{0}'. Expected one of: C, H, Cl, Br.")]
    UnknownElement(String),

    #[error("Unknown reactant '{0}'. Expected 'chlorine' (Cl) or 'bromine' (Br).")]
    UnknownReactant(String),

    #[error("{} is not a halogen and cannot be used as a reactant.", .0.name())]
    NotAHalogen(AtomType),

    #[error("Unknown molecule category '{0}'. Expected Alkane, Alkene or Alkyne.")]
    UnknownCategory(String),

    #[error("Unknown industrial process '{0}'. Expected 'cracking' or 'reforming'.")]
    UnknownProcess(String),
}

/// A single atom of a ball-and-stick model.
///
/// `position` is only meaningful to renderers; the reaction engine never reads it.
/// `connected_to` lists the ids of bonded atoms in the same molecule, and every bond
/// must be listed on both ends (see [`super::topology::validate_bond_graph`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub id: AtomId,
    #[serde(rename = "type")]
    pub atom_type: AtomType,
    pub position: Point3<f64>,
    pub connected_to: Vec<AtomId>,
}

impl Atom {
    pub fn new<I, S>(id: &str, atom_type: AtomType, position: Point3<f64>, connected_to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AtomId>,
    {
        Self {
            id: AtomId::from(id),
            atom_type,
            position,
            connected_to: connected_to.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_bonded_to(&self, other: &str) -> bool {
        self.connected_to.iter().any(|id| id == other)
    }
}
