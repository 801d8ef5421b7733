use crate::core::catalog::CatalogError;
use crate::core::models::atom::AtomType;
use crate::core::models::ids::AtomId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    /// The target id is not part of the working atom list.
    #[error("Atom '{atom_id}' does not exist in the current molecule")]
    AtomNotFound { atom_id: AtomId },

    /// The target exists but is not a hydrogen atom.
    #[error(
        "Atom '{atom_id}' is {}; only hydrogen atoms may be substituted in this simplified model",
        .found.name()
    )]
    InvalidTarget { atom_id: AtomId, found: AtomType },
}

impl SubstitutionError {
    pub fn atom_id(&self) -> &AtomId {
        match self {
            SubstitutionError::AtomNotFound { atom_id }
            | SubstitutionError::InvalidTarget { atom_id, .. } => atom_id,
        }
    }

    /// Whether the failure should be explained to the user rather than only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SubstitutionError::InvalidTarget { .. })
    }
}

/// Failures of the one-shot workflows built on the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Molecule catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Unknown molecule '{0}'")]
    UnknownMolecule(String),

    #[error("No substitutions were requested")]
    NoSubstitutions,

    #[error("Substitution {step} failed: {source}")]
    Substitution {
        step: usize,
        #[source]
        source: SubstitutionError,
    },
}
