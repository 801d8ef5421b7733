use crate::core::catalog::Catalog;
use crate::core::formula::element_counts;
use crate::core::models::atom::AtomType;
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::unique_bonds;
use crate::engine::error::WorkflowError;
use crate::engine::explain::{ExplanationRequest, ProcessKind};
use crate::engine::substitution::substitutable_atoms;
use std::collections::BTreeMap;
use tracing::instrument;

/// Everything a front end shows about a catalog molecule before any reaction.
#[derive(Debug, Clone)]
pub struct MoleculeReport<'a> {
    pub molecule: &'a Molecule,
    pub element_counts: BTreeMap<AtomType, usize>,
    pub bond_count: usize,
    pub substitutable: Vec<AtomId>,
    pub explanation: ExplanationRequest,
}

#[instrument(skip(catalog))]
pub fn describe<'a>(catalog: &'a Catalog, molecule_id: &str) -> Result<MoleculeReport<'a>, WorkflowError> {
    let molecule = lookup(catalog, molecule_id)?;
    Ok(MoleculeReport {
        molecule,
        element_counts: element_counts(&molecule.atoms),
        bond_count: unique_bonds(&molecule.atoms).len(),
        substitutable: substitutable_atoms(&molecule.atoms).cloned().collect(),
        explanation: ExplanationRequest::Molecule {
            name: molecule.name.clone(),
            formula: molecule.formula.clone(),
            category: molecule.category,
        },
    })
}

/// Prepares the explanation request for running `process` on a catalog molecule.
#[instrument(skip(catalog))]
pub fn industrial_process(
    catalog: &Catalog,
    molecule_id: &str,
    process: ProcessKind,
) -> Result<ExplanationRequest, WorkflowError> {
    let molecule = lookup(catalog, molecule_id)?;
    Ok(ExplanationRequest::Industrial {
        substrate_name: molecule.name.clone(),
        process,
    })
}

fn lookup<'a>(catalog: &'a Catalog, molecule_id: &str) -> Result<&'a Molecule, WorkflowError> {
    catalog
        .get(molecule_id)
        .ok_or_else(|| WorkflowError::UnknownMolecule(molecule_id.to_string()))
}
