use super::error::SubstitutionError;
use crate::core::formula::hill_formula;
use crate::core::models::atom::{Atom, AtomType, Reactant};
use crate::core::models::ids::AtomId;

/// The product of a successful substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub atoms: Vec<Atom>,
    /// Hill formula of `atoms`.
    pub formula: String,
}

/// Replaces one hydrogen atom with a halogen.
///
/// The returned list is identical to `atoms` except that the target's element becomes
/// the reactant's; ids, positions and bonds are carried over untouched. The input is
/// never modified, so a failed call leaves the caller's state exactly as it was.
///
/// # Errors
///
/// * [`SubstitutionError::AtomNotFound`] if no atom has the target id.
/// * [`SubstitutionError::InvalidTarget`] if the target is not hydrogen. A molecule
///   without hydrogen therefore rejects every target.
pub fn substitute(
    atoms: &[Atom],
    target_atom_id: &str,
    reactant: Reactant,
) -> Result<Substitution, SubstitutionError> {
    let index = atoms
        .iter()
        .position(|atom| atom.id == target_atom_id)
        .ok_or_else(|| SubstitutionError::AtomNotFound {
            atom_id: AtomId::from(target_atom_id),
        })?;

    let target = &atoms[index];
    if target.atom_type != AtomType::Hydrogen {
        return Err(SubstitutionError::InvalidTarget {
            atom_id: target.id.clone(),
            found: target.atom_type,
        });
    }

    let mut product = atoms.to_vec();
    product[index].atom_type = reactant.atom_type();
    let formula = hill_formula(&product);

    Ok(Substitution {
        atoms: product,
        formula,
    })
}

/// Ids of the atoms a substitution may target, in list order.
pub fn substitutable_atoms(atoms: &[Atom]) -> impl Iterator<Item = &AtomId> {
    atoms
        .iter()
        .filter(|atom| atom.atom_type == AtomType::Hydrogen)
        .map(|atom| &atom.id)
}
