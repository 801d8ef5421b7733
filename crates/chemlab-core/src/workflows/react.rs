use crate::core::catalog::Catalog;
use crate::core::models::atom::{Atom, Reactant};
use crate::core::models::ids::{AtomId, MoleculeId};
use crate::engine::error::WorkflowError;
use crate::engine::explain::ExplanationRequest;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::substitution::substitute;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionStep {
    pub target: AtomId,
    pub reactant: Reactant,
}

impl ReactionStep {
    pub fn new(target: impl Into<AtomId>, reactant: Reactant) -> Self {
        Self {
            target: target.into(),
            reactant,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionResult {
    pub molecule_id: MoleculeId,
    pub substrate_name: String,
    pub initial_formula: String,
    /// Product formula after each step, in order.
    pub intermediate_formulas: Vec<String>,
    pub atoms: Vec<Atom>,
    pub formula: String,
    pub explanation: ExplanationRequest,
}

/// Applies `steps` in order to a fresh copy of a catalog molecule.
///
/// The run stops at the first failing step; the error carries its one-based index.
#[instrument(skip_all, name = "reaction_workflow", fields(molecule = molecule_id))]
pub fn run(
    catalog: &Catalog,
    molecule_id: &str,
    steps: &[ReactionStep],
    reporter: &ProgressReporter,
) -> Result<ReactionResult, WorkflowError> {
    let molecule = catalog
        .get(molecule_id)
        .ok_or_else(|| WorkflowError::UnknownMolecule(molecule_id.to_string()))?;
    if steps.is_empty() {
        return Err(WorkflowError::NoSubstitutions);
    }

    reporter.report(Progress::RunStart {
        subject: molecule.name.clone(),
        total_steps: steps.len() as u64,
    });

    let mut atoms = molecule.working_atoms();
    let mut intermediate_formulas = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let product = substitute(&atoms, step.target.as_str(), step.reactant).map_err(|source| {
            WorkflowError::Substitution {
                step: index + 1,
                source,
            }
        })?;
        atoms = product.atoms;
        reporter.report(Progress::Message(format!(
            "{} replaced by {}",
            step.target,
            step.reactant.name()
        )));
        reporter.report(Progress::StepDone {
            step: index as u64 + 1,
            formula: product.formula.clone(),
        });
        intermediate_formulas.push(product.formula);
    }

    reporter.report(Progress::RunFinish);

    // Non-empty: at least one step succeeded.
    let formula = intermediate_formulas.last().cloned().unwrap_or_default();
    info!(
        "{} -> {} after {} substitution(s).",
        molecule.formula,
        formula,
        steps.len()
    );

    let explanation = ExplanationRequest::Reaction {
        substrate_name: molecule.name.clone(),
        reactant_name: reactant_names(steps),
        product_formula: formula.clone(),
    };

    Ok(ReactionResult {
        molecule_id: molecule.id.clone(),
        substrate_name: molecule.name.clone(),
        initial_formula: molecule.formula.clone(),
        intermediate_formulas,
        atoms,
        formula,
        explanation,
    })
}

/// Distinct reactant names in first-use order, joined with "and".
fn reactant_names(steps: &[ReactionStep]) -> String {
    let mut names: Vec<&'static str> = Vec::new();
    for step in steps {
        let name = step.reactant.name();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names.join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::SubstitutionError;
    use std::sync::Mutex;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn dichlorination_of_methane() {
        let steps = [
            ReactionStep::new("h1", Reactant::Chlorine),
            ReactionStep::new("h3", Reactant::Chlorine),
        ];
        let result = run(&catalog(), "methane", &steps, &ProgressReporter::new()).unwrap();
        assert_eq!(result.initial_formula, "CH4");
        assert_eq!(result.intermediate_formulas, ["CH3Cl", "CH2Cl2"]);
        assert_eq!(result.formula, "CH2Cl2");
        assert_eq!(
            result.explanation,
            ExplanationRequest::Reaction {
                substrate_name: "Methane".into(),
                reactant_name: "Chlorine".into(),
                product_formula: "CH2Cl2".into(),
            }
        );
    }

    #[test]
    fn mixed_reactants_are_all_named() {
        let steps = [
            ReactionStep::new("h1", Reactant::Bromine),
            ReactionStep::new("h4", Reactant::Chlorine),
            ReactionStep::new("h5", Reactant::Bromine),
        ];
        let result = run(&catalog(), "ethane", &steps, &ProgressReporter::new()).unwrap();
        assert_eq!(result.formula, "C2H3Br2Cl");
        assert!(matches!(
            result.explanation,
            ExplanationRequest::Reaction { ref reactant_name, .. } if reactant_name == "Bromine and Chlorine"
        ));
    }

    #[test]
    fn failing_step_is_reported_with_its_index() {
        let steps = [
            ReactionStep::new("h1", Reactant::Chlorine),
            ReactionStep::new("c1", Reactant::Chlorine),
        ];
        let err = run(&catalog(), "methane", &steps, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Substitution {
                step: 2,
                source: SubstitutionError::InvalidTarget { .. }
            }
        ));
    }

    #[test]
    fn unknown_molecule_and_empty_steps_are_rejected() {
        let catalog = catalog();
        let reporter = ProgressReporter::new();
        assert_eq!(
            run(&catalog, "benzene", &[ReactionStep::new("h1", Reactant::Chlorine)], &reporter),
            Err(WorkflowError::UnknownMolecule("benzene".into()))
        );
        assert_eq!(
            run(&catalog, "methane", &[], &reporter),
            Err(WorkflowError::NoSubstitutions)
        );
    }

    #[test]
    fn progress_is_reported_per_step() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let steps = [ReactionStep::new("h5", Reactant::Bromine)];
        run(&catalog(), "ethane", &steps, &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::RunStart {
                    subject: "Ethane".into(),
                    total_steps: 1,
                },
                Progress::Message("h5 replaced by Bromine".into()),
                Progress::StepDone {
                    step: 1,
                    formula: "C2H5Br".into(),
                },
                Progress::RunFinish,
            ]
        );
    }
}
