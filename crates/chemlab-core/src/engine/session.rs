//! The interactive session as an explicit state record driven by a pure reducer.
//!
//! Every user action and every outside signal (a timer tick, an explanation arriving)
//! is an [`Event`]. [`reduce`] folds one event into a [`SessionState`] and returns the
//! [`Effect`]s the caller must carry out, which keeps all rules in one place and lets
//! the state machine be tested without clocks or network.
//!
//! Explanation requests are tagged with the session's `generation`. Any event that
//! changes what is on screen bumps it, and responses tagged with an older generation
//! are dropped, so a slow answer about a previous molecule never overwrites the
//! current one.

use super::context::SessionContext;
use super::explain::{ExplanationRequest, ProcessKind};
use super::substitution::substitute;
use crate::core::formula::hill_formula;
use crate::core::models::atom::{Atom, Reactant};
use crate::core::models::ids::{AtomId, MoleculeId};
use crate::core::models::molecule::Molecule;
use crate::core::scene::SceneOptions;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const RESET_MESSAGE: &str = "Model reset. Choose a reactant to begin.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    ReactantArmed(Reactant),
    CrackingInProgress { started_at: Instant },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub molecule_id: MoleculeId,
    pub molecule_name: String,
    /// Session-owned copy of the selected molecule's atoms.
    pub working_atoms: Vec<Atom>,
    /// Hill formula of `working_atoms`.
    pub formula: String,
    pub mode: InteractionMode,
    pub generation: u64,
    /// The most recently accepted explanation text.
    pub explanation: Option<String>,
    /// Whether an explanation for the current generation is still outstanding.
    pub explanation_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectMolecule(MoleculeId),
    ArmReactant(Reactant),
    ClickAtom(AtomId),
    Reset,
    RunIndustrialProcess { kind: ProcessKind, now: Instant },
    Tick(Instant),
    ExplanationReady { generation: u64, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Warning(message) => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the explanation collaborator for text and feed the answer back as
    /// [`Event::ExplanationReady`] with the same generation.
    Explain {
        generation: u64,
        request: ExplanationRequest,
    },
    Notice(Notice),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: SessionState, effect: Effect) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }

    /// The explanation request emitted by this transition, if any.
    pub fn explanation_request(&self) -> Option<(u64, &ExplanationRequest)> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Explain {
                generation,
                request,
            } => Some((*generation, request)),
            Effect::Notice(_) => None,
        })
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notice(notice) => Some(notice),
            Effect::Explain { .. } => None,
        })
    }
}

impl SessionState {
    /// A quiet session showing `molecule`, before any explanation was requested.
    pub fn new(molecule: &Molecule) -> Self {
        Self {
            molecule_id: molecule.id.clone(),
            molecule_name: molecule.name.clone(),
            working_atoms: molecule.working_atoms(),
            formula: molecule.formula.clone(),
            mode: InteractionMode::Idle,
            generation: 0,
            explanation: None,
            explanation_pending: false,
        }
    }

    /// Opens a session on `molecule_id`, or on the first catalog molecule when `None`.
    ///
    /// The returned transition already carries the molecule explanation request.
    pub fn open(ctx: &SessionContext, molecule_id: Option<&str>) -> Option<Transition> {
        let molecule = match molecule_id {
            Some(id) => ctx.molecule(id)?,
            None => ctx.catalog.first(),
        };
        let state = Self::new(molecule);
        Some(reduce(ctx, state, Event::SelectMolecule(molecule.id.clone())))
    }

    pub fn armed_reactant(&self) -> Option<Reactant> {
        match self.mode {
            InteractionMode::ReactantArmed(reactant) => Some(reactant),
            _ => None,
        }
    }

    /// Atom clicks are forwarded only while a reactant is armed.
    pub fn can_interact(&self) -> bool {
        self.armed_reactant().is_some()
    }

    pub fn is_cracking(&self) -> bool {
        matches!(self.mode, InteractionMode::CrackingInProgress { .. })
    }

    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            can_interact: self.can_interact(),
            is_cracking: self.is_cracking(),
        }
    }

    /// Fraction of the cracking animation elapsed at `now`, clamped to `[0, 1]`.
    pub fn cracking_progress(&self, now: Instant, duration: Duration) -> Option<f64> {
        match self.mode {
            InteractionMode::CrackingInProgress { started_at } => {
                if duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(started_at);
                Some((elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0))
            }
            _ => None,
        }
    }

    /// Whether an explanation tagged with `generation` would be dropped.
    pub fn is_stale(&self, generation: u64) -> bool {
        generation != self.generation
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn request_explanation(&mut self, request: ExplanationRequest) -> Effect {
        let generation = self.next_generation();
        self.explanation_pending = true;
        Effect::Explain {
            generation,
            request,
        }
    }
}

/// Applies one event to the session.
pub fn reduce(ctx: &SessionContext, state: SessionState, event: Event) -> Transition {
    match event {
        Event::SelectMolecule(id) => select_molecule(ctx, state, &id),
        Event::ArmReactant(reactant) => arm_reactant(state, reactant),
        Event::ClickAtom(atom_id) => click_atom(state, &atom_id),
        Event::Reset => reset(ctx, state),
        Event::RunIndustrialProcess { kind, now } => run_industrial_process(state, kind, now),
        Event::Tick(now) => tick(ctx, state, now),
        Event::ExplanationReady { generation, text } => accept_explanation(state, generation, text),
    }
}

fn select_molecule(ctx: &SessionContext, state: SessionState, id: &MoleculeId) -> Transition {
    let Some(molecule) = ctx.molecule(id.as_str()) else {
        warn!("Ignoring selection of unknown molecule '{}'.", id);
        return Transition::with(
            state,
            Effect::Notice(Notice::Warning(format!("Unknown molecule '{id}'."))),
        );
    };

    let mut next = SessionState {
        generation: state.generation,
        ..SessionState::new(molecule)
    };
    debug!("Selected molecule '{}'.", molecule.id);
    let effect = next.request_explanation(ExplanationRequest::Molecule {
        name: molecule.name.clone(),
        formula: molecule.formula.clone(),
        category: molecule.category,
    });
    Transition::with(next, effect)
}

fn arm_reactant(mut state: SessionState, reactant: Reactant) -> Transition {
    if state.is_cracking() {
        return Transition::with(
            state,
            Effect::Notice(Notice::Warning(
                "Cracking is in progress; wait for it to finish.".to_string(),
            )),
        );
    }
    if state.explanation_pending {
        let discarded = state.generation;
        state.next_generation();
        state.explanation_pending = false;
        debug!("Re-arming discards outstanding explanation {}.", discarded);
    }
    state.mode = InteractionMode::ReactantArmed(reactant);
    let notice = Notice::Info(format!(
        "{} ({}) selected. Click a hydrogen atom to substitute it.",
        reactant.name(),
        reactant.reagent_formula()
    ));
    Transition::with(state, Effect::Notice(notice))
}

fn click_atom(mut state: SessionState, atom_id: &AtomId) -> Transition {
    let Some(reactant) = state.armed_reactant() else {
        debug!("Ignoring click on '{}': no reactant armed.", atom_id);
        return Transition::unchanged(state);
    };

    match substitute(&state.working_atoms, atom_id.as_str(), reactant) {
        Ok(product) => {
            debug!(
                "Substituted '{}' with {}: {} -> {}.",
                atom_id,
                reactant.name(),
                state.formula,
                product.formula
            );
            state.working_atoms = product.atoms;
            state.formula = product.formula;
            state.mode = InteractionMode::Idle;
            let notice = Notice::Info(format!("Product formula: {}", state.formula));
            let explain = state.request_explanation(ExplanationRequest::Reaction {
                substrate_name: state.molecule_name.clone(),
                reactant_name: reactant.name().to_string(),
                product_formula: state.formula.clone(),
            });
            Transition {
                state,
                effects: vec![Effect::Notice(notice), explain],
            }
        }
        Err(err) if err.is_user_facing() => {
            Transition::with(state, Effect::Notice(Notice::Warning(err.to_string())))
        }
        Err(err) => {
            warn!("Ignoring click: {}", err);
            Transition::unchanged(state)
        }
    }
}

fn reset(ctx: &SessionContext, mut state: SessionState) -> Transition {
    match ctx.molecule(state.molecule_id.as_str()) {
        Some(molecule) => {
            state.working_atoms = molecule.working_atoms();
            state.formula = molecule.formula.clone();
        }
        None => {
            warn!(
                "Molecule '{}' is not in the catalog; resetting formula only.",
                state.molecule_id
            );
            state.formula = hill_formula(&state.working_atoms);
        }
    }
    state.mode = InteractionMode::Idle;
    state.next_generation();
    state.explanation = Some(RESET_MESSAGE.to_string());
    state.explanation_pending = false;
    Transition::with(state, Effect::Notice(Notice::Info(RESET_MESSAGE.to_string())))
}

fn run_industrial_process(mut state: SessionState, kind: ProcessKind, now: Instant) -> Transition {
    if state.is_cracking() {
        return Transition::with(
            state,
            Effect::Notice(Notice::Warning(
                "An industrial process is already running.".to_string(),
            )),
        );
    }

    state.mode = match kind {
        ProcessKind::Cracking => InteractionMode::CrackingInProgress { started_at: now },
        ProcessKind::Reforming => InteractionMode::Idle,
    };
    debug!("Starting {} of '{}'.", kind, state.molecule_id);
    let effect = state.request_explanation(ExplanationRequest::Industrial {
        substrate_name: state.molecule_name.clone(),
        process: kind,
    });
    Transition::with(state, effect)
}

fn tick(ctx: &SessionContext, mut state: SessionState, now: Instant) -> Transition {
    let InteractionMode::CrackingInProgress { started_at } = state.mode else {
        return Transition::unchanged(state);
    };
    if now.saturating_duration_since(started_at) < ctx.config.cracking_duration {
        return Transition::unchanged(state);
    }
    state.mode = InteractionMode::Idle;
    Transition::with(
        state,
        Effect::Notice(Notice::Info("Cracking finished.".to_string())),
    )
}

fn accept_explanation(mut state: SessionState, generation: u64, text: String) -> Transition {
    if state.is_stale(generation) {
        debug!(
            "Dropping stale explanation (generation {}, current {}).",
            generation, state.generation
        );
        return Transition::unchanged(state);
    }
    state.explanation = Some(text);
    state.explanation_pending = false;
    Transition::unchanged(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::atom::AtomType;
    use crate::engine::config::{SessionConfig, SessionConfigBuilder};

    struct Fixture {
        catalog: Catalog,
        config: SessionConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: Catalog::builtin().unwrap(),
                config: SessionConfig::default(),
            }
        }

        fn ctx(&self) -> SessionContext<'_> {
            SessionContext::new(&self.catalog, &self.config)
        }

        fn open(&self, id: &str) -> SessionState {
            SessionState::open(&self.ctx(), Some(id)).unwrap().state
        }

        fn apply(&self, state: SessionState, event: Event) -> Transition {
            reduce(&self.ctx(), state, event)
        }
    }

    fn click(id: &str) -> Event {
        Event::ClickAtom(AtomId::from(id))
    }

    #[test]
    fn open_defaults_to_first_molecule_and_requests_explanation() {
        let fx = Fixture::new();
        let transition = SessionState::open(&fx.ctx(), None).unwrap();
        assert_eq!(transition.state.molecule_id, "methane");
        assert_eq!(transition.state.mode, InteractionMode::Idle);
        assert!(transition.state.explanation_pending);

        let (generation, request) = transition.explanation_request().unwrap();
        assert_eq!(generation, transition.state.generation);
        assert_eq!(
            request,
            &ExplanationRequest::Molecule {
                name: "Methane".into(),
                formula: "CH4".into(),
                category: crate::core::models::molecule::MoleculeCategory::Alkane,
            }
        );
        assert!(SessionState::open(&fx.ctx(), Some("benzene")).is_none());
    }

    #[test]
    fn clicks_without_reactant_are_ignored() {
        let fx = Fixture::new();
        let state = fx.open("methane");
        let transition = fx.apply(state.clone(), click("h1"));
        assert_eq!(transition.state, state);
        assert!(transition.effects.is_empty());
        assert!(!state.can_interact());
    }

    #[test]
    fn armed_click_substitutes_and_returns_to_idle() {
        let fx = Fixture::new();
        let state = fx.open("methane");

        let armed = fx.apply(state, Event::ArmReactant(Reactant::Chlorine)).state;
        let before = armed.generation;
        assert!(armed.can_interact());
        assert!(armed.scene_options().can_interact);

        let transition = fx.apply(armed, click("h1"));
        let state = &transition.state;
        assert_eq!(state.formula, "CH3Cl");
        assert_eq!(state.mode, InteractionMode::Idle);
        assert_eq!(state.generation, before + 1);
        assert_eq!(state.working_atoms[1].atom_type, AtomType::Chlorine);
        assert_eq!(
            transition.explanation_request().unwrap().1,
            &ExplanationRequest::Reaction {
                substrate_name: "Methane".into(),
                reactant_name: "Chlorine".into(),
                product_formula: "CH3Cl".into(),
            }
        );
    }

    #[test]
    fn repeated_substitutions_accumulate() {
        let fx = Fixture::new();
        let mut state = fx.open("methane");
        for target in ["h1", "h3"] {
            state = fx.apply(state, Event::ArmReactant(Reactant::Chlorine)).state;
            state = fx.apply(state, click(target)).state;
        }
        assert_eq!(state.formula, "CH2Cl2");
    }

    #[test]
    fn invalid_target_keeps_state_and_warns() {
        let fx = Fixture::new();
        let armed = fx.apply(fx.open("ethane"), Event::ArmReactant(Reactant::Bromine)).state;

        let transition = fx.apply(armed.clone(), click("c1"));
        assert_eq!(transition.state, armed);
        let notices: Vec<&Notice> = transition.notices().collect();
        assert_eq!(notices.len(), 1);
        assert!(matches!(notices[0], Notice::Warning(m) if m.contains("only hydrogen atoms")));
        assert!(transition.explanation_request().is_none());
    }

    #[test]
    fn unknown_atom_click_is_a_silent_no_op() {
        let fx = Fixture::new();
        let armed = fx.apply(fx.open("ethane"), Event::ArmReactant(Reactant::Bromine)).state;
        let transition = fx.apply(armed.clone(), click("zz"));
        assert_eq!(transition.state, armed);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn reset_restores_catalog_atoms() {
        let fx = Fixture::new();
        let mut state = fx.open("ethane");
        state = fx.apply(state, Event::ArmReactant(Reactant::Bromine)).state;
        state = fx.apply(state, click("h5")).state;
        assert_eq!(state.formula, "C2H5Br");
        state = fx.apply(state, Event::ArmReactant(Reactant::Bromine)).state;

        let generation = state.generation;
        let transition = fx.apply(state, Event::Reset);
        let state = transition.state;
        assert_eq!(state.formula, "C2H6");
        assert_eq!(state.working_atoms, fx.catalog.get("ethane").unwrap().atoms);
        assert_eq!(state.mode, InteractionMode::Idle);
        assert_eq!(state.explanation.as_deref(), Some(RESET_MESSAGE));
        assert!(!state.explanation_pending);
        assert!(state.is_stale(generation));
    }

    #[test]
    fn switching_molecules_discards_in_flight_explanations() {
        let fx = Fixture::new();
        let first = SessionState::open(&fx.ctx(), Some("methane")).unwrap();
        let (old_generation, _) = first.explanation_request().unwrap();

        let switched = fx.apply(first.state, Event::SelectMolecule(MoleculeId::from("ethane")));
        let (new_generation, _) = switched.explanation_request().unwrap();
        assert!(new_generation > old_generation);

        let late = fx.apply(
            switched.state,
            Event::ExplanationReady {
                generation: old_generation,
                text: "all about methane".into(),
            },
        );
        assert_eq!(late.state.explanation, None);
        assert!(late.state.explanation_pending);

        let current = fx.apply(
            late.state,
            Event::ExplanationReady {
                generation: new_generation,
                text: "all about ethane".into(),
            },
        );
        assert_eq!(current.state.explanation.as_deref(), Some("all about ethane"));
        assert!(!current.state.explanation_pending);
    }

    #[test]
    fn rearming_discards_the_outstanding_reaction_explanation() {
        let fx = Fixture::new();
        let armed = fx.apply(fx.open("methane"), Event::ArmReactant(Reactant::Chlorine)).state;
        let substituted = fx.apply(armed, click("h1"));
        let (reaction_generation, _) = substituted.explanation_request().unwrap();
        assert!(substituted.state.explanation_pending);

        let rearmed = fx.apply(substituted.state, Event::ArmReactant(Reactant::Bromine)).state;
        assert!(rearmed.is_stale(reaction_generation));
        assert!(!rearmed.explanation_pending);
        assert_eq!(rearmed.armed_reactant(), Some(Reactant::Bromine));

        let late = fx.apply(
            rearmed,
            Event::ExplanationReady {
                generation: reaction_generation,
                text: "chloromethane".into(),
            },
        );
        assert_eq!(late.state.explanation, None);
    }

    #[test]
    fn rearming_without_outstanding_request_keeps_the_generation() {
        let fx = Fixture::new();
        let opened = SessionState::open(&fx.ctx(), Some("methane")).unwrap();
        let (generation, _) = opened.explanation_request().unwrap();
        let answered = fx.apply(
            opened.state,
            Event::ExplanationReady {
                generation,
                text: "about methane".into(),
            },
        );

        let armed = fx.apply(answered.state, Event::ArmReactant(Reactant::Chlorine)).state;
        assert_eq!(armed.generation, generation);
        assert_eq!(armed.explanation.as_deref(), Some("about methane"));
    }

    #[test]
    fn selecting_unknown_molecule_changes_nothing() {
        let fx = Fixture::new();
        let state = fx.open("propane");
        let transition = fx.apply(state.clone(), Event::SelectMolecule(MoleculeId::from("benzene")));
        assert_eq!(transition.state, state);
        assert!(matches!(transition.notices().next(), Some(Notice::Warning(_))));
    }

    #[test]
    fn selecting_a_molecule_clears_armed_reactant() {
        let fx = Fixture::new();
        let armed = fx.apply(fx.open("methane"), Event::ArmReactant(Reactant::Chlorine)).state;
        let state = fx
            .apply(armed, Event::SelectMolecule(MoleculeId::from("propene")))
            .state;
        assert_eq!(state.mode, InteractionMode::Idle);
        assert_eq!(state.formula, "C3H6");
        assert_eq!(state.molecule_name, "Propene");
    }

    #[test]
    fn cracking_blocks_interaction_until_the_configured_duration() {
        let catalog = Catalog::builtin().unwrap();
        let config = SessionConfigBuilder::new()
            .cracking_duration(Duration::from_secs(2))
            .build()
            .unwrap();
        let ctx = SessionContext::new(&catalog, &config);
        let t0 = Instant::now();

        let state = SessionState::open(&ctx, Some("n-butane")).unwrap().state;
        let state = reduce(&ctx, state, Event::ArmReactant(Reactant::Chlorine)).state;
        let transition = reduce(
            &ctx,
            state,
            Event::RunIndustrialProcess {
                kind: ProcessKind::Cracking,
                now: t0,
            },
        );
        assert!(transition.state.is_cracking());
        assert!(!transition.state.can_interact());
        assert!(matches!(
            transition.explanation_request(),
            Some((_, ExplanationRequest::Industrial { process: ProcessKind::Cracking, .. }))
        ));

        let cracking = transition.state;
        let blocked = reduce(&ctx, cracking.clone(), Event::ArmReactant(Reactant::Bromine));
        assert_eq!(blocked.state, cracking);
        let again = reduce(
            &ctx,
            cracking.clone(),
            Event::RunIndustrialProcess {
                kind: ProcessKind::Reforming,
                now: t0,
            },
        );
        assert_eq!(again.state, cracking);
        assert!(again.explanation_request().is_none());

        let early = reduce(&ctx, cracking.clone(), Event::Tick(t0 + Duration::from_secs(1)));
        assert!(early.state.is_cracking());
        assert_eq!(
            early.state.cracking_progress(t0 + Duration::from_secs(1), config.cracking_duration),
            Some(0.5)
        );

        let done = reduce(&ctx, cracking, Event::Tick(t0 + Duration::from_secs(2)));
        assert_eq!(done.state.mode, InteractionMode::Idle);
        assert_eq!(done.notices().next(), Some(&Notice::Info("Cracking finished.".into())));
    }

    #[test]
    fn reset_ends_cracking_early() {
        let fx = Fixture::new();
        let state = fx
            .apply(
                fx.open("propane"),
                Event::RunIndustrialProcess {
                    kind: ProcessKind::Cracking,
                    now: Instant::now(),
                },
            )
            .state;
        assert!(state.is_cracking());
        assert!(!fx.apply(state, Event::Reset).state.is_cracking());
    }

    #[test]
    fn reforming_requests_explanation_without_extended_state() {
        let fx = Fixture::new();
        let armed = fx.apply(fx.open("n-pentane"), Event::ArmReactant(Reactant::Bromine)).state;
        let transition = fx.apply(
            armed,
            Event::RunIndustrialProcess {
                kind: ProcessKind::Reforming,
                now: Instant::now(),
            },
        );
        assert_eq!(transition.state.mode, InteractionMode::Idle);
        assert_eq!(
            transition.explanation_request().unwrap().1,
            &ExplanationRequest::Industrial {
                substrate_name: "n-Pentane".into(),
                process: ProcessKind::Reforming,
            }
        );
    }

    #[test]
    fn ticks_outside_cracking_do_nothing() {
        let fx = Fixture::new();
        let state = fx.open("methane");
        let transition = fx.apply(state.clone(), Event::Tick(Instant::now()));
        assert_eq!(transition.state, state);
        assert!(transition.effects.is_empty());
        assert_eq!(state.cracking_progress(Instant::now(), Duration::from_secs(3)), None);
    }
}
