//! Interactive lab session on the terminal.
//!
//! Lines read from the input are parsed into [`LabCommand`]s and turned into session
//! events. Explanations are fetched on background tasks and come back through a
//! channel tagged with the generation that requested them, so answers that arrive
//! after the user moved on are dropped by the reducer.

use super::CommandContext;
use crate::cli::LabArgs;
use crate::display;
use crate::error::{CliError, Result};
use crate::explainer::Explainer;
use crate::ui::UiHandle;
use chemlab::core::catalog::CategoryFilter;
use chemlab::core::formula::to_subscript;
use chemlab::core::models::atom::Reactant;
use chemlab::core::models::ids::MoleculeId;
use chemlab::core::scene::Scene;
use chemlab::engine::context::SessionContext;
use chemlab::engine::error::WorkflowError;
use chemlab::engine::explain::{ExplanationRequest, ProcessKind};
use chemlab::engine::session::{
    Effect, Event, InteractionMode, Notice, SessionState, reduce,
};
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

const HELP: &str = "\
Commands:
  list [TEXT]        list molecules, optionally filtered by name or formula
  select <MOLECULE>  switch to another molecule
  arm <cl|br>        choose the halogen for the next substitution
  click <ATOM>       substitute a hydrogen atom with the armed halogen
  atoms              show the atoms and bonds of the working model
  reset              restore the selected molecule
  crack | reform     run an industrial process on the molecule
  status             show the current molecule, formula and mode
  help               show this help
  quit               leave the lab";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabCommand {
    Help,
    List(String),
    Select(String),
    Arm(Reactant),
    Click(String),
    Atoms,
    Reset,
    Process(ProcessKind),
    Status,
    Quit,
}

impl FromStr for LabCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();
        let argument = |usage: &str| -> std::result::Result<String, String> {
            match rest.as_slice() {
                [value] => Ok(value.to_string()),
                _ => Err(format!("Usage: {usage}")),
            }
        };

        match command.as_str() {
            "help" | "?" => Ok(LabCommand::Help),
            "list" | "ls" => Ok(LabCommand::List(rest.join(" "))),
            "select" | "use" => argument("select <MOLECULE>").map(LabCommand::Select),
            "arm" => {
                let value = argument("arm <cl|br>")?;
                value
                    .parse()
                    .map(LabCommand::Arm)
                    .map_err(|e| format!("{e}"))
            }
            "click" => argument("click <ATOM>").map(LabCommand::Click),
            "atoms" => Ok(LabCommand::Atoms),
            "reset" => Ok(LabCommand::Reset),
            "crack" => Ok(LabCommand::Process(ProcessKind::Cracking)),
            "reform" => Ok(LabCommand::Process(ProcessKind::Reforming)),
            "process" => {
                let value = argument("process <cracking|reforming>")?;
                value
                    .parse()
                    .map(LabCommand::Process)
                    .map_err(|e| format!("{e}"))
            }
            "status" => Ok(LabCommand::Status),
            "quit" | "exit" | "q" => Ok(LabCommand::Quit),
            other => Err(format!("Unknown command '{other}'. Type 'help' for a list.")),
        }
    }
}

pub async fn run(args: LabArgs, ctx: &CommandContext) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_session(ctx, args.molecule.as_deref(), input, std::io::stdout()).await
}

/// Drives a lab session from `input` until it ends or the user quits.
pub async fn run_session<R, W>(
    ctx: &CommandContext,
    molecule: Option<&str>,
    input: R,
    out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (mut lab, mut answers) = Lab::open(ctx, molecule, out)?;
    info!("Lab session started on '{}'.", lab.state.molecule_id);
    lab.prompt()?;

    let mut lines = input.lines();
    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !lab.handle_line(&line)? {
                    break;
                }
                lab.prompt()?;
            }
            Some((generation, text)) = answers.recv() => {
                lab.receive_explanation(generation, text)?;
            }
            _ = ticker.tick(), if lab.state.is_cracking() => {
                lab.apply(Event::Tick(Instant::now()))?;
            }
        }
    }

    lab.stop_spinner();
    info!("Lab session ended.");
    Ok(())
}

struct Lab<'a, W: Write> {
    ctx: SessionContext<'a>,
    state: SessionState,
    explainer: Arc<dyn Explainer>,
    ui: UiHandle,
    responses: mpsc::Sender<(u64, String)>,
    spinner_active: bool,
    out: W,
}

impl<'a, W: Write> Lab<'a, W> {
    /// Opens the session and issues its first explanation request.
    fn open(
        ctx: &'a CommandContext,
        molecule: Option<&str>,
        out: W,
    ) -> Result<(Self, mpsc::Receiver<(u64, String)>)> {
        let session_ctx = SessionContext::new(ctx.catalog, &ctx.config.session);
        let opened = SessionState::open(&session_ctx, molecule).ok_or_else(|| {
            WorkflowError::UnknownMolecule(molecule.unwrap_or_default().to_string())
        })?;

        let (responses, answers) = mpsc::channel(16);
        let mut lab = Lab {
            ctx: session_ctx,
            state: opened.state,
            explainer: Arc::clone(&ctx.explainer),
            ui: ctx.ui.clone(),
            responses,
            spinner_active: false,
            out,
        };
        writeln!(lab.out, "Hydrocarbon Lab. Type 'help' for commands.")?;
        lab.print_status()?;
        lab.handle_effects(opened.effects)?;
        Ok((lab, answers))
    }

    /// Returns `false` once the user asked to leave.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }
        let command = match line.parse::<LabCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(self.out, "! {}", message)?;
                return Ok(true);
            }
        };
        debug!("Lab command: {:?}", command);

        match command {
            LabCommand::Help => writeln!(self.out, "{}", HELP)?,
            LabCommand::List(query) => {
                let molecules = self.ctx.catalog.filter(&query, CategoryFilter::All);
                if molecules.is_empty() {
                    writeln!(self.out, "No molecules match '{}'.", query)?;
                } else {
                    write!(self.out, "{}", display::molecule_table(&molecules))?;
                }
            }
            LabCommand::Select(id) => {
                let previous = self.state.molecule_id.clone();
                self.apply(Event::SelectMolecule(MoleculeId::from(id)))?;
                if self.state.molecule_id != previous {
                    self.print_status()?;
                }
            }
            LabCommand::Arm(reactant) => self.apply(Event::ArmReactant(reactant))?,
            LabCommand::Click(atom_id) => self.click(atom_id)?,
            LabCommand::Atoms => {
                let scene = self.scene();
                write!(self.out, "{}", display::atom_lines(&self.state.working_atoms))?;
                write!(self.out, "{}", display::scene_lines(&scene))?;
            }
            LabCommand::Reset => self.apply(Event::Reset)?,
            LabCommand::Process(kind) => self.apply(Event::RunIndustrialProcess {
                kind,
                now: Instant::now(),
            })?,
            LabCommand::Status => self.print_status()?,
            LabCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn scene(&self) -> Scene {
        Scene::build(&self.state.working_atoms, self.state.scene_options())
    }

    fn click(&mut self, atom_id: String) -> Result<()> {
        let scene = self.scene();
        if !scene.accepts_clicks() {
            let hint = if self.state.is_cracking() {
                "Cracking is in progress; wait for it to finish."
            } else {
                "Arm a reactant first (arm cl | arm br)."
            };
            writeln!(self.out, "! {}", hint)?;
            return Ok(());
        }
        match scene.click(&atom_id) {
            Some(click) => {
                debug!("Clicked {} atom '{}'.", click.atom_type, click.atom_id);
                self.apply(Event::ClickAtom(click.atom_id))
            }
            None => {
                writeln!(self.out, "! No atom '{}' in {}.", atom_id, self.state.molecule_name)?;
                Ok(())
            }
        }
    }

    fn apply(&mut self, event: Event) -> Result<()> {
        let transition = reduce(&self.ctx, self.state.clone(), event);
        self.state = transition.state;
        self.handle_effects(transition.effects)?;
        if !self.state.explanation_pending {
            self.stop_spinner();
        }
        Ok(())
    }

    fn stop_spinner(&mut self) {
        if self.spinner_active {
            self.ui.wait_finished();
            self.spinner_active = false;
        }
    }

    fn handle_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Notice(Notice::Info(message)) => writeln!(self.out, "» {}", message)?,
                Effect::Notice(Notice::Warning(message)) => writeln!(self.out, "! {}", message)?,
                Effect::Explain {
                    generation,
                    request,
                } => self.request_explanation(generation, request),
            }
        }
        Ok(())
    }

    fn request_explanation(&mut self, generation: u64, request: ExplanationRequest) {
        self.ui
            .wait_started(format!("Asking about {}...", request.subject()));
        self.spinner_active = true;
        let explainer = Arc::clone(&self.explainer);
        let responses = self.responses.clone();
        tokio::spawn(async move {
            let text = explainer.explain(&request).await;
            if responses.send((generation, text)).await.is_err() {
                debug!("Lab closed before explanation {} arrived.", generation);
            }
        });
    }

    fn receive_explanation(&mut self, generation: u64, text: String) -> Result<()> {
        if self.state.is_stale(generation) {
            debug!("Discarding explanation for generation {}.", generation);
            return Ok(());
        }
        self.apply(Event::ExplanationReady { generation, text })?;
        if let Some(text) = self.state.explanation.as_deref() {
            writeln!(self.out)?;
            write!(self.out, "{}", display::explanation_block(text))?;
        }
        self.prompt()
    }

    fn print_status(&mut self) -> Result<()> {
        let mode = match self.state.mode {
            InteractionMode::Idle => "idle".to_string(),
            InteractionMode::ReactantArmed(reactant) => format!("{} armed", reactant),
            InteractionMode::CrackingInProgress { .. } => {
                let progress = self
                    .state
                    .cracking_progress(Instant::now(), self.ctx.config.cracking_duration)
                    .unwrap_or_default();
                format!("cracking ({:.0}%)", progress * 100.0)
            }
        };
        writeln!(
            self.out,
            "{} [{}] {}",
            self.state.molecule_name,
            to_subscript(&self.state.formula),
            mode
        )?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "lab> ")?;
        self.out.flush().map_err(CliError::Io)
    }
}
