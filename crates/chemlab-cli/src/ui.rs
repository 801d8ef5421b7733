use chemlab::engine::progress::{Progress, ProgressCallback};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::warn;

#[derive(Debug)]
pub enum UiEvent {
    Progress(Progress),
    /// Show a spinner until the matching [`UiEvent::WaitFinished`].
    WaitStarted { message: String },
    WaitFinished,
}

pub struct UiManager {
    mp: Arc<MultiProgress>,
    state: BarState,
    event_receiver: mpsc::Receiver<UiEvent>,
    shutdown_receiver: watch::Receiver<bool>,
    _sentinel_bar: ProgressBar,
}

#[derive(Default)]
struct BarState {
    task_bar: Option<ProgressBar>,
    spinner: Option<ProgressBar>,
    subject: String,
}

impl UiManager {
    pub fn new() -> (Self, mpsc::Sender<UiEvent>, watch::Sender<bool>) {
        let (event_sender, event_receiver) = mpsc::channel(256);
        let (shutdown_sender, shutdown_receiver) = watch::channel(false);
        let mp = Arc::new(MultiProgress::new());
        mp.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
        let _sentinel_bar = mp.add(ProgressBar::hidden());
        let manager = Self {
            mp,
            state: BarState::default(),
            event_receiver,
            shutdown_receiver,
            _sentinel_bar,
        };

        (manager, event_sender, shutdown_sender)
    }

    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(event) = self.event_receiver.recv() => {
                    self.handle_event(event);
                }
                result = self.shutdown_receiver.changed() => {
                    if result.is_err() || *self.shutdown_receiver.borrow() {
                        break;
                    }
                }
            }
        }
        while let Ok(event) = self.event_receiver.try_recv() {
            self.handle_event(event);
        }
        self.clear_spinner();
        if let Some(bar) = self.state.task_bar.take() {
            bar.finish_and_clear();
        }
        self._sentinel_bar.finish_and_clear();
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::WaitStarted { message } => {
                self.clear_spinner();
                let pb = self.mp.add(ProgressBar::new_spinner());
                pb.enable_steady_tick(Duration::from_millis(80));
                pb.set_style(Self::spinner_style());
                pb.set_message(message);
                self.state.spinner = Some(pb);
            }
            UiEvent::WaitFinished => self.clear_spinner(),
            UiEvent::Progress(progress) => self.handle_progress(progress),
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.state.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn handle_progress(&mut self, progress: Progress) {
        match progress {
            Progress::RunStart {
                subject,
                total_steps,
            } => {
                if let Some(bar) = self.state.task_bar.take() {
                    bar.finish_and_clear();
                }
                let pb = self.mp.add(ProgressBar::new(total_steps));
                pb.set_style(Self::bar_style());
                pb.set_message(subject.clone());
                self.state.task_bar = Some(pb);
                self.state.subject = subject;
            }
            Progress::StepDone { formula, .. } => {
                if let Some(bar) = self.state.task_bar.as_ref() {
                    bar.inc(1);
                    bar.set_message(format!("{} -> {}", self.state.subject, formula));
                }
            }
            Progress::RunFinish => {
                if let Some(bar) = self.state.task_bar.take() {
                    bar.finish_and_clear();
                }
                self.mp
                    .println(format!("✓ {}", self.state.subject))
                    .ok();
                self.state.subject.clear();
            }
            Progress::Message(msg) => {
                self.mp.println(format!("  {}", msg)).ok();
            }
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<40} [{bar:30.cyan/blue}] {pos}/{len} {step_word}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "step_word",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let word = if state.len() == Some(1) { "step" } else { "steps" };
                    let _ = write!(w, "{}", word);
                },
            )
            .progress_chars("━╸ ")
    }
}

/// Cloneable handle commands use to talk to the [`UiManager`].
#[derive(Clone)]
pub struct UiHandle {
    sender: mpsc::Sender<UiEvent>,
}

impl UiHandle {
    pub fn new(sender: mpsc::Sender<UiEvent>) -> Self {
        Self { sender }
    }

    pub fn send(&self, event: UiEvent) {
        if let Err(e) = self.sender.try_send(event) {
            warn!("Failed to send update to UI channel: {}", e);
        }
    }

    pub fn wait_started(&self, message: impl Into<String>) {
        self.send(UiEvent::WaitStarted {
            message: message.into(),
        });
    }

    pub fn wait_finished(&self) {
        self.send(UiEvent::WaitFinished);
    }

    pub fn progress_callback(&self) -> ProgressCallback<'static> {
        let sender = self.sender.clone();
        Box::new(move |progress: Progress| {
            if let Err(e) = sender.try_send(UiEvent::Progress(progress)) {
                warn!("Failed to send progress update to UI channel: {}", e);
            }
        })
    }
}
