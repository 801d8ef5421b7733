/// Milestones of a multi-step workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    RunStart { subject: String, total_steps: u64 },
    /// One step completed; `formula` is the product so far.
    StepDone { step: u64, formula: String },
    RunFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards workflow progress to an optional observer, such as a terminal progress bar.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
