/// Notifications emitted while a batch of events is corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    BatchStart { total_events: u64 },
    /// The event at `index` in the batch was corrected; `jets` results were produced.
    EventFinish { index: usize, jets: usize },
    BatchFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] notifications to an optional caller-supplied callback.
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
