use super::jet::{GenJet, RawJet};

/// Event-level scalars used as lookup inputs and as the smearing seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventContext {
    /// Median energy density of the event, the pileup proxy fed to L1 and resolution lookups.
    pub rho: f64,
    pub event: u64,
    pub run: u32,
}

/// Everything the engine needs from one event.
///
/// `gen_jets` is left empty for collision data.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub context: EventContext,
    pub jets: Vec<RawJet>,
    pub gen_jets: Vec<GenJet>,
}

impl Event {
    pub fn new(context: EventContext, jets: Vec<RawJet>) -> Self {
        Self {
            context,
            jets,
            gen_jets: Vec::new(),
        }
    }

    pub fn with_gen_jets(mut self, gen_jets: Vec<GenJet>) -> Self {
        self.gen_jets = gen_jets;
        self
    }
}
