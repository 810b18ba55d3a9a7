use crate::core::corrections::traits::{CorrectionInput, CorrectionSet};
use crate::core::io::columns::{Column, ColumnLayout};
use crate::core::models::event::Event;
use crate::core::models::jet::RawJet;
use crate::core::models::result::{EventCorrections, JetResult, Variations};
use crate::engine::config::CorrectionConfig;
use crate::engine::context::{CorrectionContext, ResolutionCorrections};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::energy_scale::{self, EnergyScaleResult};
use crate::engine::tasks::gen_matching;
use crate::engine::tasks::smearing::{self, ScaleFactors, SmearedKinematics};
use crate::engine::tasks::variations;
use crate::engine::utils::sampling::smearing_seed;
use tracing::{info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Corrects jets event by event with a fixed set of bound calibration capabilities.
///
/// Construction resolves every capability the configuration names, so a missing key is
/// reported before any event is touched. The corrector is immutable afterwards and can
/// be shared between threads.
#[derive(Debug)]
pub struct JetCorrector {
    context: CorrectionContext,
    layout: ColumnLayout,
}

impl JetCorrector {
    pub fn new<S>(set: &S, config: &CorrectionConfig) -> Result<Self, EngineError>
    where
        S: CorrectionSet + ?Sized,
    {
        Ok(Self {
            context: CorrectionContext::bind(set, config)?,
            layout: config.layout.clone(),
        })
    }

    pub fn context(&self) -> &CorrectionContext {
        &self.context
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Corrects a single jet of `event`.
    pub fn correct_jet(&self, jet: &RawJet, event: &Event) -> Result<JetResult, EngineError> {
        let energy = energy_scale::run(jet, &event.context, &self.context.energy_scale)?;

        let (corrected_pt, corrected_mass, variations) = match &self.context.resolution {
            Some(resolution) => {
                let (smeared, variations) = smear(jet, event, &energy, resolution)?;
                (smeared.pt, smeared.mass, Some(variations))
            }
            None => (energy.pt_jec, energy.mass_jec, None),
        };

        Ok(JetResult {
            corrected_pt,
            corrected_mass,
            uncorrected_pt: jet.pt,
            uncorrected_mass: jet.mass,
            variations,
        })
    }

    /// Corrects every jet of `event`, preserving input order.
    ///
    /// The first failing jet aborts the event; no partial result is returned.
    #[instrument(
        level = "debug",
        skip_all,
        name = "correct_event",
        fields(event = event.context.event, run = event.context.run, jets = event.jets.len())
    )]
    pub fn correct_event(&self, event: &Event) -> Result<EventCorrections, EngineError> {
        #[cfg(not(feature = "parallel"))]
        let iterator = event.jets.iter();

        #[cfg(feature = "parallel")]
        let iterator = event.jets.par_iter();

        let jets = iterator
            .map(|jet| self.correct_jet(jet, event))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventCorrections { jets })
    }

    /// Corrects a batch of events in order, reporting progress after each one.
    ///
    /// A failure is tagged with the event and run number of the offending event and
    /// stops the batch.
    #[instrument(skip_all, name = "correction_workflow", fields(events = events.len()))]
    pub fn correct_events(
        &self,
        events: &[Event],
        reporter: &ProgressReporter,
    ) -> Result<Vec<EventCorrections>, EngineError> {
        reporter.report(Progress::BatchStart {
            total_events: events.len() as u64,
        });
        info!(
            events = events.len(),
            mode = ?self.context.mode,
            "Starting jet correction batch."
        );

        let mut results = Vec::with_capacity(events.len());
        for (index, event) in events.iter().enumerate() {
            let corrections = self
                .correct_event(event)
                .map_err(|source| EngineError::Event {
                    event: event.context.event,
                    run: event.context.run,
                    source: Box::new(source),
                })?;

            reporter.report(Progress::EventFinish {
                index,
                jets: corrections.len(),
            });
            results.push(corrections);
        }

        reporter.report(Progress::BatchFinish);
        info!(
            jets = results.iter().map(EventCorrections::len).sum::<usize>(),
            "Jet correction batch complete."
        );
        Ok(results)
    }

    /// Renders the corrections of one event into the configured output columns.
    pub fn columns(&self, corrections: &EventCorrections) -> Vec<Column> {
        self.layout.render(corrections)
    }
}

fn smear(
    jet: &RawJet,
    event: &Event,
    energy: &EnergyScaleResult,
    corrections: &ResolutionCorrections,
) -> Result<(SmearedKinematics, Variations), EngineError> {
    let pt_jec = energy.pt_jec;

    let resolution = corrections.resolution.evaluate(&[
        CorrectionInput::Real(jet.eta),
        CorrectionInput::Real(pt_jec),
        CorrectionInput::Real(event.context.rho),
    ])?;

    let matched =
        gen_matching::find_match(jet.eta, jet.phi, pt_jec, resolution, &event.gen_jets);
    trace!(?matched, resolution, pt_jec, "Generator-level match.");

    let scale_factors = ScaleFactors::evaluate(&corrections.scale_factor, jet.eta, pt_jec)?;
    let seed = smearing_seed(event.context.event, jet.eta);
    let factors = smearing::smear_factors(
        pt_jec,
        matched.map(|m| m.pt),
        resolution,
        scale_factors,
        seed,
    )?;
    let smeared = factors.apply(pt_jec, energy.mass_jec);

    let uncertainty =
        variations::total_uncertainty(&corrections.total_uncertainty, jet.eta, pt_jec)?;

    Ok((smeared, variations::propagate(&smeared, uncertainty)))
}
