/// Systematic variations of a simulated jet.
///
/// The `smear_*` values shift the resolution scale factor while keeping the nominal
/// energy scale; the `scale_*` values apply the total energy-scale uncertainty on top of
/// the nominally smeared jet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Variations {
    pub scale_up_pt: f64,
    pub scale_down_pt: f64,
    pub scale_up_mass: f64,
    pub scale_down_mass: f64,
    pub smear_up_pt: f64,
    pub smear_down_pt: f64,
    pub smear_up_mass: f64,
    pub smear_down_mass: f64,
}

/// The calibrated output for one input jet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JetResult {
    pub corrected_pt: f64,
    pub corrected_mass: f64,
    /// The `pt` as read from the event record.
    pub uncorrected_pt: f64,
    /// The `mass` as read from the event record.
    pub uncorrected_mass: f64,
    /// Present only when processing simulation.
    pub variations: Option<Variations>,
}

/// Results for every jet of an event, aligned positionally with the input jets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventCorrections {
    pub jets: Vec<JetResult>,
}

impl EventCorrections {
    pub fn len(&self) -> usize {
        self.jets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jets.is_empty()
    }

    pub fn has_variations(&self) -> bool {
        self.jets.iter().any(|jet| jet.variations.is_some())
    }

    /// Collects one field of every jet, in input order.
    pub fn column<F>(&self, field: F) -> Vec<f64>
    where
        F: Fn(&JetResult) -> f64,
    {
        self.jets.iter().map(field).collect()
    }

    /// Collects one variation field of every jet, in input order.
    ///
    /// Returns `None` if any jet was processed without variations.
    pub fn variation_column<F>(&self, field: F) -> Option<Vec<f64>>
    where
        F: Fn(&Variations) -> f64,
    {
        self.jets
            .iter()
            .map(|jet| jet.variations.as_ref().map(&field))
            .collect()
    }
}
