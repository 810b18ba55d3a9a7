use crate::core::models::result::{EventCorrections, JetResult, Variations};
use serde::Deserialize;

/// A named output column, one value per input jet.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Naming of the output columns written back to the event record.
///
/// With `overwrite_pt` the nominal result replaces `{collection}_pt`/`{collection}_mass`
/// and the inputs are preserved under `{collection}_uncorrected_*`; otherwise the result
/// is written to `{collection}_corrected_*` and the inputs are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ColumnLayout {
    pub collection: String,
    pub overwrite_pt: bool,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            collection: "Jet".to_string(),
            overwrite_pt: false,
        }
    }
}

type NominalField = fn(&JetResult) -> f64;
type VariationField = fn(&Variations) -> f64;

const OVERWRITE_FIELDS: [(&str, NominalField); 4] = [
    ("pt", |j| j.corrected_pt),
    ("mass", |j| j.corrected_mass),
    ("uncorrected_pt", |j| j.uncorrected_pt),
    ("uncorrected_mass", |j| j.uncorrected_mass),
];

const CORRECTED_FIELDS: [(&str, NominalField); 2] = [
    ("corrected_pt", |j| j.corrected_pt),
    ("corrected_mass", |j| j.corrected_mass),
];

const VARIATION_FIELDS: [(&str, VariationField); 8] = [
    ("scaleUp_pt", |v| v.scale_up_pt),
    ("scaleDn_pt", |v| v.scale_down_pt),
    ("scaleUp_mass", |v| v.scale_up_mass),
    ("scaleDn_mass", |v| v.scale_down_mass),
    ("smearUp_pt", |v| v.smear_up_pt),
    ("smearDn_pt", |v| v.smear_down_pt),
    ("smearUp_mass", |v| v.smear_up_mass),
    ("smearDn_mass", |v| v.smear_down_mass),
];

impl ColumnLayout {
    pub fn new(collection: impl Into<String>, overwrite_pt: bool) -> Self {
        Self {
            collection: collection.into(),
            overwrite_pt,
        }
    }

    fn column_name(&self, suffix: &str) -> String {
        format!("{}_{}", self.collection, suffix)
    }

    fn nominal_fields(&self) -> &'static [(&'static str, NominalField)] {
        if self.overwrite_pt {
            &OVERWRITE_FIELDS
        } else {
            &CORRECTED_FIELDS
        }
    }

    /// Names of every column this layout produces, for declaring output branches up front.
    pub fn column_names(&self, with_variations: bool) -> Vec<String> {
        let nominal = self.nominal_fields().iter().map(|(suffix, _)| *suffix);
        let variations = VARIATION_FIELDS
            .iter()
            .filter(|_| with_variations)
            .map(|(suffix, _)| *suffix);
        nominal
            .chain(variations)
            .map(|suffix| self.column_name(suffix))
            .collect()
    }

    /// Renders the results of one event into columns, in the order of [`Self::column_names`].
    ///
    /// Variation columns are emitted only if every jet carries variations.
    pub fn render(&self, corrections: &EventCorrections) -> Vec<Column> {
        let mut columns: Vec<Column> = self
            .nominal_fields()
            .iter()
            .map(|&(suffix, field)| Column {
                name: self.column_name(suffix),
                values: corrections.column(field),
            })
            .collect();

        if corrections.has_variations() {
            for (suffix, field) in VARIATION_FIELDS {
                if let Some(values) = corrections.variation_column(field) {
                    columns.push(Column {
                        name: self.column_name(suffix),
                        values,
                    });
                }
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(pt: f64, variations: Option<Variations>) -> JetResult {
        JetResult {
            corrected_pt: pt * 1.1,
            corrected_mass: 5.5,
            uncorrected_pt: pt,
            uncorrected_mass: 5.0,
            variations,
        }
    }

    fn variations(offset: f64) -> Variations {
        Variations {
            scale_up_pt: offset + 1.0,
            scale_down_pt: offset + 2.0,
            scale_up_mass: offset + 3.0,
            scale_down_mass: offset + 4.0,
            smear_up_pt: offset + 5.0,
            smear_down_pt: offset + 6.0,
            smear_up_mass: offset + 7.0,
            smear_down_mass: offset + 8.0,
        }
    }

    #[test]
    fn default_layout_writes_corrected_columns_only() {
        let layout = ColumnLayout::default();
        assert_eq!(
            layout.column_names(false),
            vec!["Jet_corrected_pt", "Jet_corrected_mass"]
        );
    }

    #[test]
    fn overwrite_layout_keeps_uncorrected_inputs() {
        let layout = ColumnLayout::new("FatJet", true);
        assert_eq!(
            layout.column_names(false),
            vec![
                "FatJet_pt",
                "FatJet_mass",
                "FatJet_uncorrected_pt",
                "FatJet_uncorrected_mass"
            ]
        );
    }

    #[test]
    fn variation_columns_follow_nominal_ones() {
        let names = ColumnLayout::default().column_names(true);
        assert_eq!(names.len(), 10);
        assert_eq!(names[2], "Jet_scaleUp_pt");
        assert_eq!(names[9], "Jet_smearDn_mass");
    }

    #[test]
    fn render_preserves_jet_order() {
        let corrections = EventCorrections {
            jets: vec![result(30.0, None), result(20.0, None), result(40.0, None)],
        };
        let columns = ColumnLayout::new("Jet", true).render(&corrections);

        assert_eq!(columns.len(), 4);
        assert_eq!(columns[2].name, "Jet_uncorrected_pt");
        assert_eq!(columns[2].values, vec![30.0, 20.0, 40.0]);
    }

    #[test]
    fn render_emits_variation_columns_for_simulation() {
        let corrections = EventCorrections {
            jets: vec![
                result(30.0, Some(variations(0.0))),
                result(20.0, Some(variations(10.0))),
            ],
        };
        let layout = ColumnLayout::default();
        let columns = layout.render(&corrections);

        let names: Vec<_> = columns.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, layout.column_names(true));
        assert_eq!(columns[3].values, vec![2.0, 12.0]);
        assert_eq!(columns[9].values, vec![8.0, 18.0]);
    }

    #[test]
    fn render_of_empty_event_produces_empty_columns() {
        let columns = ColumnLayout::default().render(&EventCorrections::default());
        assert_eq!(columns.len(), 2);
        assert!(columns.iter().all(|c| c.values.is_empty()));
    }
}
