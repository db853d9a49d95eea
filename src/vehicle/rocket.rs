use serde::{Deserialize, Serialize};

use crate::constants::{
    NOSE_NORMAL_FORCE_COEFFICIENT, NOSE_PRESSURE_FACTOR_CONE, NOSE_PRESSURE_FACTOR_OGIVE,
};
use crate::errors::RocketryError;

/// A rocket exactly as the user entered it: decimal strings in
/// centimeters and grams. This is the shape the storage layer persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketRecord {
    pub id: String,
    pub name: String,
    pub dry_mass_g: String,
    pub length_cm: String,
    pub diameter_cm: String,
    pub nose_cone_type: NoseConeType,
    pub nose_cone_length_cm: String,
    pub cog_cm: String,
    pub num_fins: String,
    pub fin_root_chord_cm: String,
    pub fin_tip_chord_cm: String,
    pub fin_semi_span_cm: String,
    pub fin_sweep_dist_cm: String,
    pub nose_to_fin_dist_cm: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoseConeType {
    Ogive,
    Cone,
}

impl NoseConeType {
    /// Fraction of the nose-cone length at which its center of pressure sits.
    pub fn pressure_factor(&self) -> f64 {
        match self {
            NoseConeType::Cone => NOSE_PRESSURE_FACTOR_CONE,
            NoseConeType::Ogive => NOSE_PRESSURE_FACTOR_OGIVE,
        }
    }
}

/// Validated rocket dimensions in SI units, derived once from a
/// `RocketRecord` and immutable afterwards. All lengths are meters from
/// the nose tip, masses are kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketGeometry {
    pub dry_mass: f64,
    pub diameter: f64,
    pub radius: f64,
    pub nose_cone_type: NoseConeType,
    pub nose_cone_length: f64,
    pub center_of_gravity: f64,
    pub num_fins: u32,
    pub fin_root_chord: f64,
    pub fin_tip_chord: f64,
    pub fin_semi_span: f64,
    pub fin_sweep_dist: f64,
    pub nose_to_fin_dist: f64,
    pub fin_mid_chord_length: f64,
}

fn parse_dimension(field: &str, value: &str) -> Result<f64, RocketryError> {
    value.trim().parse::<f64>().map_err(|_| {
        RocketryError::InvalidGeometry(format!(
            "field `{}` is not a number: `{}`",
            field,
            value.trim()
        ))
    })
}

impl RocketGeometry {
    pub fn try_from_record(record: &RocketRecord) -> Result<Self, RocketryError> {
        let dry_mass = parse_dimension("dry_mass_g", &record.dry_mass_g)? / 1000.0;
        let diameter = parse_dimension("diameter_cm", &record.diameter_cm)? / 100.0;
        let nose_cone_length =
            parse_dimension("nose_cone_length_cm", &record.nose_cone_length_cm)? / 100.0;
        let center_of_gravity = parse_dimension("cog_cm", &record.cog_cm)? / 100.0;
        let num_fins = record.num_fins.trim().parse::<u32>().map_err(|_| {
            RocketryError::InvalidGeometry(format!(
                "field `num_fins` is not a whole number: `{}`",
                record.num_fins.trim()
            ))
        })?;
        let fin_root_chord =
            parse_dimension("fin_root_chord_cm", &record.fin_root_chord_cm)? / 100.0;
        let fin_tip_chord = parse_dimension("fin_tip_chord_cm", &record.fin_tip_chord_cm)? / 100.0;
        let fin_semi_span = parse_dimension("fin_semi_span_cm", &record.fin_semi_span_cm)? / 100.0;
        let fin_sweep_dist =
            parse_dimension("fin_sweep_dist_cm", &record.fin_sweep_dist_cm)? / 100.0;
        let nose_to_fin_dist =
            parse_dimension("nose_to_fin_dist_cm", &record.nose_to_fin_dist_cm)? / 100.0;

        if diameter <= 0.0 {
            return Err(RocketryError::InvalidGeometry(
                "diameter must be greater than zero".to_string(),
            ));
        }
        let radius = diameter / 2.0;
        if fin_root_chord + fin_tip_chord <= 0.0 {
            return Err(RocketryError::InvalidGeometry(
                "root chord + tip chord must be greater than zero".to_string(),
            ));
        }
        if fin_semi_span + radius <= 0.0 {
            return Err(RocketryError::InvalidGeometry(
                "fin semi-span + body radius must be greater than zero".to_string(),
            ));
        }

        let fin_mid_chord_length = Self::calculate_mid_chord_length(
            fin_root_chord,
            fin_tip_chord,
            fin_semi_span,
            fin_sweep_dist,
        );

        Ok(RocketGeometry {
            dry_mass,
            diameter,
            radius,
            nose_cone_type: record.nose_cone_type,
            nose_cone_length,
            center_of_gravity,
            num_fins,
            fin_root_chord,
            fin_tip_chord,
            fin_semi_span,
            fin_sweep_dist,
            nose_to_fin_dist,
            fin_mid_chord_length,
        })
    }

    /// Distance between the midpoints of the root and tip chords. The tip
    /// midpoint is offset spanwise by the semi-span and chordwise by the
    /// sweep distance.
    fn calculate_mid_chord_length(
        fin_root_chord: f64,
        fin_tip_chord: f64,
        fin_semi_span: f64,
        fin_sweep_dist: f64,
    ) -> f64 {
        let chordwise_offset = fin_tip_chord / 2.0 + fin_sweep_dist - fin_root_chord / 2.0;
        fin_semi_span.hypot(chordwise_offset)
    }

    /// Center of pressure, in meters from the nose tip, via the Barrowman
    /// closed-form approximation (nose and fins only; body tube lift is
    /// neglected as usual for subsonic sport rockets).
    pub fn center_of_pressure(&self) -> f64 {
        let cn_nose = NOSE_NORMAL_FORCE_COEFFICIENT;
        let cp_nose = self.nose_cone_type.pressure_factor() * self.nose_cone_length;

        let interference = 1.0 + self.radius / (self.fin_semi_span + self.radius);
        let chord_sum = self.fin_root_chord + self.fin_tip_chord;
        let cn_fins = interference
            * (4.0 * self.num_fins as f64 * (self.fin_semi_span / self.diameter).powi(2))
            / (1.0 + (1.0 + (2.0 * self.fin_mid_chord_length / chord_sum).powi(2)).sqrt());

        let sweep_term = self.fin_sweep_dist / 3.0
            * (self.fin_root_chord + 2.0 * self.fin_tip_chord)
            / chord_sum;
        let taper_term =
            (chord_sum - self.fin_root_chord * self.fin_tip_chord / chord_sum) / 6.0;
        let cp_fins = self.nose_to_fin_dist + sweep_term + taper_term;

        (cn_nose * cp_nose + cn_fins * cp_fins) / (cn_nose + cn_fins)
    }
}
