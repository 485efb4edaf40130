use anyhow::{anyhow, Result};
use itertools::{iproduct, Itertools};
use lab::{rgbs_to_labs, Lab};
use serde::{Deserialize, Serialize};
use string_builder::Builder;

use crate::color::Color;
use crate::cvd::{self, DeficiencyType};
use crate::util::{format_hex_color, parse_hex_color};

/// An ordered set of sRGB colors, as used for categorical color cycles.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Palette {
        Palette { colors }
    }

    pub fn from_hex_strings(hex: &[&str]) -> Result<Palette> {
        let mut colors = Vec::with_capacity(hex.len());
        for h in hex {
            let (r, g, b) = parse_hex_color(h)?;
            colors.push(Color::from_srgb8(r, g, b));
        }
        Ok(Palette { colors })
    }

    /// Parse a space-separated line of hex colors, the format color set
    /// files store one set per line in.
    pub fn from_set_line(line: &str) -> Result<Palette> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            Err(anyhow!("Empty color set line"))
        } else {
            Palette::from_hex_strings(&parts)
        }
    }

    pub fn to_hex_strings(&self) -> Result<Vec<String>> {
        let mut hex = Vec::with_capacity(self.colors.len());
        for color in &self.colors {
            hex.push(format_hex_color(color.to_rgb8()?));
        }
        Ok(hex)
    }

    pub fn to_set_line(&self) -> Result<String> {
        let mut b = Builder::default();
        self.to_hex_strings()?.into_iter().for_each(|h| {
            b.append(format!("{} ", h));
        });

        let mut s = b.string()?;
        if !s.is_empty() {
            s.remove(s.len() - 1);
        }
        Ok(s)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Simulate the whole set under one deficiency and severity. The
    /// transform matrix is derived once for the set.
    pub fn simulate(&self, deficiency: DeficiencyType, severity: i32) -> Result<Palette> {
        let m = cvd::deficiency_matrix(deficiency, severity)?;
        let mut colors = Vec::with_capacity(self.colors.len());
        for color in &self.colors {
            colors.push(cvd::simulate_with_matrix(color, &m)?);
        }
        Ok(Palette { colors })
    }

    /// CIELAB values of the set, quantized through the 8-bit display
    /// representation.
    pub fn labs(&self) -> Result<Vec<Lab>> {
        let mut rgbs = Vec::with_capacity(self.colors.len());
        for color in &self.colors {
            let (r, g, b) = color.to_rgb8()?;
            rgbs.push([r, g, b]);
        }
        Ok(rgbs_to_labs(&rgbs))
    }

    /// Order the set by hue, then chroma, then luminance. Hue is the raw
    /// `atan2(b, a)` angle in CIELAB, so the ordering starts in the blue
    /// quadrant rather than at the red axis.
    pub fn sort_hue_chroma_luminance(&self) -> Result<Palette> {
        let labs = self.labs()?;

        let mut keyed: Vec<((f64, f64, f64), Color)> = labs
            .iter()
            .zip(self.colors.iter())
            .map(|(lab, color)| {
                let hue = (lab.b as f64).atan2(lab.a as f64);
                let chroma = ((lab.a as f64).powi(2) + (lab.b as f64).powi(2)).sqrt();
                ((hue, chroma, lab.l as f64), *color)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(Palette {
            colors: keyed.into_iter().map(|(_, color)| color).collect(),
        })
    }

    /// Minimum pairwise CIELAB distance across the whole simulation sweep:
    /// every deficiency type at every severity from 1 to `max_severity`
    /// inclusive. Color sets that keep this distance high stay
    /// distinguishable for anomalous trichromats of any severity.
    pub fn min_simulated_distance(&self, max_severity: i32) -> Result<f64> {
        if self.colors.len() < 2 {
            return Err(anyhow!("Color set requires at least two colors"));
        } else if max_severity < 1 {
            return Err(anyhow!("Invalid severity sweep limit: {}", max_severity));
        }

        let types = [
            DeficiencyType::Protanomaly,
            DeficiencyType::Deuteranomaly,
            DeficiencyType::Tritanomaly,
        ];

        let mut min_dist = f64::MAX;
        for (deficiency, severity) in iproduct!(types.iter(), 1..=max_severity) {
            let labs = self.simulate(*deficiency, severity)?.labs()?;
            for (a, b) in labs.iter().tuple_combinations() {
                min_dist = min_dist.min(delta_e(a, b));
            }
        }
        Ok(min_dist)
    }
}

/// Euclidean distance in CIELAB (CIE76 delta E).
fn delta_e(a: &Lab, b: &Lab) -> f64 {
    let dl = (a.l - b.l) as f64;
    let da = (a.a - b.a) as f64;
    let db = (a.b - b.b) as f64;
    (dl * dl + da * da + db * db).sqrt()
}

/// One simulated color set, in the shape survey data files record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub deficiency: DeficiencyType,
    pub severity: i32,
    pub colors: Vec<String>,
}

impl SimulationRecord {
    pub fn new(
        palette: &Palette,
        deficiency: DeficiencyType,
        severity: i32,
    ) -> Result<SimulationRecord> {
        let simulated = palette.simulate(deficiency, severity)?;
        Ok(SimulationRecord {
            deficiency,
            severity,
            colors: simulated.to_hex_strings()?,
        })
    }

    pub fn to_palette(&self) -> Result<Palette> {
        let parts: Vec<&str> = self.colors.iter().map(|s| s.as_str()).collect();
        Palette::from_hex_strings(&parts)
    }
}
