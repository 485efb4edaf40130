mod machado;

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorConverter, ColorSpaceType, Rgb2sRgbConverter, SRgb2RgbConverter};
use crate::matrix::Matrix;

/// Anomalous trichromacy models, by affected cone type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeficiencyType {
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
}

impl DeficiencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeficiencyType::Protanomaly => "protanomaly",
            DeficiencyType::Deuteranomaly => "deuteranomaly",
            DeficiencyType::Tritanomaly => "tritanomaly",
        }
    }
}

impl fmt::Display for DeficiencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeficiencyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "protanomaly" => Ok(DeficiencyType::Protanomaly),
            "deuteranomaly" => Ok(DeficiencyType::Deuteranomaly),
            "tritanomaly" => Ok(DeficiencyType::Tritanomaly),
            _ => Err(anyhow!("Unrecognized deficiency type: {}", s)),
        }
    }
}

fn decile_matrix(deficiency: DeficiencyType, decile: usize) -> Matrix {
    let table = match deficiency {
        DeficiencyType::Protanomaly => &machado::PROTANOMALY,
        DeficiencyType::Deuteranomaly => &machado::DEUTERANOMALY,
        DeficiencyType::Tritanomaly => &machado::TRITANOMALY,
    };
    Matrix::new_from_array(&table[decile])
}

/// Transform matrix for a deficiency at an integer percent severity.
/// Severities between tabulated deciles interpolate each coefficient
/// linearly; severities at or above 100 use the complete-dichromacy matrix
/// directly. Negative severities are rejected.
pub fn deficiency_matrix(deficiency: DeficiencyType, severity: i32) -> Result<Matrix> {
    if severity < 0 {
        return Err(anyhow!("Invalid severity: {}", severity));
    } else if severity >= 100 {
        return Ok(decile_matrix(deficiency, 10));
    }

    let fraction = severity % 10;
    let low = (severity / 10) as usize;
    let low_matrix = decile_matrix(deficiency, low);
    if fraction == 0 {
        return Ok(low_matrix);
    }

    let high_matrix = decile_matrix(deficiency, low + 1);
    Ok(low_matrix.lerp(&high_matrix, fraction as f64 / 10.0))
}

/// Simulate how an sRGB color appears under a color vision deficiency at
/// the given percent severity (0 = normal vision, 100 = dichromacy).
///
/// The color is gamma-decoded to linear light, mixed through the severity
/// matrix, and re-encoded. Outputs can land outside the 0-255 display
/// range for saturated inputs; `Color::to_rgb8` clips them.
pub fn simulate(color: &Color, deficiency: DeficiencyType, severity: i32) -> Result<Color> {
    let m = deficiency_matrix(deficiency, severity)?;
    simulate_with_matrix(color, &m)
}

/// Run the simulation pipeline with a precomputed transform matrix. Batch
/// callers derive the matrix once with `deficiency_matrix` and apply it
/// across many colors.
pub fn simulate_with_matrix(color: &Color, matrix: &Matrix) -> Result<Color> {
    if color.space != ColorSpaceType::sRGB {
        return Err(anyhow!(
            "Cannot simulate, invalid input colorspace: {:?}",
            color.space
        ));
    }

    let linear = SRgb2RgbConverter::new().convert(color)?;
    let mixed = Color {
        value: matrix.multiply_vector(&linear.value),
        space: ColorSpaceType::RGB,
    };
    Rgb2sRgbConverter::new().convert(&mixed)
}
