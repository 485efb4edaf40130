use anyhow::{anyhow, Result};

use crate::matrix::Matrix;
use crate::util::clamp_channel;
use crate::vector::Vector;

#[allow(non_camel_case_types)]
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum ColorSpaceType {
    sRGB, // Gamma-encoded, nominal 0-255
    RGB,  // Linear light, nominal 0-1
    XYZ,  // CIE XYZ (D65), 0-100 scale
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub value: Vector,
    pub space: ColorSpaceType,
}

impl Color {
    pub fn new(value: Vector, space: ColorSpaceType) -> Color {
        Color { value, space }
    }

    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            value: Vector::new(r as f64, g as f64, b as f64),
            space: ColorSpaceType::sRGB,
        }
    }

    /// Quantize to 8-bit display channels, rounding and clamping to 0-255.
    /// Simulation can push channels outside the display range; this is the
    /// one place they get clipped.
    pub fn to_rgb8(&self) -> Result<(u8, u8, u8)> {
        if self.space != ColorSpaceType::sRGB {
            Err(anyhow!(
                "Cannot quantize, invalid input colorspace: {:?}",
                self.space
            ))
        } else {
            Ok((
                clamp_channel(self.value.x),
                clamp_channel(self.value.y),
                clamp_channel(self.value.z),
            ))
        }
    }
}

///////////////////////////////
/// sRGB transfer function (IEC 61966-2-1)
///////////////////////////////

/// Decode one gamma-encoded channel, given on the 0-1 scale, to linear
/// light.
pub fn srgb_decode_channel(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel to the gamma-encoded 0-1 scale.
/// Negative linear values are clamped to zero ahead of the fractional
/// power, which is undefined for them.
pub fn srgb_encode_channel(linear: f64) -> f64 {
    let linear = linear.max(0.0);
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

// Inverse of the IEC 61966-2-1 XYZ to linear sRGB matrix, to nine
// significant digits. Scaled to the 0-100 XYZ range on application.
#[rustfmt::skip]
const RGB_TO_XYZ: [f64; 9] = [
    0.412395589, 0.357583431, 0.180492647,
    0.212586231, 0.715170304, 0.072200499,
    0.019297215, 0.119183865, 0.950497125,
];

// CIE XYZ to linear sRGB D65 transformation matrix, exactly as specified
// in IEC 61966-2-1:1999. Input XYZ is on the 0-100 scale.
#[rustfmt::skip]
const XYZ_TO_RGB: [f64; 9] = [
     3.2406, -1.5372, -0.4986,
    -0.9689,  1.8758,  0.0415,
     0.0557, -0.2040,  1.0570,
];

pub struct ColorConversionMatrix {
    m: Matrix,
    color_scaling_factor: f64,
}

impl ColorConversionMatrix {
    pub fn new_from_array(v: &[f64; 9], color_scaling_factor: f64) -> ColorConversionMatrix {
        ColorConversionMatrix {
            m: Matrix::new_from_array(v),
            color_scaling_factor,
        }
    }

    pub fn apply_to_vector(&self, in_vec: &Vector) -> Vector {
        self.m
            .multiply_vector(in_vec)
            .scale(self.color_scaling_factor)
    }
}

pub trait ColorConverter {
    fn convert(&self, in_color: &Color) -> Result<Color>;
}

///////////////////////////////
/// sRGB to RGB (gamma decode)
///////////////////////////////

pub struct SRgb2RgbConverter {}

impl SRgb2RgbConverter {
    pub fn new() -> Self {
        SRgb2RgbConverter {}
    }
}

impl Default for SRgb2RgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for SRgb2RgbConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        if in_color.space != ColorSpaceType::sRGB {
            Err(anyhow!(
                "Cannot convert to RGB, invalid input colorspace: {:?}",
                in_color.space
            ))
        } else {
            Ok(Color {
                value: Vector::new(
                    srgb_decode_channel(in_color.value.x / 255.0),
                    srgb_decode_channel(in_color.value.y / 255.0),
                    srgb_decode_channel(in_color.value.z / 255.0),
                ),
                space: ColorSpaceType::RGB,
            })
        }
    }
}

///////////////////////////////
/// RGB to sRGB (gamma encode)
///////////////////////////////

pub struct Rgb2sRgbConverter {}

impl Rgb2sRgbConverter {
    pub fn new() -> Self {
        Rgb2sRgbConverter {}
    }
}

impl Default for Rgb2sRgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Rgb2sRgbConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        if in_color.space != ColorSpaceType::RGB {
            Err(anyhow!(
                "Cannot convert to sRGB, invalid input colorspace: {:?}",
                in_color.space
            ))
        } else {
            Ok(Color {
                value: Vector::new(
                    srgb_encode_channel(in_color.value.x) * 255.0,
                    srgb_encode_channel(in_color.value.y) * 255.0,
                    srgb_encode_channel(in_color.value.z) * 255.0,
                ),
                space: ColorSpaceType::sRGB,
            })
        }
    }
}

///////////////////////////////
/// RGB to XYZ
///////////////////////////////

pub struct Rgb2XyzConverter {
    cm: ColorConversionMatrix,
}

impl Rgb2XyzConverter {
    pub fn new() -> Self {
        Rgb2XyzConverter {
            cm: ColorConversionMatrix::new_from_array(&RGB_TO_XYZ, 100.0),
        }
    }
}

impl Default for Rgb2XyzConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Rgb2XyzConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        if in_color.space != ColorSpaceType::RGB {
            Err(anyhow!(
                "Cannot convert to XYZ, invalid input colorspace: {:?}",
                in_color.space
            ))
        } else {
            Ok(Color {
                value: self.cm.apply_to_vector(&in_color.value),
                space: ColorSpaceType::XYZ,
            })
        }
    }
}

///////////////////////////////
/// XYZ to RGB
///////////////////////////////

pub struct Xyz2RgbConverter {
    cm: ColorConversionMatrix,
}

impl Xyz2RgbConverter {
    pub fn new() -> Self {
        Xyz2RgbConverter {
            cm: ColorConversionMatrix::new_from_array(&XYZ_TO_RGB, 0.01),
        }
    }
}

impl Default for Xyz2RgbConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter for Xyz2RgbConverter {
    fn convert(&self, in_color: &Color) -> Result<Color> {
        if in_color.space != ColorSpaceType::XYZ {
            Err(anyhow!(
                "Cannot convert to RGB, invalid input colorspace: {:?}",
                in_color.space
            ))
        } else {
            Ok(Color {
                value: self.cm.apply_to_vector(&in_color.value),
                space: ColorSpaceType::RGB,
            })
        }
    }
}

pub type ColorConverterImpl = Box<dyn ColorConverter + 'static + Send + Sync>;

pub fn get_converter(
    from_colorspace: ColorSpaceType,
    to_colorspace: ColorSpaceType,
) -> Result<ColorConverterImpl> {
    if from_colorspace == ColorSpaceType::sRGB && to_colorspace == ColorSpaceType::RGB {
        Ok(Box::new(SRgb2RgbConverter::new()))
    } else if from_colorspace == ColorSpaceType::RGB && to_colorspace == ColorSpaceType::sRGB {
        Ok(Box::new(Rgb2sRgbConverter::new()))
    } else if from_colorspace == ColorSpaceType::RGB && to_colorspace == ColorSpaceType::XYZ {
        Ok(Box::new(Rgb2XyzConverter::new()))
    } else if from_colorspace == ColorSpaceType::XYZ && to_colorspace == ColorSpaceType::RGB {
        Ok(Box::new(Xyz2RgbConverter::new()))
    } else {
        Err(anyhow!(
            "Colorspace conversion not supported: {:?} -> {:?}",
            from_colorspace,
            to_colorspace
        ))
    }
}

pub fn convert_color(from_color: &Color, to_colorspace: ColorSpaceType) -> Result<Color> {
    match get_converter(from_color.space, to_colorspace) {
        Ok(c) => c.convert(from_color),
        Err(why) => Err(why),
    }
}
