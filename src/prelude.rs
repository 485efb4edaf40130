pub use crate::color::convert_color;
pub use crate::color::Color;
pub use crate::color::ColorSpaceType;
pub use crate::cvd::deficiency_matrix;
pub use crate::cvd::simulate;
pub use crate::cvd::DeficiencyType;
pub use crate::imagesim::simulate_image;
pub use crate::matrix::Matrix;
pub use crate::palette::Palette;
pub use crate::vector::Vector;
