//! Fixed basis-change matrices and constants.
//!
//! The values are the published 4-digit coefficients and are used exactly
//! as written. They are not exact inverses of each other.
//!
//! ```text
//! Rgb --RGB_TO_LMS--> Lms --log10--> LAB_FORWARD --> Lab
//! Lab --LAB_INVERSE--> Lms --10^x--> LMS_TO_RGB --> Rgb
//! ```

use chromatch_math::Mat3;

/// Lower bound applied to RGB and LMS values before the matrix and log steps.
pub const FLOOR: f64 = 3.0 / 255.0;

/// RGB to LMS cone response.
pub const RGB_TO_LMS: Mat3 = Mat3::from_rows([
    [0.3811, 0.5783, 0.0402],
    [0.1967, 0.7244, 0.0782],
    [0.0241, 0.1288, 0.8444],
]);

/// LMS to RGB.
pub const LMS_TO_RGB: Mat3 = Mat3::from_rows([
    [4.4679, -3.5873, 0.1193],
    [-1.2186, 2.3809, -0.1624],
    [0.0497, -0.2439, 1.2045],
]);

/// Per-axis Lab scale (1/sqrt(3), 1/sqrt(6), 1/sqrt(2)).
pub const LMS_TO_LAB_SCALE: Mat3 = Mat3::diagonal(0.5774, 0.4082, 0.7071);

/// Opponent-axis mix applied to log LMS.
pub const LMS_TO_LAB_MIX: Mat3 = Mat3::from_rows([
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -2.0],
    [1.0, -1.0, 0.0],
]);

/// Mix that undoes [`LMS_TO_LAB_MIX`] after rescaling.
pub const LAB_TO_LMS_MIX: Mat3 = Mat3::from_rows([
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -2.0, 0.0],
]);

/// `LMS_TO_LAB_SCALE * LMS_TO_LAB_MIX`, applied to log10 LMS.
pub const LAB_FORWARD: Mat3 = Mat3::from_rows([
    [0.5774, 0.5774, 0.5774],
    [0.4082, 0.4082, -0.8164],
    [0.7071, -0.7071, 0.0],
]);

/// `LAB_TO_LMS_MIX * LMS_TO_LAB_SCALE`, applied to raw Lab values.
pub const LAB_INVERSE: Mat3 = Mat3::from_rows([
    [0.5774, 0.4082, 0.7071],
    [0.5774, 0.4082, -0.7071],
    [0.5774, -0.8164, 0.0],
]);
