//! Body-density regressions for the supported skinfold protocols and the
//! density-to-fat-percentage conversions.

use crate::types::{DensityEquation, Gender};

/// Jackson–Pollock 3-site regression (chest, abdomen, thigh).
pub fn jackson_pollock_3(gender: Gender, sum: f64, age: u32) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => 1.10938 - 0.0008267 * sum + 0.0000016 * sum * sum - 0.0002574 * age,
        Gender::Female => 1.0994921 - 0.0009929 * sum + 0.0000023 * sum * sum - 0.0001392 * age,
    }
}

/// Jackson–Pollock 7-site regression.
pub fn jackson_pollock_7(gender: Gender, sum: f64, age: u32) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => 1.112 - 0.00043499 * sum + 0.00000055 * sum * sum - 0.00028826 * age,
        Gender::Female => 1.097 - 0.00046971 * sum + 0.00000056 * sum * sum - 0.00012828 * age,
    }
}

/// Durnin–Womersley 4-site regression: `A - B * log10(sum)` with
/// age-banded, gender-specific coefficients. A zero sum feeds
/// `log10(0)`; the resulting infinity is passed through untouched.
pub fn durnin_womersley(gender: Gender, sum: f64, age: u32) -> f64 {
    let (a, b) = durnin_womersley_coefficients(gender, age);
    a - b * sum.log10()
}

/// Coefficient rows per gender and age band. Band selection is an
/// exhaustive if/else chain: any age outside 17-49, including ages
/// below 17, takes the open-ended 50+ row. Production parity; do not
/// tighten without sign-off.
fn durnin_womersley_coefficients(gender: Gender, age: u32) -> (f64, f64) {
    match gender {
        Gender::Male => {
            if (17..=19).contains(&age) {
                (1.1620, 0.0630)
            } else if (20..=29).contains(&age) {
                (1.1631, 0.0632)
            } else if (30..=39).contains(&age) {
                (1.1422, 0.0544)
            } else if (40..=49).contains(&age) {
                (1.1620, 0.0700)
            } else {
                (1.1715, 0.0779)
            }
        }
        Gender::Female => {
            if (17..=19).contains(&age) {
                (1.1549, 0.0678)
            } else if (20..=29).contains(&age) {
                (1.1599, 0.0717)
            } else if (30..=39).contains(&age) {
                (1.1423, 0.0632)
            } else if (40..=49).contains(&age) {
                (1.1333, 0.0612)
            } else {
                (1.1339, 0.0645)
            }
        }
    }
}

/// Convert body density (g/mL) to fat percentage.
pub fn fat_percentage(equation: DensityEquation, density: f64) -> f64 {
    match equation {
        DensityEquation::Siri => 495.0 / density - 450.0,
        DensityEquation::Brozek => 457.0 / density - 414.2,
    }
}
