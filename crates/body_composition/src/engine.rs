//! Protocol evaluation: the pure `compute` entry point.

use crate::types::{CompositionInput, CompositionResult, Gender, Protocol};
use crate::utils::round_to;
use crate::{CompositionError, EngineResult, density, sites};

/// Evaluate one anthropometric assessment.
///
/// Fails before any arithmetic when `folds` or `protocol` is missing or
/// the protocol tag is unrecognized. No other validation is performed:
/// zero or implausible measurements flow through the regressions and may
/// surface as NaN or infinity in the result.
pub fn compute(input: &CompositionInput) -> EngineResult<CompositionResult> {
    let folds = input
        .folds
        .as_ref()
        .ok_or(CompositionError::InvalidArgument("folds"))?;
    let protocol = input
        .protocol
        .ok_or(CompositionError::InvalidArgument("protocol"))?;

    let density_fn: fn(Gender, f64, u32) -> f64 = match protocol {
        Protocol::Jp3 => density::jackson_pollock_3,
        Protocol::Jp7 => density::jackson_pollock_7,
        Protocol::Dw4 => density::durnin_womersley,
        Protocol::Unknown => return Err(CompositionError::UnsupportedProtocol),
    };

    let sum = sites::sum_folds(folds, protocol.sites());
    let body_density = density_fn(input.gender, sum, input.age);
    let fat_pct = density::fat_percentage(input.density_equation, body_density);

    tracing::debug!(
        protocol = protocol.tag(),
        equation = input.density_equation.tag(),
        sum_of_folds = sum,
        body_density,
        "evaluated skinfold protocol"
    );

    let fat_mass = input.weight * fat_pct / 100.0;
    let lean_mass = input.weight - fat_mass;

    // Height of 0 in a document means "not measured"; the bone estimate
    // (and therefore muscle) is skipped rather than emitted as zero.
    let height = input.height.filter(|h| *h != 0.0);
    let bone_mass = height.map(|h| match input.gender {
        Gender::Male => 0.0326 * input.weight + 0.0000267 * h - 0.0484,
        Gender::Female => 0.0235 * input.weight + 0.0000267 * h - 0.0415,
    });
    let residual_mass = input.weight
        * match input.gender {
            Gender::Male => 0.241,
            Gender::Female => 0.209,
        };
    let muscle_mass = bone_mass.map(|bone| lean_mass - bone - residual_mass);

    metrics::counter!("composition_compute_total", "protocol" => protocol.tag()).increment(1);

    Ok(CompositionResult {
        body_density: round_to(body_density, 4),
        body_fat_percentage: round_to(fat_pct, 2),
        fat_mass: round_to(fat_mass, 2),
        lean_mass: round_to(lean_mass, 2),
        bone_mass: bone_mass.map(|v| round_to(v, 2)),
        residual_mass: round_to(residual_mass, 2),
        muscle_mass: muscle_mass.map(|v| round_to(v, 2)),
        formula: format!("{}_{}", protocol.tag(), input.density_equation.tag()),
        sum_of_folds: round_to(sum, 1),
    })
}
