//! Anthropometric body-composition engine: skinfold protocol evaluation,
//! body-density conversion, and mass breakdown for nutrition-practice
//! assessments.
//!
//! The engine is a pure function over [`types::CompositionInput`]: no I/O,
//! no shared state, safe to call from any number of threads.

use thiserror::Error;

pub mod density;
pub mod engine;
pub mod sites;
pub mod types;
pub mod utils;

pub use engine::compute;
pub use types::{CompositionInput, CompositionResult, DensityEquation, Gender, Protocol};

/// Engine errors. Both are raised synchronously before any arithmetic
/// runs; there is no partial result.
///
/// Numeric degeneracies (a zero skinfold sum feeding `log10`, zero
/// weight) are deliberately not errors: they propagate through the
/// arithmetic as NaN or infinity, matching the production documents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompositionError {
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),
    #[error("unsupported protocol")]
    UnsupportedProtocol,
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, CompositionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn compute_rejects_missing_folds() {
        let input = CompositionInput {
            gender: Gender::Male,
            age: 30,
            weight: 80.0,
            height: Some(180.0),
            folds: None,
            protocol: Some(Protocol::Jp3),
            density_equation: DensityEquation::Siri,
        };
        assert_eq!(
            compute(&input),
            Err(CompositionError::InvalidArgument("folds"))
        );
    }

    #[test]
    fn compute_rejects_missing_protocol() {
        let input = CompositionInput {
            gender: Gender::Female,
            age: 25,
            weight: 60.0,
            height: None,
            folds: Some(HashMap::new()),
            protocol: None,
            density_equation: DensityEquation::Siri,
        };
        assert_eq!(
            compute(&input),
            Err(CompositionError::InvalidArgument("protocol"))
        );
    }

    #[test]
    fn compute_rejects_unrecognized_protocol() {
        let input = CompositionInput {
            gender: Gender::Male,
            age: 40,
            weight: 90.0,
            height: Some(175.0),
            folds: Some(HashMap::new()),
            protocol: Some(Protocol::Unknown),
            density_equation: DensityEquation::Brozek,
        };
        assert_eq!(compute(&input), Err(CompositionError::UnsupportedProtocol));
    }

    #[test]
    fn error_messages_name_the_missing_field() {
        let err = CompositionError::InvalidArgument("protocol");
        assert_eq!(err.to_string(), "invalid argument: protocol is required");
    }
}
