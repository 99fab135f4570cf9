use std::fmt;
use bevy::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InterpSkipReason {
    DistanceTooBig,
    UnexpectedError
}

impl fmt::Display for InterpSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpSkipReason::DistanceTooBig => write!(f, "distance too big"),
            InterpSkipReason::UnexpectedError => write!(f, "unexpected error"),
        }
    }
}

/// Called synchronously whenever a blend is skipped.
/// The returned reason is what gets reported, so implementors may remap it.
pub trait InterpolationSkipHandler: Send + Sync + 'static {
    #[inline]
    fn on_interpolation_skipped(&self, _entity: Entity, reason: InterpSkipReason)
    -> InterpSkipReason {
        reason
    }
}

#[derive(Default, Clone, Copy)]
pub struct DefaultSkipHandler;

impl InterpolationSkipHandler for DefaultSkipHandler {}
