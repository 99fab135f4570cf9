use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InterpMethod {
    #[default]
    Automatic,
    CubicInterp,
    VectorInterp
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResolvedInterpMethod {
    Cubic,
    Vector
}

impl InterpMethod {
    /// Picks the method for one tick. Only `Automatic` with a delta strictly
    /// over the threshold resolves to cubic, unless `forced` lets
    /// `CubicInterp` stand on its own.
    #[inline]
    pub fn resolve(&self, position_delta: f32, min_distance_for_vector_interp: f32, forced: bool)
    -> ResolvedInterpMethod {
        match self {
            InterpMethod::Automatic if position_delta > min_distance_for_vector_interp => {
                ResolvedInterpMethod::Cubic
            }
            InterpMethod::CubicInterp if forced => ResolvedInterpMethod::Cubic,
            _ => ResolvedInterpMethod::Vector
        }
    }
}
