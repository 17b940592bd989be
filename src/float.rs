use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Marker trait for the scalar carried by an [`AutoDiff`](crate::AutoDiff).
///
/// Bundles the numeric and utility traits the chain-rule code needs.
/// Only primitive float types implement this; `AutoDiff` itself does not.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
}

impl Float for f32 {}
impl Float for f64 {}
