//! Frame-indexed animation curves.
//!
//! Every function here is a pure mapping from an explicit frame (and, for physics-based curves,
//! an explicit [`Fps`](crate::Fps)) to a value. Nothing reads ambient render state.

pub(crate) mod anim;
pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod motion;
pub(crate) mod presence;
pub(crate) mod spring;
