//! Scene sequencing: scenes joined by overlapping fade transitions, and the JSON storyboard
//! that declares them.

pub(crate) mod series;
pub(crate) mod storyboard;
