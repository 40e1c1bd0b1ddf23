//! Static color tables: background palettes, header level colors, terminal themes and
//! token colors, plus the CSS color notation they are written in.

pub(crate) mod color;
pub(crate) mod palette;
pub(crate) mod theme;
