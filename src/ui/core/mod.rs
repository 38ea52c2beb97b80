pub mod canvas;
pub mod geom;
pub mod style;
pub mod theme;
