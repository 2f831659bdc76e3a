mod edges;
mod style;

pub use edges::Edges;
pub use style::{Display, Style};
