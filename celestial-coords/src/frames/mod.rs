mod horizontal;

pub use horizontal::{Geometry, HorizontalPosition, HorizontalTransformer, Transformed};
