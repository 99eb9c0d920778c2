mod marker;
mod member;
mod model;

pub use self::marker::*;
pub use self::member::*;
pub use self::model::*;
