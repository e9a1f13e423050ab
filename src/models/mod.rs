mod pipeline;

pub use self::pipeline::*;
