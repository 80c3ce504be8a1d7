mod panic;

pub use self::panic::*;
