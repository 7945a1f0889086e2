
pub use factories::*;
pub use inspect::*;
