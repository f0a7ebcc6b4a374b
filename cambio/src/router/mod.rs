pub mod pairwise;
pub mod reference;

pub mod util;
