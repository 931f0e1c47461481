pub mod dataset;
pub mod season;

pub use season::Season;
