pub mod error;
pub mod pairs;
pub mod results;
pub mod allocations;
pub mod permutations;
pub mod combinations;
pub mod powerset;
pub mod stage;
pub mod generator;
pub mod static_config;

pub use error::CombinatoricsError;
pub use pairs::Pairs;
pub use results::Results;
pub use allocations::{allocations, Allocations};
pub use permutations::{permutations, Permutations};
pub use combinations::{combinations, Combinations};
pub use powerset::{powerset, Powerset};
pub use stage::{pipe, Stage, Then};
pub use generator::Generator;
