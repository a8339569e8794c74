// Public exports for the CLI binary and testing
pub mod charset;
pub mod error;
pub mod generator;
pub mod mutation;
pub mod runner;
pub mod spec;

pub use error::{GeneratorError, SpecError};
pub use generator::PasswordGenerator;
pub use mutation::{smart_mutations, MUTATIONS_PER_WORD};
pub use runner::{run, CancelToken, RunOptions, RunSummary};
pub use spec::GenerationSpec;
