mod builder;
mod resolver;
mod submission;

pub use builder::BuilderError;
pub use resolver::ResolverError;
pub use submission::SubmissionError;
