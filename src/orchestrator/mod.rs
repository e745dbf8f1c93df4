pub mod batch_processor;
pub mod job_processor;

pub use batch_processor::App;
pub use job_processor::process_job;
