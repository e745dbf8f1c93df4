pub mod job;
pub mod loaders;
pub mod question;
pub mod submission;
pub mod upload;

pub use job::AnswerJob;
pub use loaders::toml_loader::{load_all_toml_files, load_toml_to_answer_job};
pub use question::Question;
pub use submission::{HistoryEntry, Submission};
pub use upload::{FileKind, SelectedFile};
