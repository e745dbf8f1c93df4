pub mod extraction_service;
pub mod file_intake;
pub mod history_view;
pub mod warn_writer;

pub use extraction_service::ExtractionService;
pub use file_intake::FileIntake;
pub use history_view::HistoryView;
pub use warn_writer::WarnWriter;
