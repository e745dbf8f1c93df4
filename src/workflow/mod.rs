pub mod form_controller;
pub mod submission_ctx;
pub mod submission_flow;

pub use form_controller::{AnswerDraft, FormController, FormState};
pub use submission_ctx::SubmissionCtx;
pub use submission_flow::{ProcessResult, SubmissionFlow};
