pub mod extract_client;
pub mod submit_client;

pub use extract_client::{ExtractClient, ExtractResponse};
pub use submit_client::{SubmitClient, SubmitResponse};

use crate::error::{AppError, AppResult};
use crate::models::SelectedFile;
use reqwest::multipart::Part;

/// 把选中的文件打包成 multipart 的 `file` 字段
pub(crate) fn file_part(file: &SelectedFile) -> AppResult<Part> {
    let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());

    if let Some(kind) = file.kind {
        part = part
            .mime_str(kind.mime())
            .map_err(|e| AppError::Other(format!("构建multipart失败: {}", e)))?;
    }

    Ok(part)
}
