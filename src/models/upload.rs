use crate::error::{AppError, AppResult, FileError, IntakeError};
use std::path::Path;

/// 无法识别的文件扩展名
///
/// 与服务端对非法类型的响应文案保持一致
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid file type: {0}")]
pub struct UnknownExtension(pub String);

/// 上传文件类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FileKind {
    /// PDF 文档
    Pdf,
    /// PNG 图片
    Png,
    /// JPG/JPEG 图片
    Jpg,
}

impl FileKind {
    /// 获取标准扩展名
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Png => "png",
            FileKind::Jpg => "jpg",
        }
    }

    /// 获取 MIME 类型
    pub fn mime(self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Png => "image/png",
            FileKind::Jpg => "image/jpeg",
        }
    }

    /// 从扩展名解析文件类型（大小写不敏感）
    pub fn from_extension(ext: &str) -> Result<Self, UnknownExtension> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "png" => Ok(FileKind::Png),
            "jpg" | "jpeg" => Ok(FileKind::Jpg),
            other => Err(UnknownExtension(other.to_string())),
        }
    }

    /// 从文件名解析文件类型
    pub fn from_file_name(file_name: &str) -> Result<Self, UnknownExtension> {
        match file_name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Err(UnknownExtension(String::new())),
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 被选中的上传文件
///
/// 拖拽和文件选择器两条路径最终都收敛到这个结构，
/// 下游的提取、提交只认它
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// 原始文件名
    pub file_name: String,
    /// 文件内容
    pub bytes: Vec<u8>,
    /// 识别出的文件类型（识别失败时为 None，由服务端做硬校验）
    pub kind: Option<FileKind>,
}

impl SelectedFile {
    /// 从文件名和内容创建
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> AppResult<Self> {
        let file_name = file_name.into();
        if file_name.is_empty() {
            return Err(AppError::Intake(IntakeError::EmptyFileName));
        }
        let kind = FileKind::from_file_name(&file_name).ok();
        Ok(Self {
            file_name,
            bytes,
            kind,
        })
    }

    /// 从磁盘路径读取文件
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::File(FileError::NotFound {
                path: path.display().to_string(),
            }));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self::new(file_name, bytes)
    }

    /// 文件大小（字节）
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_extension("pdf").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_extension("PDF").unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_extension("png").unwrap(), FileKind::Png);
        assert_eq!(FileKind::from_extension("jpg").unwrap(), FileKind::Jpg);
        // jpeg 与 jpg 归为同一类
        assert_eq!(FileKind::from_extension("jpeg").unwrap(), FileKind::Jpg);
        assert!(FileKind::from_extension("docx").is_err());
    }

    #[test]
    fn test_file_kind_from_file_name() {
        assert_eq!(
            FileKind::from_file_name("answer.pdf").unwrap(),
            FileKind::Pdf
        );
        assert_eq!(
            FileKind::from_file_name("第三章.作业.JPEG").unwrap(),
            FileKind::Jpg
        );
        assert!(FileKind::from_file_name("answer").is_err());
    }

    #[test]
    fn test_unknown_extension_message() {
        let err = FileKind::from_extension("docx").unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type: docx");
    }

    #[test]
    fn test_selected_file_infers_kind() {
        let file = SelectedFile::new("answer.pdf", vec![1, 2, 3]).unwrap();
        assert_eq!(file.kind, Some(FileKind::Pdf));
        assert_eq!(file.size(), 3);

        // 未知扩展名不阻止选择，只是类型为 None
        let file = SelectedFile::new("answer.docx", vec![1]).unwrap();
        assert_eq!(file.kind, None);
    }

    #[test]
    fn test_selected_file_rejects_empty_name() {
        assert!(SelectedFile::new("", vec![1]).is_err());
    }

    #[test]
    fn test_selected_file_from_path() {
        let path = std::env::temp_dir().join("answer_submit_upload_test.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let file = tokio_test::block_on(SelectedFile::from_path(&path)).unwrap();
        assert_eq!(file.file_name, "answer_submit_upload_test.png");
        assert_eq!(file.kind, Some(FileKind::Png));
        assert_eq!(file.size(), 16);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_selected_file_from_missing_path() {
        let result =
            tokio_test::block_on(SelectedFile::from_path("/no/such/dir/answer.pdf"));
        assert!(result.is_err());
    }
}
