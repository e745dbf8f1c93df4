//! 文件接收服务 - 业务能力层
//!
//! 只负责"选文件"能力，不关心流程
//!
//! 拖拽和文件选择器是两条入口，但最终收敛到同一个 `SelectedFile`，
//! 同一时刻最多只有一个被选中的文件。拖拽区高亮、提示文案都建模为
//! 本地状态，方便脱离页面环境测试

use crate::error::{AppError, AppResult, IntakeError};
use crate::models::SelectedFile;
use tracing::{debug, warn};

/// 未选择文件时的提示文案
pub const DEFAULT_PROMPT: &str = "Drag & drop your answer file here, or click to browse";

/// 文件接收服务
///
/// 职责：
/// - 两条选择路径（拖拽 / 选择器）收敛为一个文件
/// - 维护拖拽区高亮和提示文案
/// - 软校验：大小超限拒绝，扩展名不认识只告警（硬校验归服务端）
#[derive(Debug)]
pub struct FileIntake {
    selected: Option<SelectedFile>,
    drop_zone_active: bool,
    prompt: String,
    max_file_size: usize,
}

impl FileIntake {
    /// 创建新的文件接收服务
    ///
    /// # 参数
    /// - `max_file_size`: 上传大小上限（字节）
    pub fn new(max_file_size: usize) -> Self {
        Self {
            selected: None,
            drop_zone_active: false,
            prompt: DEFAULT_PROMPT.to_string(),
            max_file_size,
        }
    }

    /// 拖拽进入，高亮拖拽区
    pub fn drag_enter(&mut self) {
        self.drop_zone_active = true;
    }

    /// 拖拽离开，取消高亮
    pub fn drag_leave(&mut self) {
        self.drop_zone_active = false;
    }

    /// 拖拽区当前是否高亮
    pub fn is_drop_zone_active(&self) -> bool {
        self.drop_zone_active
    }

    /// 通过拖拽选择文件
    pub fn select_via_drop(&mut self, file: SelectedFile) -> AppResult<()> {
        // 松手即落，拖拽态结束
        self.drop_zone_active = false;
        self.select(file)
    }

    /// 通过文件选择器选择文件
    pub fn select_via_picker(&mut self, file: SelectedFile) -> AppResult<()> {
        self.select(file)
    }

    /// 两条路径共用的收敛逻辑
    fn select(&mut self, file: SelectedFile) -> AppResult<()> {
        if file.size() > self.max_file_size {
            // 选择失败时保留上一次的选择
            return Err(AppError::Intake(IntakeError::FileTooLarge {
                file_name: file.file_name.clone(),
                size: file.size(),
                limit: self.max_file_size,
            }));
        }

        if file.kind.is_none() {
            warn!(
                "⚠️ 未识别的文件类型: {}，交由服务端做硬校验",
                file.file_name
            );
        }

        debug!("已选择文件: {} ({} 字节)", file.file_name, file.size());

        self.prompt = file.file_name.clone();
        self.selected = Some(file);
        Ok(())
    }

    /// 当前选中的文件
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// 当前提示文案（未选择时为默认提示，选择后为文件名）
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// 清空选择，恢复默认提示
    pub fn clear(&mut self) {
        self.selected = None;
        self.prompt = DEFAULT_PROMPT.to_string();
    }
}
