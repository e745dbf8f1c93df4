//! 提交表单控制器 - 流程层
//!
//! 两态状态机：
//! - **Viewing**：已有提交，表单隐藏，展示当前成绩
//! - **Editing**：没有提交，或用户点了"重交"
//!
//! 状态切换是纯本地行为，不发任何网络请求；
//! 走首交还是重交端点由服务端是否下发 `submission` 记录决定，
//! 客户端不自己记账

/// 表单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// 查看已有提交，表单隐藏
    Viewing,
    /// 编辑中，表单可见
    Editing,
}

/// 答案草稿
///
/// 提取结果先进暂存区，确认后才整体替换正文——
/// 避免一次提取悄悄冲掉手动录入的答案
#[derive(Debug, Clone, Default)]
pub struct AnswerDraft {
    text: String,
    staged: Option<String>,
}

impl AnswerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前正文
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 直接录入答案正文
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// 暂存提取结果，不触碰正文
    pub fn stage(&mut self, extracted: impl Into<String>) {
        self.staged = Some(extracted.into());
    }

    /// 暂存区内容
    pub fn staged(&self) -> Option<&str> {
        self.staged.as_deref()
    }

    /// 确认暂存内容，整体替换正文
    ///
    /// # 返回
    /// 暂存区为空时返回 false，正文不变
    pub fn confirm_staged(&mut self) -> bool {
        match self.staged.take() {
            Some(staged) => {
                self.text = staged;
                true
            }
            None => false,
        }
    }

    /// 丢弃暂存内容，正文保持不变
    pub fn discard_staged(&mut self) {
        self.staged = None;
    }
}

/// 提交表单控制器
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    has_submission: bool,
    draft: AnswerDraft,
}

impl FormController {
    /// 创建表单控制器
    ///
    /// 已有提交时初始为 Viewing，否则直接进入 Editing
    pub fn new(has_submission: bool) -> Self {
        let state = if has_submission {
            FormState::Viewing
        } else {
            FormState::Editing
        };
        Self {
            state,
            has_submission,
            draft: AnswerDraft::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// 表单是否可见
    pub fn is_form_visible(&self) -> bool {
        self.state == FormState::Editing
    }

    /// 本次提交是否走重交端点
    pub fn is_resubmission(&self) -> bool {
        self.has_submission
    }

    /// 点击"重交"：显示表单
    pub fn resubmit_clicked(&mut self) {
        self.state = FormState::Editing;
    }

    /// 点击"取消"：收起表单，回到查看态
    ///
    /// 纯本地可见性切换；没有已有提交可看时不生效
    pub fn cancel_clicked(&mut self) {
        if self.has_submission {
            self.state = FormState::Viewing;
        }
    }

    pub fn draft(&self) -> &AnswerDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut AnswerDraft {
        &mut self.draft
    }
}
