/// Whether a notice reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A user-visible status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Success notices auto-dismiss; errors stay until replaced
    pub fn is_transient(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    /// Class list of the message region, e.g. `message error`
    pub fn css_class(&self) -> String {
        format!("message {}", self.kind.as_str())
    }
}
