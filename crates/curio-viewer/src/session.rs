//! Per-viewer session state

/// Lifecycle phase of a viewer instance
///
/// `Ready` and `Error` are terminal; `Loading` is re-entered only when the
/// source URL changes, which discards the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerPhase {
    #[default]
    Loading,
    Ready,
    Error(String),
}

/// Transient UI state for one viewer instance
///
/// `is_user_interacting` is a plain bool, not a lock: gesture callbacks and
/// frame steps run on the same single-threaded frame scheduler and never
/// interleave mid-update.
#[derive(Debug, Clone, Default)]
pub struct ViewerSession {
    pub phase: ViewerPhase,
    pub is_user_interacting: bool,
    pub hint_visible: bool,
}

impl ViewerSession {
    pub fn is_ready(&self) -> bool {
        self.phase == ViewerPhase::Ready
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ViewerPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_loading() {
        let session = ViewerSession::default();
        assert_eq!(session.phase, ViewerPhase::Loading);
        assert!(!session.is_user_interacting);
        assert!(!session.hint_visible);
        assert!(session.error().is_none());
    }
}
