//! 画面状態の遷移
//!
//! Input → Loading → (Results | Error) → Input

/// メイン画面の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Input,
    Loading,
    Results,
    Error(String),
}

/// 画面状態を動かすイベント
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Submit,
    Succeeded,
    Failed(String),
    Reset,
}

impl ViewState {
    /// 遷移関数。現在の状態で無効なイベントは無視する
    pub fn transition(&self, event: ViewEvent) -> ViewState {
        match (self, event) {
            (_, ViewEvent::Reset) => ViewState::Input,
            (ViewState::Input, ViewEvent::Submit) => ViewState::Loading,
            (ViewState::Loading, ViewEvent::Succeeded) => ViewState::Results,
            (ViewState::Loading, ViewEvent::Failed(message)) => ViewState::Error(message),
            (state, event) => {
                tracing::debug!(?state, ?event, "ignored view event");
                state.clone()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Input => "input",
            ViewState::Loading => "loading",
            ViewState::Results => "results",
            ViewState::Error(_) => "error",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ViewState::Input)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let state = ViewState::default();
        let state = state.transition(ViewEvent::Submit);
        assert_eq!(state, ViewState::Loading);
        let state = state.transition(ViewEvent::Succeeded);
        assert_eq!(state, ViewState::Results);
        assert_eq!(state.transition(ViewEvent::Reset), ViewState::Input);
    }

    #[test]
    fn test_failure_carries_message() {
        let state = ViewState::Loading.transition(ViewEvent::Failed("No files uploaded".into()));
        assert_eq!(state.error_message(), Some("No files uploaded"));
        assert_eq!(state.as_str(), "error");
    }

    #[test]
    fn test_reset_from_any_state() {
        for state in [
            ViewState::Input,
            ViewState::Loading,
            ViewState::Results,
            ViewState::Error("x".into()),
        ] {
            assert_eq!(state.transition(ViewEvent::Reset), ViewState::Input);
        }
    }

    #[test]
    fn test_results_and_error_are_terminal_until_reset() {
        assert_eq!(ViewState::Results.transition(ViewEvent::Submit), ViewState::Results);
        assert_eq!(
            ViewState::Error("x".into()).transition(ViewEvent::Succeeded),
            ViewState::Error("x".into())
        );
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        assert_eq!(ViewState::Loading.transition(ViewEvent::Submit), ViewState::Loading);
    }

    #[test]
    fn test_completion_outside_loading_is_ignored() {
        assert_eq!(ViewState::Input.transition(ViewEvent::Succeeded), ViewState::Input);
        assert_eq!(ViewState::Input.transition(ViewEvent::Failed("x".into())), ViewState::Input);
    }
}
