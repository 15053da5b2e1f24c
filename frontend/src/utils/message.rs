/// At most one of success or error is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }

    pub fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.success.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_are_mutually_exclusive() {
        let mut state = MessageState::default();
        assert!(state.is_empty());
        state.set_error("NG");
        assert_eq!(state.text(), Some("NG"));
        assert!(state.success.is_none());

        state.set_success("OK");
        assert_eq!(state.text(), Some("OK"));
        assert!(state.error.is_none());

        state.clear();
        assert!(state.is_empty());
    }
}
