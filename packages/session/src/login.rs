//! Phone/password submission state.
//!
//! Holds the two fields, their individual error slots, the network error and
//! the in-flight flag. The flag flips in [`begin_submit`](LoginFlow::begin_submit),
//! before the caller dispatches the request, so a rapid second submission is
//! actually rejected instead of racing the response. Network failures land in
//! their own slot rather than piggybacking on the phone field; all of them
//! collapse to one fixed message, the server does not get to distinguish
//! wrong credentials from an outage for the user.

/// Fixed user-facing message for any endpoint failure.
pub const NETWORK_ERROR_MSG: &str = "Network error, try again later.";

const PHONE_REQUIRED_MSG: &str = "Enter your phone number";
const PASSWORD_REQUIRED_MSG: &str = "Enter your password";

/// Form state for the phone/password submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFlow {
    phone: String,
    password: String,
    phone_error: Option<String>,
    password_error: Option<String>,
    network_error: Option<String>,
    submitting: bool,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn phone_error(&self) -> Option<&str> {
        self.phone_error.as_deref()
    }

    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    pub fn network_error(&self) -> Option<&str> {
        self.network_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update the phone field; clears that field's error slot only.
    pub fn edit_phone(&mut self, value: String) {
        self.phone = value;
        self.phone_error = None;
    }

    /// Update the password field; clears that field's error slot only.
    pub fn edit_password(&mut self, value: String) {
        self.password = value;
        self.password_error = None;
    }

    /// Try to enter the in-flight state. Returns false, changing nothing but
    /// the field error slots, when a submission is already running or a field
    /// is empty; the caller must only dispatch the request on true.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        let mut ok = true;
        if self.phone.trim().is_empty() {
            self.phone_error = Some(PHONE_REQUIRED_MSG.to_string());
            ok = false;
        }
        if self.password.is_empty() {
            self.password_error = Some(PASSWORD_REQUIRED_MSG.to_string());
            ok = false;
        }
        if !ok {
            return false;
        }

        self.network_error = None;
        self.submitting = true;
        true
    }

    /// The endpoint accepted the credentials.
    pub fn succeed(&mut self) {
        self.submitting = false;
    }

    /// The endpoint failed in any way. Fields stay editable and intact; the
    /// user sees one generic message.
    pub fn fail(&mut self) {
        self.network_error = Some(NETWORK_ERROR_MSG.to_string());
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginFlow {
        let mut flow = LoginFlow::new();
        flow.edit_phone("+70000000001".to_string());
        flow.edit_password("secret".to_string());
        flow
    }

    #[test]
    fn test_submit_flag_set_before_dispatch() {
        let mut flow = filled();
        assert!(flow.begin_submit());
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut flow = filled();
        assert!(flow.begin_submit());
        assert!(!flow.begin_submit());
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_failure_keeps_fields_and_sets_network_error() {
        let mut flow = filled();
        assert!(flow.begin_submit());
        flow.fail();

        assert_eq!(flow.phone(), "+70000000001");
        assert_eq!(flow.password(), "secret");
        assert_eq!(flow.network_error(), Some(NETWORK_ERROR_MSG));
        assert_eq!(flow.phone_error(), None);
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_retry_clears_previous_network_error() {
        let mut flow = filled();
        flow.begin_submit();
        flow.fail();

        assert!(flow.begin_submit());
        assert_eq!(flow.network_error(), None);
    }

    #[test]
    fn test_success_clears_in_flight() {
        let mut flow = filled();
        flow.begin_submit();
        flow.succeed();
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_empty_fields_block_submission() {
        let mut flow = LoginFlow::new();
        assert!(!flow.begin_submit());
        assert!(!flow.is_submitting());
        assert_eq!(flow.phone_error(), Some(PHONE_REQUIRED_MSG));
        assert_eq!(flow.password_error(), Some(PASSWORD_REQUIRED_MSG));
    }

    #[test]
    fn test_editing_clears_only_own_error_slot() {
        let mut flow = LoginFlow::new();
        flow.begin_submit();
        assert!(flow.phone_error().is_some());
        assert!(flow.password_error().is_some());

        flow.edit_phone("+7".to_string());
        assert_eq!(flow.phone_error(), None);
        assert!(flow.password_error().is_some());

        flow.edit_password("pw".to_string());
        assert_eq!(flow.password_error(), None);
    }

    #[test]
    fn test_editing_does_not_clear_network_error() {
        let mut flow = filled();
        flow.begin_submit();
        flow.fail();

        flow.edit_phone("+8".to_string());
        assert_eq!(flow.network_error(), Some(NETWORK_ERROR_MSG));
    }
}
