//! This crate contains all shared UI for the workspace.

mod gate;
pub use gate::{use_session_gate, LogoutButton, SessionGate, SessionProvider};

mod login_form;
pub use login_form::LoginForm;

mod scanner;
pub use scanner::CameraScanner;

mod platform;
pub use platform::{copy_to_clipboard, open_in_new_tab};
