mod dashboard;
pub use dashboard::Dashboard;

mod guard;
pub use guard::Guarded;

mod login;
pub use login::Login;
