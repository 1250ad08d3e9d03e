mod home;
pub use home::{Home, NotFound};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard_layout;
pub use dashboard_layout::DashboardLayout;

mod projects;
pub use projects::{ProjectDetail, Projects};

mod subscription;
pub use subscription::Subscription;
