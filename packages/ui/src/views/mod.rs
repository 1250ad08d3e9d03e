mod login_form;
pub use login_form::LoginForm;

mod register_form;
pub use register_form::RegisterForm;

mod dashboard_nav;
pub use dashboard_nav::DashboardNav;

mod projects;
pub use projects::ProjectList;

mod project_detail;
pub use project_detail::{use_detail, DetailHandle, ProjectDetailView};

mod task_progress;
pub use task_progress::TaskProgressBar;

mod task_list;
pub use task_list::TaskList;

mod task_detail;
pub use task_detail::TaskDetail;

mod create_task_form;
pub use create_task_form::CreateTaskForm;

mod member_list;
pub use member_list::MemberList;

mod subscription_plans;
pub use subscription_plans::SubscriptionPlans;
