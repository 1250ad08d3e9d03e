pub mod config;
pub mod due_date;
pub mod models;
pub mod progress;
pub mod sequence;
pub mod session;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageTokenStore;

pub use config::{ApiConfig, ClientConfig, SessionConfig};
pub use models::{
    CheckoutSession, LoginResponse, LoginUser, MemberRole, NewProject, NewTask, Product, Project,
    ProjectMembership, ProjectUpdate, RegisterRequest, SubscriptionState, SubscriptionStatus,
    Task, TaskStatus, TaskUpdate, User,
};
pub use progress::TaskProgress;
pub use sequence::{RequestSequence, Ticket};
pub use session::{Session, TokenStore};
