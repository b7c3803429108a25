pub mod permission_status;
pub mod stage_status;
pub mod status_family;
pub mod user_role;

pub use permission_status::PermissionStatus;
pub use stage_status::{ReviewStage, StageStatus};
pub use status_family::StatusFamily;
pub use user_role::UserRole;
