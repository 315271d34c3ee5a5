pub mod admin;
pub mod assets;
pub mod generate;
pub mod marketplace;
pub mod session;

use brandstudio_core::error::CoreError;
use brandstudio_core::user::{User, UserRole};

use crate::error::AppError;
use crate::state::AppState;

/// The signed-in user, or 401 when there is no active session.
pub(crate) fn current_user(state: &AppState) -> Result<User, AppError> {
    state.store.user().ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "No active session".to_string(),
        ))
    })
}

/// The signed-in user, who must hold one of `roles` (403 otherwise).
pub(crate) fn require_role(state: &AppState, roles: &[UserRole]) -> Result<User, AppError> {
    let user = current_user(state)?;
    if roles.contains(&user.role) {
        Ok(user)
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Requires one of roles: {roles:?}"
        ))))
    }
}
