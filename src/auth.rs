//! Administrator credential gate.

use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::error::{AppError, Result};

/// Shown after a successful admin login. No admin features exist yet.
pub const ADMIN_WELCOME: &str = "Welcome, Admin! (Admin functionality is not available yet.)";

/// Fixed admin ID/password pair, compared literally.
#[derive(Debug, Clone)]
pub struct AdminGate {
    id: String,
    password: String,
}

impl AdminGate {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }

    /// Check a supplied ID/password pair.
    pub fn login(&self, id: &str, password: &str) -> Result<()> {
        if id == self.id && password == self.password {
            info!("Admin login succeeded");
            Ok(())
        } else {
            warn!("Admin login failed for ID {:?}", id);
            Err(AppError::AdminAuthenticationFailed)
        }
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        AdminConfig::default().into()
    }
}

impl From<AdminConfig> for AdminGate {
    fn from(config: AdminConfig) -> Self {
        Self::new(config.id, config.password)
    }
}
