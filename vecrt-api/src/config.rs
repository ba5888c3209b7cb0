//! API 层配置
//!
//! 进程级全局配置单例（供宿主程序在启动时设置一次）

use once_cell::sync::OnceCell;
use vecrt_config::VecrtConfig;

use crate::error::VecrtError;

// Global config singleton
static GLOBAL_CONFIG: OnceCell<VecrtConfig> = OnceCell::new();

/// Initialize global configuration
///
/// Fails with [`VecrtError::AlreadyInitialized`] on the second call.
pub fn init(config: VecrtConfig) -> Result<(), VecrtError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| VecrtError::AlreadyInitialized)
}

/// Get global config reference (None before `init`)
pub fn config() -> Option<&'static VecrtConfig> {
    GLOBAL_CONFIG.get()
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
