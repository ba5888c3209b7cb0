//! Vecrt API - 运行时编排层
//!
//! Provides unified interfaces, including:
//! - Runtime construction from configuration
//! - Unified error handling (VecrtError, ErrorReport)
//! - Logging setup (tracing-subscriber)
//!
//! For host convenience, this crate provides a global config singleton.
//! For library use, prefer the explicit `new_runtime(&config)` API.

use tracing::{debug, info};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized};

pub mod error;
pub use error::{ErrorReport, VecrtError};

pub mod logging;
pub use logging::init_logging;

// Re-export config types from vecrt_config
pub use vecrt_config::{
    LibConfig, LogFormat, LogLevel, LogTargets, LoggingConfig, Phase, VecrtConfig,
};

// Re-export core types
pub use vecrt_core::{ArithOp, Runtime, RuntimeError, Value, Vec3};

/// Create a runtime with the libraries selected by `config`
pub fn new_runtime(config: &VecrtConfig) -> Runtime {
    info!(
        target: "vecrt::install",
        namespace = %config.libs.vector_namespace,
        "creating runtime"
    );
    Runtime::with_libs(&config.libs)
}

/// Create a runtime from the global config, or the defaults before `init_config`
pub fn quick_runtime() -> Runtime {
    match get_config() {
        Some(config) => new_runtime(config),
        None => new_runtime(&VecrtConfig::default()),
    }
}

/// Parse a JSON configuration document
pub fn load_config(source: &str) -> Result<VecrtConfig, VecrtError> {
    let config = VecrtConfig::from_json_str(source)?;
    debug!(target: "vecrt::install", ?config, "config loaded");
    Ok(config)
}

/// Call a function by dotted path, e.g. `vec.dot3`
pub fn call(rt: &Runtime, path: &str, args: &[Value]) -> Result<Value, VecrtError> {
    rt.call_path(path, args).map_err(VecrtError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_runtime_with_namespace() {
        let config = load_config(r#"{ "libs": { "vector_namespace": "v" } }"#).unwrap();
        let rt = new_runtime(&config);
        let v = call(&rt, "v.float3", &[Value::from(1.0), Value::from(2.0)]).unwrap();
        assert_eq!(v, Value::vector(1.0, 2.0, 0.0));
        assert!(rt.global("vec").is_nil());
    }

    #[test]
    fn test_quick_runtime_has_vector_library() {
        let rt = quick_runtime();
        let v = call(&rt, "vec.float3", &[]).unwrap();
        assert_eq!(rt.type_of(&v), "vector");
    }

    #[test]
    fn test_load_config_rejects_bad_json() {
        let err = load_config("{ \"libs\": ").unwrap_err();
        assert_eq!(err.phase(), "config");
    }

    #[test]
    fn test_call_error_report() {
        let rt = new_runtime(&VecrtConfig::default());
        let v = call(&rt, "vec.float3", &[]).unwrap();
        let err = call(&rt, "vec.dot3", &[v, Value::from(5.0)]).unwrap_err();

        let report = err.to_report();
        assert_eq!(report.argument, Some(2));
        assert_eq!(report.error_kind, "ArgumentTypeError");
        assert_eq!(
            report.to_short(),
            "runtime: invalid argument #2 to 'dot3' (expected vector, got number)"
        );
    }
}
