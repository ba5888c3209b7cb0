//! 标准库
//!
//! - `base`：`type` / `typeof` / `tostring` / `tonumber`
//! - `veclib`：向量构造、点积、叉积、归一化以及向量元表

use tracing::info;
use vecrt_config::LibConfig;

use super::state::Runtime;

pub mod base;
pub mod veclib;

/// 按配置打开标准库
pub fn open_libs(rt: &mut Runtime, config: &LibConfig) {
    if config.base {
        base::open_base(rt);
    }
    if config.vector {
        veclib::open_vec(rt, &config.vector_namespace);
    }
    info!(
        target: "vecrt::install",
        base = config.base,
        vector = config.vector,
        namespace = %config.vector_namespace,
        "standard libraries opened"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn test_open_libs_respects_config() {
        let config = LibConfig {
            base: false,
            vector: true,
            vector_namespace: "math3".to_string(),
        };
        let mut rt = Runtime::new();
        open_libs(&mut rt, &config);

        assert!(rt.global("type").is_nil());
        assert!(rt.global("vec").is_nil());
        assert!(matches!(rt.global("math3"), Value::Table(_)));
    }

    #[test]
    fn test_open_libs_default() {
        let rt = Runtime::with_libs(&LibConfig::default());
        assert!(matches!(rt.global("typeof"), Value::Function(_)));
        assert!(matches!(rt.global("vec"), Value::Table(_)));
    }
}
