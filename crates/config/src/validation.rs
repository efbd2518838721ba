// 基础配置验证
// 只保留本服务用得到的校验

use crate::{ConfigError, ConfigResult};
use std::net::SocketAddr;

/// Trait for configuration validation
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}

/// 验证工具函数
pub struct ValidationUtils;

impl ValidationUtils {
    /// 验证字符串非空
    pub fn validate_not_empty(value: &str, field_name: &str) -> ConfigResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field_name} cannot be empty"
            )));
        }
        Ok(())
    }

    /// 验证监听地址（host:port，端口不能为0）
    pub fn validate_bind_address(value: &str, field_name: &str) -> ConfigResult<SocketAddr> {
        Self::validate_not_empty(value, field_name)?;
        let addr: SocketAddr = value.parse().map_err(|_| {
            ConfigError::Validation(format!("{field_name} must be in format host:port"))
        })?;
        Self::validate_port(addr.port())?;
        Ok(addr)
    }

    /// 验证端口号
    pub fn validate_port(port: u16) -> ConfigResult<()> {
        if port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    /// 验证取值属于允许列表（不区分大小写）
    pub fn validate_one_of(value: &str, allowed: &[&str], field_name: &str) -> ConfigResult<()> {
        let lowered = value.to_lowercase();
        if !allowed.contains(&lowered.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid {field_name}: {value}. Valid values: {}",
                allowed.join(", ")
            )));
        }
        Ok(())
    }

    /// 验证计数值大于0
    pub fn validate_positive(count: usize, field_name: &str) -> ConfigResult<()> {
        if count == 0 {
            return Err(ConfigError::Validation(format!(
                "{field_name} must be greater than 0"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_utils() {
        assert!(ValidationUtils::validate_not_empty("test", "field").is_ok());
        assert!(ValidationUtils::validate_not_empty("  ", "field").is_err());

        assert!(ValidationUtils::validate_port(8080).is_ok());
        assert!(ValidationUtils::validate_port(0).is_err());

        assert!(ValidationUtils::validate_positive(1, "count").is_ok());
        assert!(ValidationUtils::validate_positive(0, "count").is_err());
    }

    #[test]
    fn test_validate_bind_address() {
        let addr = ValidationUtils::validate_bind_address("127.0.0.1:8080", "api.bind_address")
            .expect("valid address");
        assert_eq!(addr.port(), 8080);

        assert!(ValidationUtils::validate_bind_address("localhost", "api.bind_address").is_err());
        assert!(ValidationUtils::validate_bind_address("0.0.0.0:0", "api.bind_address").is_err());
        assert!(ValidationUtils::validate_bind_address("", "api.bind_address").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let allowed = ["json", "pretty"];
        assert!(ValidationUtils::validate_one_of("JSON", &allowed, "log_format").is_ok());
        assert!(ValidationUtils::validate_one_of("xml", &allowed, "log_format").is_err());
    }
}
