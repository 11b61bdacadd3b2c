use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to write YAML config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Config file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Invalid YAML config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_empty_content_is_rejected() {
        let result: Result<BTreeMap<String, u32>, String> =
            YamlConfigSerializer::new().deserialize("  \n");
        assert_eq!(result.unwrap_err(), "Config file is empty");
    }

    #[test]
    fn test_malformed_content_is_rejected() {
        let result: Result<BTreeMap<String, u32>, String> =
            YamlConfigSerializer::new().deserialize("a: [1, 2");
        assert!(result.unwrap_err().starts_with("Invalid YAML config"));
    }
}
