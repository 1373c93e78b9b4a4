/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

/// Semantic checks run after a configuration has been deserialized.
pub trait CheckedConfig {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A thread-safe singleton holding configuration loaded from YAML.
///
/// The first successful `initialize*` call wins; later calls are no-ops.
pub struct ConfigSingleton<T: for<'a> Deserialize<'a> + CheckedConfig + Send + Sync + 'static> {
    instance: OnceLock<T>,
}

impl<T: for<'a> Deserialize<'a> + CheckedConfig + Send + Sync + 'static> ConfigSingleton<T> {
    pub const fn new() -> Self {
        ConfigSingleton {
            instance: OnceLock::new(),
        }
    }

    /// Loads and checks the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, if the content
    /// does not deserialize into `T`, or if `T::check` rejects it.
    pub fn initialize<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        if self.instance.get().is_some() {
            return Ok(());
        }

        let file = File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?;

        let mut contents = String::new();
        let mut reader = BufReader::new(file);
        reader.read_to_string(&mut contents).map_err(|e| format!("Failed to read config file: {}", e))?;

        self.initialize_from_str(&contents)
    }

    /// Same as [`initialize`](Self::initialize) for YAML already in memory.
    pub fn initialize_from_str(&self, contents: &str) -> Result<(), String> {
        if self.instance.get().is_some() {
            return Ok(());
        }
        let config = parse_checked::<T>(contents)?;
        let _ = self.instance.set(config);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if no `initialize*` call has succeeded yet.
    pub fn get_instance(&self) -> Result<&T, String> {
        self.instance.get().ok_or_else(|| "Configuration not initialized".to_string())
    }
}

/// Deserializes `contents` and runs the type's semantic checks.
pub fn parse_checked<T: for<'a> Deserialize<'a> + CheckedConfig>(contents: &str) -> Result<T, String> {
    let config: T = serde_yaml::from_str(contents).map_err(|e| format!("Failed to parse YAML: {}", e))?;
    config.check().map_err(|e| format!("Invalid configuration: {}", e))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Sample {
        port: u16,
    }

    impl CheckedConfig for Sample {
        fn check(&self) -> Result<(), String> {
            if self.port == 0 {
                return Err("port must not be 0".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_uninitialized_instance_is_error() {
        let config = ConfigSingleton::<Sample>::new();
        assert!(config.get_instance().is_err());
    }

    #[test]
    fn test_initialize_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 3001").unwrap();
        let config = ConfigSingleton::<Sample>::new();
        config.initialize(file.path()).unwrap();
        assert_eq!(config.get_instance().unwrap().port, 3001);
    }

    #[test]
    fn test_first_initialization_wins() {
        let config = ConfigSingleton::<Sample>::new();
        config.initialize_from_str("port: 1").unwrap();
        config.initialize_from_str("port: 2").unwrap();
        assert_eq!(config.get_instance().unwrap().port, 1);
    }

    #[test]
    fn test_check_failure_is_reported() {
        let err = parse_checked::<Sample>("port: 0").unwrap_err();
        assert!(err.contains("port must not be 0"));
    }

    #[test]
    fn test_missing_file() {
        let config = ConfigSingleton::<Sample>::new();
        let err = config.initialize("/nonexistent/server_config.yaml").unwrap_err();
        assert!(err.starts_with("Failed to open config file"));
    }
}
