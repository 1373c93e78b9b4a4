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

pub mod config;
pub mod logger;

use std::{path::PathBuf, sync::OnceLock};

use env_config_parse::find_file;

use crate::config::LogConfig;

// Re-export log macros for convenient use in other modules
pub use log::{debug, error, info, trace, warn};

const LOG_CONFIG_FILE: &str = "logging.yaml";

static LOGGER: OnceLock<logger::Logger> = OnceLock::new();

/// Initialize logging from the first `logging.yaml` found under the working directory.
///
/// # Example
/// ```no_run
/// common_log::init().expect("Failed to initialize logger");
/// log::info!("Logger initialized");
/// ```
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let file = find_file(LOG_CONFIG_FILE)?;
    init_with_yaml(file)
}

/// Initialize logging from an explicit configuration file.
pub fn init_with_yaml(config_path: impl Into<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    ensure_uninitialized()?;
    let logger = logger::Logger::new_from_yaml(config_path)?;
    store(logger)
}

/// Initialize logging from an in-memory configuration.
///
/// # Example
/// ```no_run
/// use common_log::config::{LogConfig, LoggerConfig};
///
/// let config = LogConfig {
///     loggers: vec![LoggerConfig {
///         path_prefix: "root".to_string(),
///         log_directory: "logs".to_string(),
///         log_file_name: "gabinete.log".to_string(),
///         max_file_size: 10485760,
///         max_zip_count: 6,
///         level: "info".to_string(),
///     }],
///     console: false,
/// };
/// common_log::init_with_config(config).expect("Failed to initialize logger");
/// ```
pub fn init_with_config(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    ensure_uninitialized()?;
    let logger = logger::Logger::new_from_config(config)?;
    store(logger)
}

fn ensure_uninitialized() -> Result<(), Box<dyn std::error::Error>> {
    if LOGGER.get().is_some() {
        return Err("Logger already initialized".into());
    }
    Ok(())
}

fn store(logger: logger::Logger) -> Result<(), Box<dyn std::error::Error>> {
    if LOGGER.set(logger).is_err() {
        return Err("Logger already initialized".into());
    }
    Ok(())
}
