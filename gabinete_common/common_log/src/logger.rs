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

use crate::config::{LogConfig, LoggerConfig};
use chrono::Local;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::{
    append::rolling_file::RollingFileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config, Handle,
};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S:%3f)} {l} [{M}:{L}] - {m}{n}";
const ROOT_APPENDER: &str = "root_appender";
const CONSOLE_APPENDER: &str = "console_appender";

pub struct Logger {
    #[allow(dead_code)]
    handle: Handle,
}

impl Logger {
    pub fn new_from_yaml(config_path: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = LogConfig::from_yaml(config_path)?;
        Self::new_from_config(config)
    }

    pub fn new_from_config(config: LogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let log4rs_config = Self::build_config(&config, &log_output_dir())?;
        let handle = log4rs::init_config(log4rs_config)?;
        Ok(Self { handle })
    }

    /// Translates a `LogConfig` into a log4rs `Config` writing under `output_dir`.
    pub fn build_config(config: &LogConfig, output_dir: &str) -> Result<Config, Box<dyn std::error::Error>> {
        let mut log4rs_config = Config::builder();

        for logger_config in config.module_loggers() {
            let appender = Self::create_appender(logger_config, output_dir)?;
            let appender_name = format!("{}_appender", logger_config.path_prefix);
            log4rs_config = log4rs_config
                .appender(Appender::builder().build(&appender_name, Box::new(appender)));

            let logger = log4rs::config::Logger::builder()
                .appender(appender_name)
                .additive(false)
                .build(
                    logger_config.path_prefix.clone(),
                    Self::parse_level(&logger_config.level),
                );
            log4rs_config = log4rs_config.logger(logger);
        }

        let mut root = Root::builder();
        let root_level = match config.get_root_config() {
            Some(root_config) => {
                let root_appender = Self::create_appender(root_config, output_dir)?;
                log4rs_config = log4rs_config
                    .appender(Appender::builder().build(ROOT_APPENDER, Box::new(root_appender)));
                root = root.appender(ROOT_APPENDER);
                Self::parse_level(&root_config.level)
            }
            None => LevelFilter::Info,
        };

        if config.console {
            let console = ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build();
            log4rs_config = log4rs_config
                .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
            root = root.appender(CONSOLE_APPENDER);
        }

        Ok(log4rs_config.build(root.build(root_level))?)
    }

    /// Rolling file for one logger. Full files are gzipped into `<file>-<n>-<startup stamp>.gz`.
    fn create_appender(
        config: &LoggerConfig,
        output_dir: &str,
    ) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
        let directory = Path::new(output_dir).join(&config.log_directory);
        std::fs::create_dir_all(&directory)?;

        let startup_stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let archive = directory.join(format!("{}-{{}}-{}.gz", config.log_file_name, startup_stamp));
        let roller = FixedWindowRoller::builder().build(&archive.to_string_lossy(), config.max_zip_count)?;
        let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(config.max_file_size)), Box::new(roller));

        Ok(RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(directory.join(&config.log_file_name), Box::new(policy))?)
    }

    /// Unknown level names fall back to `Info`.
    pub fn parse_level(level: &str) -> LevelFilter {
        LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
    }
}

fn log_output_dir() -> String {
    env::var("LOG_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string())
}
