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

/// Configuration management for the gabinete service.
///
/// A `ConfigSingleton` loads a YAML file once and hands out shared references
/// afterwards. Every configuration type implements [`manager::CheckedConfig`]
/// so that semantically invalid values are rejected at load time instead of
/// surfacing later in a request path.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use config_manager::{CheckedConfig, ConfigSingleton};
///
/// #[derive(Deserialize)]
/// struct AppConfig {
///     app_name: String,
/// }
///
/// impl CheckedConfig for AppConfig {}
///
/// static APP: ConfigSingleton<AppConfig> = ConfigSingleton::new();
/// APP.initialize_from_str("app_name: demo").unwrap();
/// assert_eq!(APP.get_instance().unwrap().app_name, "demo");
/// ```
pub mod manager;
pub mod types;

pub use manager::{CheckedConfig, ConfigSingleton};
