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

//! Protocol numbers handed to citizens for tracking their demanda.
//!
//! A protocol is derived from the record id assigned by the database and the
//! year of its creation timestamp, so it is unique exactly as long as ids are.

const PROTOCOLO_PREFIX: &str = "GAB";

/// Formats `GAB-{year}-{id}` with the id zero-padded to at least five digits.
pub fn format_protocolo(id: i64, year: i32) -> String {
    format!("{}-{}-{:05}", PROTOCOLO_PREFIX, year, id)
}
