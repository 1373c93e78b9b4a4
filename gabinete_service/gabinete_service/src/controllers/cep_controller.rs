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

use actix_web::{web, HttpResponse};
use address_resolver::{AddressResolver, ResolvedAddress};
use serde::Serialize;
use crate::utils::response::address_error_response;

#[derive(Serialize)]
struct CepResponse<'a> {
    success: bool,
    #[serde(flatten)]
    address: &'a ResolvedAddress,
}

/// GET /api/cep/{cep}
pub async fn resolve_cep(path: web::Path<String>, resolver: web::Data<dyn AddressResolver>) -> HttpResponse {
    match resolver.resolve(&path).await {
        Ok(address) => HttpResponse::Ok().json(CepResponse { success: true, address: &address }),
        Err(e) => address_error_response(&e),
    }
}
