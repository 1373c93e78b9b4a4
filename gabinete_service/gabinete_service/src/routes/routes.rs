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

use crate::controllers::{cep_controller, demanda_controller, validation_controller};
use crate::utils::response::json_error_handler;
use actix_web::web;

/// configure routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/demandas")
            .route("", web::post().to(demanda_controller::create_demanda))
            .route("", web::get().to(demanda_controller::list_demandas))
            .service(
                web::resource("/validacao")
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .route(web::post().to(validation_controller::validate_demanda)),
            )
            .route("/{id}", web::get().to(demanda_controller::get_demanda)),
    );
    cfg.service(web::scope("/api/cep").route("/{cep}", web::get().to(cep_controller::resolve_cep)));
}
