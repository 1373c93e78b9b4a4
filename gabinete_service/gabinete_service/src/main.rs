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

mod controllers;
mod middlewares;
mod routes;
mod utils;

use std::io;
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};
use crate::middlewares::filter::security_headers::SecurityHeaders;
use crate::routes::routes::configure_routes;
use crate::utils::app_state::AppState;
use crate::utils::env_setting_center::{default_not_found_page, get_address, load_env};
use server_config::init_chain::chain::builder::InitChainBuilder;
use server_config::init_chain::handlers::init_db_table_handler::DbTableInitHandler;
use server_config::init_chain::handlers::logger_init_handler::LoggerInitHandler;
use server_config::init_chain::handlers::upload_dir_init_handler::UploadDirInitHandler;
use server_config::init_chain::handlers::yml_init_handler::ConfigInitHandler;
use server_config::init_chain::traits::InitContext;

const CORS_MAX_AGE_SECS: usize = 3600;

fn startup_error(message: impl Into<String>) -> io::Error {
    let message = message.into();
    error!("Startup failed: {}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env();
    let chain = InitChainBuilder::new()
        .add_handler(LoggerInitHandler::new())
        .add_handler(ConfigInitHandler::new())
        .add_handler(DbTableInitHandler::new())
        .add_handler(UploadDirInitHandler::new())
        .build();

    let mut context = InitContext::new();
    if let Err(e) = chain.execute(&mut context).await {
        eprintln!("Initialization failed: {}", e);
        return Err(startup_error(e));
    }
    let config = context.config.take().ok_or_else(|| startup_error("configuration was not loaded"))?;
    let conn = context.db.take().ok_or_else(|| startup_error("database was not initialized"))?;
    let state = AppState::build(&config, conn).map_err(startup_error)?;

    let address = get_address();
    info!("Server listening on http://{}", address);
    HttpServer::new(move || {
        let cors = state
            .cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(CORS_MAX_AGE_SECS);
        App::new()
            .app_data(state.submission.clone())
            .app_data(state.resolver.clone())
            .wrap(SecurityHeaders)
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .configure(configure_routes)
            .service(actix_files::Files::new(&state.upload.public_prefix, &state.upload.upload_dir))
            .default_service(web::route().to(default_not_found_page))
    })
    .bind(address)?
    .run()
    .await
}
