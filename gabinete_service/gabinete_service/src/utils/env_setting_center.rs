use actix_web::HttpResponse;
use env_config_parse::get_env_or_default;
#[cfg(debug_assertions)]
use env_config_parse::find_file;
use crate::utils::response::error_body;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3001";

pub async fn default_not_found_page() -> HttpResponse {
    HttpResponse::NotFound().json(error_body("Rota nao encontrada."))
}

/// Loads `.env.dev` in debug builds and `.env` otherwise; a missing file leaves
/// the process environment as it is.
pub fn load_env() {
    #[cfg(debug_assertions)]
    {
        match find_file(".env.dev") {
            Ok(env_file) => {
                if let Err(e) = dotenv::from_path(&env_file) {
                    eprintln!("Failed to load {}: {}", env_file.display(), e);
                }
            },
            Err(_) => {
                dotenv::dotenv().ok();
            },
        }
    }
    #[cfg(not(debug_assertions))]
    {
        dotenv::dotenv().ok();
    }
}

pub fn get_address() -> String {
    get_env_or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS.to_string())
}
