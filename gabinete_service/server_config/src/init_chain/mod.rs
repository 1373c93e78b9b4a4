pub mod chain {
    pub mod builder;
}
pub mod handlers {
    pub mod init_db_table_handler;
    pub mod logger_init_handler;
    pub mod upload_dir_init_handler;
    pub mod yml_init_handler;
}
pub mod traits;
