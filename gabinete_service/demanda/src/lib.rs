//! Intake of citizen service requests ("demandas").
//!
//! Raw form input is normalized by [`utils::masks`], checked against the rule
//! table in [`validation`], and persisted by [`services::submission_service`],
//! which stores attachments, inserts the record and assigns its protocol
//! number inside one write transaction.

pub mod entities {
    pub mod db_model {
        pub mod demanda_db_model;
    }
    pub mod inner_model {
        pub mod attachment;
        pub mod demanda_view;
        pub mod natureza;
        pub mod new_demanda;
    }
    pub mod request_body {
        pub mod demanda_form;
    }
}
pub mod error {
    pub mod demanda_error;
}
pub mod protocol {
    pub mod protocol_generator;
}
pub mod repositories {
    pub mod demanda_db_repo;
    pub mod demanda_store;
}
pub mod services {
    pub mod submission_service;
}
pub mod storage {
    pub mod attachment_policy;
    pub mod attachment_storage;
}
pub mod utils {
    pub mod masks;
}
pub mod validation {
    pub mod field_rules;
}

/// Schema of the `demandas` table, applied at startup.
pub const DEMANDA_SCHEMA_SQL: &str = include_str!("../rdb_sql/sqlite_v1.sql");

pub use error::demanda_error::DemandaError;
pub use services::submission_service::SubmissionService;
