pub mod cep_controller;
pub mod demanda_controller;
pub mod validation_controller;
