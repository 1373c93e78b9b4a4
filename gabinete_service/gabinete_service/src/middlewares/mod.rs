pub mod filter {
    pub mod security_headers;
}
