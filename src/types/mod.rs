//! Tipos compartilhados do Votum.

pub mod config;
pub mod errors;
pub mod requests;
pub mod responses;
pub mod votes;
