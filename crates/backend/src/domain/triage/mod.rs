pub mod document;
pub mod extract;
pub mod keyword;
pub mod service;
