//! Persona AI CLI
//!
//! 解析サービスにPDFを送り、ペルソナに沿って抽出されたセクションを表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
