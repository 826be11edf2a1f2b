//! Livestock Scanner CLI
//!
//! 模擬解析・スキャン履歴・設定をローカルファイルに保存して扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod processing;
pub mod report;
pub mod storage;
