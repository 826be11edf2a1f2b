//! Livestock Scanner Common Library
//!
//! CLIとWeb(WASM)で共有される型・模擬解析・履歴ストア

pub mod types;
pub mod error;
pub mod codec;
pub mod generator;
pub mod store;
pub mod summary;
pub mod voice;

pub use types::{
    AnimalType, AppSettings, Breed, Estimate, Feed, Health, HealthStatus, Language, ScanResult,
    ValueRange, PLACEHOLDER_IMAGE,
};
pub use error::{Error, Result};
pub use generator::{generate_mock_result, generate_mock_result_for, generate_sample_history};
pub use store::{
    MemoryBackend, StorageBackend, Store, StoreEvent, StoreSnapshot, SubscriptionId,
    HISTORY_KEY, ONBOARDING_KEY, SETTINGS_KEY,
};
pub use summary::{share_text, speech_text};
pub use voice::{match_command, reply_for, Route, VoiceCommand, VoiceReply};
