//! バックエンドAPI連携

pub mod recognition;
