//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use cms_plugins_config::config::EnvSource;

/// Test environment snapshot factory
pub struct TestEnv;

impl TestEnv {
    /// Empty snapshot: every lookup misses
    pub fn empty() -> EnvSource {
        EnvSource::default()
    }

    /// Snapshot with every R2 variable set to a distinct literal
    pub fn full_r2() -> EnvSource {
        EnvSource::from_iter([
            ("R2_ACCESS_KEY_ID", "AKIA123"),
            ("R2_ACCESS_SECRET", "s3cr3t"),
            ("R2_ENDPOINT", "https://abc123.r2.cloudflarestorage.com"),
            ("R2_REGION", "auto"),
            ("R2_BUCKET", "media"),
            ("R2_ACCOUNT_ID", "abc123"),
            ("R2_PUBLIC_URL", "https://cdn.example.com"),
        ])
    }

    /// Snapshot with every SMTP variable set
    pub fn full_smtp() -> EnvSource {
        EnvSource::from_iter([
            ("SMTP_HOST", "mail.internal"),
            ("SMTP_PORT", "2525"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "hunter2"),
        ])
    }

    /// Snapshot with every variable the resolver consumes
    pub fn full() -> EnvSource {
        EnvSource::from_iter([
            ("R2_ACCESS_KEY_ID", "AKIA123"),
            ("R2_ACCESS_SECRET", "s3cr3t"),
            ("R2_ENDPOINT", "https://abc123.r2.cloudflarestorage.com"),
            ("R2_REGION", "auto"),
            ("R2_BUCKET", "media"),
            ("R2_ACCOUNT_ID", "abc123"),
            ("R2_PUBLIC_URL", "https://cdn.example.com"),
            ("SMTP_HOST", "mail.internal"),
            ("SMTP_PORT", "2525"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "hunter2"),
        ])
    }
}
