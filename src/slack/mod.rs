//! Slack-specific functionality

pub mod client;

pub use client::{JSON_CONTENT_TYPE, SlackWebhookClient};
