//! # Notification Dispatch
//!
//! Priority × channel notification rendering behind one interface.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Notification Dispatch                         │
//! │                                                                 │
//! │   Priority  ×  Channel        one Dispatcher value, not a       │
//! │   ────────     ───────        class per combination             │
//! │   Urgent       Email                                            │
//! │   Normal       Sms            send(target, payload)             │
//! │                Push                  │                          │
//! │                Slack                 ▼                          │
//! │                               Outcome { rendered lines }        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is pure: the outcome carries the formatted lines and the
//! caller decides where they go (console, log, nowhere). Channel rules:
//! urgent payloads get an `[URGENT]` prefix, SMS bodies are capped at
//! 160 characters with an ellipsis, urgent Slack messages carry a
//! `:rotating_light:` marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest SMS body sent without truncation.
const SMS_MAX_LEN: usize = 160;

// =============================================================================
// Priority & Channel
// =============================================================================

/// How loud the notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    Normal,
}

impl Priority {
    /// `"[URGENT] "` for urgent messages, nothing for normal ones.
    fn prefix(&self) -> &'static str {
        match self {
            Priority::Urgent => "[URGENT] ",
            Priority::Normal => "",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Urgent => write!(f, "URGENT"),
            Priority::Normal => write!(f, "NORMAL"),
        }
    }
}

/// Where the notification goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
    Push,
    Slack,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Channel::Email => "EMAIL",
            Channel::Sms => "SMS",
            Channel::Push => "PUSH",
            Channel::Slack => "SLACK",
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// The rendered message, ready for whatever sink the caller uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub priority: Priority,
    pub channel: Channel,
    /// Formatted message lines, header included.
    pub rendered: Vec<String>,
    /// Whether the payload was cut to fit the channel (SMS only).
    pub truncated: bool,
}

// =============================================================================
// Dispatcher
// =============================================================================

/// One priority/channel combination.
///
/// The whole urgent-vs-normal, per-channel behavior lives in `send`'s
/// match; adding a channel is one enum variant and one arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatcher {
    pub priority: Priority,
    pub channel: Channel,
}

impl Dispatcher {
    pub fn new(priority: Priority, channel: Channel) -> Self {
        Dispatcher { priority, channel }
    }

    /// Renders `payload` for `target` on this dispatcher's channel.
    pub fn send(&self, target: &str, payload: &str) -> Outcome {
        let header = format!("=== {} {} ===", self.priority, self.channel);
        let prefixed = format!("{}{}", self.priority.prefix(), payload);
        let mut truncated = false;

        let rendered = match self.channel {
            Channel::Email => vec![
                header,
                format!("To: {}", target),
                format!("Subject: {}", prefixed),
            ],
            Channel::Sms => {
                let body = if prefixed.chars().count() > SMS_MAX_LEN {
                    truncated = true;
                    let cut: String = prefixed.chars().take(SMS_MAX_LEN - 3).collect();
                    format!("{}...", cut)
                } else {
                    prefixed
                };
                vec![header, format!("To: {}", target), format!("Message: {}", body)]
            }
            Channel::Push => vec![
                header,
                format!("Device: {}", target),
                format!("Title: {}", prefixed),
            ],
            Channel::Slack => {
                let marker = match self.priority {
                    Priority::Urgent => ":rotating_light: ",
                    Priority::Normal => "",
                };
                vec![
                    header,
                    format!("Channel: {}", target),
                    format!("Message: {}{}", marker, payload),
                ]
            }
        };

        Outcome {
            priority: self.priority,
            channel: self.channel,
            rendered,
            truncated,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_email_carries_prefix() {
        let outcome = Dispatcher::new(Priority::Urgent, Channel::Email)
            .send("admin@example.com", "Server down");

        assert_eq!(outcome.rendered[0], "=== URGENT EMAIL ===");
        assert_eq!(outcome.rendered[1], "To: admin@example.com");
        assert_eq!(outcome.rendered[2], "Subject: [URGENT] Server down");
        assert!(!outcome.truncated);
    }

    #[test]
    fn test_normal_messages_have_no_prefix() {
        let outcome =
            Dispatcher::new(Priority::Normal, Channel::Push).send("device-1", "Order ready");
        assert_eq!(outcome.rendered[2], "Title: Order ready");
    }

    #[test]
    fn test_sms_truncates_at_160_chars() {
        let long = "a".repeat(200);
        let outcome = Dispatcher::new(Priority::Normal, Channel::Sms).send("+15550001111", &long);

        assert!(outcome.truncated);
        let body = outcome.rendered[2].strip_prefix("Message: ").unwrap();
        assert_eq!(body.chars().count(), 160);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_sms_at_exactly_160_chars_is_untouched() {
        let exact = "b".repeat(160);
        let outcome = Dispatcher::new(Priority::Normal, Channel::Sms).send("+15550001111", &exact);

        assert!(!outcome.truncated);
        assert!(outcome.rendered[2].ends_with(&exact));
    }

    #[test]
    fn test_sms_prefix_counts_against_the_cap() {
        // 155 chars of payload + 9 chars of "[URGENT] " = 164 → truncated
        let payload = "c".repeat(155);
        let outcome = Dispatcher::new(Priority::Urgent, Channel::Sms).send("+15550001111", &payload);
        assert!(outcome.truncated);
    }

    #[test]
    fn test_urgent_slack_carries_marker() {
        let outcome =
            Dispatcher::new(Priority::Urgent, Channel::Slack).send("#incidents", "Backup failed");
        assert_eq!(
            outcome.rendered[2],
            "Message: :rotating_light: Backup failed"
        );

        let normal =
            Dispatcher::new(Priority::Normal, Channel::Slack).send("#general", "Deployed");
        assert_eq!(normal.rendered[2], "Message: Deployed");
    }
}
