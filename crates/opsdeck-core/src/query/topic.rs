//! Topic matchers, in priority order
//!
//! The table is data so the precedence is visible in one place and testable
//! without walking a conditional cascade.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response topics the engine can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    OrderStatus,
    OrderVolume,
    Wave,
    Training,
    Stock,
    Performance,
    Quality,
    Sla,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::OrderStatus => "order-status",
            Topic::OrderVolume => "order-volume",
            Topic::Wave => "wave",
            Topic::Training => "training",
            Topic::Stock => "stock",
            Topic::Performance => "performance",
            Topic::Quality => "quality",
            Topic::Sla => "sla",
        };
        write!(f, "{}", name)
    }
}

/// A predicate over normalized query text plus the topic it selects
pub struct TopicMatcher {
    pub topic: Topic,
    pub matches: fn(&str) -> bool,
}

fn mentions_orders(text: &str) -> bool {
    text.contains("order") || text.contains("customer")
}

fn matches_order_status(text: &str) -> bool {
    mentions_orders(text) && (text.contains("status") || text.contains("track"))
}

fn matches_order_volume(text: &str) -> bool {
    mentions_orders(text)
        && (text.contains("volume") || text.contains("count") || text.contains("how many"))
}

fn matches_wave(text: &str) -> bool {
    text.contains("wave")
}

fn matches_training(text: &str) -> bool {
    text.contains("training") || text.contains("employee")
}

fn matches_stock(text: &str) -> bool {
    text.contains("stock") || text.contains("inventory") || text.contains("replenish")
}

fn matches_performance(text: &str) -> bool {
    text.contains("performance") || text.contains("efficiency")
}

fn matches_quality(text: &str) -> bool {
    text.contains("quality") || text.contains("audit")
}

fn matches_sla(text: &str) -> bool {
    text.contains("sla")
}

/// Matchers in priority order; the first match wins
pub const MATCHERS: &[TopicMatcher] = &[
    TopicMatcher {
        topic: Topic::OrderStatus,
        matches: matches_order_status,
    },
    TopicMatcher {
        topic: Topic::OrderVolume,
        matches: matches_order_volume,
    },
    TopicMatcher {
        topic: Topic::Wave,
        matches: matches_wave,
    },
    TopicMatcher {
        topic: Topic::Training,
        matches: matches_training,
    },
    TopicMatcher {
        topic: Topic::Stock,
        matches: matches_stock,
    },
    TopicMatcher {
        topic: Topic::Performance,
        matches: matches_performance,
    },
    TopicMatcher {
        topic: Topic::Quality,
        matches: matches_quality,
    },
    TopicMatcher {
        topic: Topic::Sla,
        matches: matches_sla,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_table_order_is_the_documented_priority() {
        let topics: Vec<Topic> = MATCHERS.iter().map(|m| m.topic).collect();
        assert_eq!(
            topics,
            vec![
                Topic::OrderStatus,
                Topic::OrderVolume,
                Topic::Wave,
                Topic::Training,
                Topic::Stock,
                Topic::Performance,
                Topic::Quality,
                Topic::Sla,
            ]
        );
    }

    #[test]
    fn order_words_alone_match_nothing() {
        // "order" without a status or volume word falls through both order
        // matchers (and everything else).
        assert!(!matches_order_status("my order"));
        assert!(!matches_order_volume("my order"));
    }

    #[test]
    fn replenish_prefix_covers_replenishment() {
        assert!(matches_stock("why is replenishment delayed"));
        assert!(matches_stock("stock levels"));
    }
}
