//! Override fragments
//!
//! The built-in OpenClaw fragment configures agent defaults, the `nexus`
//! model provider and its catalog, and the local gateway. The provider's
//! `apiKey` is an empty placeholder; see [`crate::credential`].

use crate::document::{self, Document};
use crate::error::MergeError;
use serde_json::{json, Value};
use std::path::Path;

/// Provider the built-in fragment configures.
pub const PROVIDER_NAME: &str = "nexus";

/// Build the built-in OpenClaw override fragment.
pub fn builtin_fragment() -> Document {
    let fragment = json!({
        "agents": {
            "defaults": {
                "workspace": "~/clawd",
                "model": {
                    "primary": "nexus/claude-opus-4-6-20260205"
                },
                "compaction": {
                    "mode": "safeguard",
                    "reserveTokensFloor": 40000
                },
                "thinkingDefault": "high",
                "timeoutSeconds": 900,
                "maxConcurrent": 4,
                "subagents": {
                    "maxConcurrent": 8
                }
            }
        },
        "models": {
            "mode": "merge",
            "providers": {
                PROVIDER_NAME: {
                    "baseUrl": "https://crs2acc.itssx.com/api",
                    "apiKey": "",
                    "api": "anthropic-messages",
                    "models": model_catalog()
                }
            }
        },
        "messages": {
            "ackReactionScope": "group-mentions"
        },
        "commands": {
            "native": "auto",
            "nativeSkills": "auto"
        },
        "gateway": {
            "port": 18789,
            "mode": "local",
            "bind": "lan",
            "auth": {
                "mode": "token",
                "token": "openclaw"
            },
            "tailscale": {
                "mode": "off",
                "resetOnExit": false
            }
        },
        "skills": {
            "install": {
                "nodeManager": "npm"
            }
        }
    });

    match fragment {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}

/// Load an extra fragment file; same rules as a config document.
pub fn load_fragment<P: AsRef<Path>>(path: P) -> Result<Document, MergeError> {
    document::load(path)
}

/// Per-model pricing in USD per million tokens.
struct Pricing {
    input: f64,
    output: f64,
    cache_read: f64,
    cache_write: f64,
}

const SONNET_PRICING: Pricing = Pricing {
    input: 3.0,
    output: 15.0,
    cache_read: 0.3,
    cache_write: 3.75,
};

const OPUS_PRICING: Pricing = Pricing {
    input: 5.0,
    output: 25.0,
    cache_read: 0.5,
    cache_write: 6.25,
};

fn model_catalog() -> Value {
    Value::Array(vec![
        model_entry("claude-sonnet-4-5-20250929", "Claude Sonnet 4.5", 64000, &SONNET_PRICING),
        model_entry("claude-sonnet-4-6", "Claude Sonnet 4.6", 64000, &SONNET_PRICING),
        model_entry("claude-opus-4-5-20251101", "Claude Opus 4.5", 64000, &OPUS_PRICING),
        model_entry("claude-opus-4-6-20260205", "Claude Opus 4.6", 128000, &OPUS_PRICING),
    ])
}

fn model_entry(id: &str, name: &str, max_tokens: u64, pricing: &Pricing) -> Value {
    json!({
        "id": id,
        "name": name,
        "contextWindow": 200000,
        "maxTokens": max_tokens,
        "reasoning": true,
        "input": ["text", "image"],
        "cost": {
            "input": number(pricing.input),
            "output": number(pricing.output),
            "cacheRead": number(pricing.cache_read),
            "cacheWrite": number(pricing.cache_write)
        }
    })
}

/// Whole prices are written as integers (`3`, not `3.0`).
fn number(value: f64) -> Value {
    if value.fract() == 0.0 {
        json!(value as u64)
    } else {
        json!(value)
    }
}
