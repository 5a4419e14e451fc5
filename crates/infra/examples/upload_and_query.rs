//! Example: Uploading records and querying them back
//!
//! Builds a client from `CLEVERTAP_*` environment variables (or a
//! `clevertap.json` / `clevertap.toml` file), uploads a handful of events and
//! profile updates, then runs an events query and a profile lookup.
//!
//! # Setup
//!
//! ```bash
//! export CLEVERTAP_ACCOUNT_ID=948-4KK-444Z
//! export CLEVERTAP_PASSCODE=QAE-AWB-AAAL
//! export CLEVERTAP_REGION=eu1
//! cargo run -p clevertap-infra --example upload_and_query
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clevertap_core::CompletionExt;
use clevertap_domain::{CallOptions, Identity, ProfileLookup, Record};
use clevertap_infra::{config, observability};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn sample_records(now: i64) -> Vec<Record> {
    vec![
        Record::event(
            Identity::Identity("6264372124".into()),
            "choseNewFavoriteFood",
            object(json!({"value": "sushi"})),
        ),
        Record::profile(
            Identity::Identity("6264372124".into()),
            object(json!({
                "favoriteColor": "green",
                "Age": 30,
                "Phone": "+14155551234",
                "Email": "peter@foo.com"
            })),
        )
        .with_timestamp(now),
        Record::event(
            Identity::Fbid("34322423".into()),
            "Product viewed",
            object(json!({
                "Product name": "Casio Chronograph Watch",
                "Category": "Mens Watch",
                "Price": 59.99,
                "Currency": "USD"
            })),
        ),
        Record::profile(
            Identity::ObjectId("-2ce3cca260664f70b82b1c6bb505f462".into()),
            object(json!({"favoriteFood": "hot dogs"})),
        ),
        Record::event(
            Identity::Identity("jack@gmail.com".into()),
            "Charged",
            object(json!({
                "Amount": 300,
                "Currency": "USD",
                "Payment mode": "Credit Card",
                "Items": [
                    {"Category": "books", "Book name": "The millionaire next door", "Quantity": 1},
                    {"Category": "books", "Book name": "Achieving inner zen", "Quantity": 4}
                ]
            })),
        )
        .with_timestamp(now),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing(false);

    let config = config::load().context("loading CleverTap configuration")?;
    let clevertap = clevertap_infra::connect(&config)?;

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let now = i64::try_from(now)?;
    let options = CallOptions::new().with_debug(true).with_batch_size(1000);

    let outcome = clevertap
        .upload(&sample_records(now), &options)
        .on_complete(|result| match result {
            Ok(outcome) => info!(processed = outcome.total_processed(), "upload finished"),
            Err(err) => warn!(error = %err, "upload failed"),
        })
        .await?;
    info!(response = %outcome.into_value(), "upload");

    let query = json!({"event_name": "choseNewFavoriteFood", "from": 20_150_810, "to": 20_151_025});
    let events = clevertap.events(&query, &CallOptions::new().with_batch_size(5000)).await?;
    info!(count = events.len(), "events");

    let profile = clevertap
        .profile(&ProfileLookup::Email("peter@foo.com".into()), &CallOptions::default())
        .await?;
    info!(%profile, "profile");

    Ok(())
}
