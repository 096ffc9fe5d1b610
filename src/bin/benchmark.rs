use availability_backend::domain::services::configurator::{BlockConfigurator, BlockPatch, PriceField};
use availability_backend::domain::services::payload::{build_bulk_payload, BulkAvailabilityPayload};
use chrono::{Duration as ChronoDuration, Utc};
use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::Client;
use serde_json::{json, Value};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

const DURATION_SECS: u64 = 20;
const BASE_URL: &str = "http://localhost:8000";

struct Target {
    name: &'static str,
    method: &'static str,
    url: String,
    body: Option<serde_json::Value>,
}

#[tokio::main]
async fn main() {
    println!("{}", "🚀 Starting Benchmark Suite".bold().green());
    println!("Target URL: {}", BASE_URL);

    let client = Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    if client.get(format!("{}/health", BASE_URL)).send().await.is_err() {
        eprintln!("{}", "❌ Server is NOT reachable at localhost:8000. Please start it first.".red().bold());
        return;
    }

    println!("\n{}", "⚙️  Setting up benchmark data...".yellow());
    let (experience_id, experience_slug) = setup_experience(&client).await;
    let bulk_payload = build_season_payload(&experience_id);
    seed_availability(&client, &bulk_payload).await;

    println!("{}", "✅ Data created successfully.".green());
    println!("   Experience ID: {}", experience_id);
    println!("   Slug:          {}", experience_slug);

    let slot_date = (Utc::now() + ChronoDuration::days(7)).format("%Y-%m-%d").to_string();

    let targets = vec![
        Target {
            name: "Health Check (Public)",
            method: "GET",
            url: format!("{}/health", BASE_URL),
            body: None,
        },
        Target {
            name: "Get Experience (Public Read)",
            method: "GET",
            url: format!("{}/api/v1/experiences/{}", BASE_URL, experience_slug),
            body: None,
        },
        Target {
            name: "Expand Slots (Recurrence Query)",
            method: "GET",
            url: format!("{}/api/v1/experiences/{}/availability/slots?date={}", BASE_URL, experience_slug, slot_date),
            body: None,
        },
        Target {
            name: "Bulk Create Seasons (Write Path)",
            method: "POST",
            url: format!("{}/api/v1/availability/bulk", BASE_URL),
            body: Some(serde_json::to_value(&bulk_payload).unwrap()),
        },
    ];

    let rps_stages = vec![10, 50, 200, 1000];

    for target in targets {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking Endpoint: {}", target.name.cyan().bold());
        println!("URL: {}", target.url);
        println!("{}", "=".repeat(60));

        println!("{:<10} | {:<15} | {:<15} | {:<15}", "RPS", "Mean (ms)", "P99 (ms)", "Success Rate");
        println!("{:-<10}-+-{:-<15}-+-{:-<15}-+-{:-<15}", "", "", "", "");

        for &rps in &rps_stages {
            run_stage(&client, &target, rps).await;
        }
    }
}

async fn setup_experience(client: &Client) -> (String, String) {
    let slug = format!("bench-{}", Uuid::new_v4());
    let res = client.post(format!("{}/api/v1/experiences", BASE_URL))
        .json(&json!({
            "slug": slug,
            "title": "Benchmark Snorkel Tour",
            "description": "Load testing",
            "location": "Isla Grande"
        }))
        .send()
        .await
        .expect("Failed to send experience create request");

    if !res.status().is_success() {
        panic!("Failed to create experience: status {}", res.status());
    }

    let body: Value = res.json().await.expect("Failed to parse experience response");
    let id = body["id"].as_str().expect("No id").to_string();
    (id, slug)
}

/// Drives the season configurator the way the dashboard form would, then
/// hands the blocks to the transformer.
fn build_season_payload(experience_id: &str) -> BulkAvailabilityPayload {
    let mut configurator = BlockConfigurator::new();
    let block_id = configurator.blocks()[0].id.clone();

    let start = Utc::now().format("%Y-%m-%d").to_string();
    let end = (Utc::now() + ChronoDuration::days(90)).format("%Y-%m-%d").to_string();

    configurator.update_block(&block_id, BlockPatch {
        start_date: Some(start),
        end_date: Some(end),
        ..Default::default()
    }).unwrap();
    configurator.set_price_input(&block_id, PriceField::PricePerAdult, "190.000").unwrap();
    configurator.set_price_input(&block_id, PriceField::PricePerChild, "120.000").unwrap();
    configurator.set_price_input(&block_id, PriceField::CommissionPerAdult, "30.000").unwrap();
    configurator.set_price_input(&block_id, PriceField::CommissionPerChild, "20.000").unwrap();
    configurator.set_default_capacity_input(&block_id, "").unwrap();
    configurator.commit_default_capacity(&block_id).unwrap();
    configurator.add_slot(&block_id).unwrap();

    build_bulk_payload(experience_id, configurator.blocks())
}

async fn seed_availability(client: &Client, payload: &BulkAvailabilityPayload) {
    let res = client.post(format!("{}/api/v1/availability/bulk", BASE_URL))
        .json(payload)
        .send()
        .await
        .expect("Failed to create availability");

    if !res.status().is_success() {
        let status = res.status();
        let txt = res.text().await.unwrap_or_default();
        panic!("Failed to seed availability. Status: {}. Body: {}", status, txt);
    }
}

async fn run_stage(client: &Client, target: &Target, rps: u32) {
    let limiter = Arc::new(RateLimiter::direct(
        Quota::per_second(NonZeroU32::new(rps).unwrap())
    ));

    let (tx, mut rx) = mpsc::channel(50000);
    let start_time = Instant::now();
    let duration = Duration::from_secs(DURATION_SECS);

    loop {
        if start_time.elapsed() > duration {
            break;
        }

        if limiter.check().is_ok() {
            let client = client.clone();
            let url = target.url.clone();
            let body = target.body.clone();
            let method = target.method;
            let tx = tx.clone();

            tokio::spawn(async move {
                let req_start = Instant::now();
                let res = match method {
                    "GET" => client.get(&url).send().await,
                    "POST" => {
                        let mut req = client.post(&url);
                        if let Some(b) = body {
                            req = req.json(&b);
                        }
                        req.send().await
                    },
                    _ => client.get(&url).send().await,
                };
                let latency = req_start.elapsed();

                let success = match res {
                    Ok(r) => r.status().is_success(),
                    Err(_) => false,
                };

                let _ = tx.send((latency, success)).await;
            });
        } else {
            tokio::task::yield_now().await;
        }
    }

    drop(tx);

    let mut histogram = Histogram::<u64>::new(3).unwrap();
    let mut successes = 0;
    let mut total = 0;

    while let Some((latency, success)) = rx.recv().await {
        total += 1;
        if success { successes += 1; }
        histogram.record(latency.as_micros() as u64).unwrap();
    }

    let mean_ms = histogram.mean() / 1000.0;
    let p99_ms = histogram.value_at_quantile(0.99) as f64 / 1000.0;
    let success_rate = if total > 0 { (successes as f64 / total as f64) * 100.0 } else { 0.0 };

    println!(
        "{:<10} | {:<15.2} | {:<15.2} | {:<14.1}%",
        rps,
        mean_ms,
        p99_ms,
        success_rate
    );

    tokio::time::sleep(Duration::from_millis(500)).await;
}
