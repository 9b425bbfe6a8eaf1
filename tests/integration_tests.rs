//! Integration tests for component interactions.
//!
//! These tests verify that the crates work together correctly, including
//! against real local sockets standing in for the risk oracle.

use std::sync::Arc;
use std::time::Duration;

use riskgate_core::types::RiskContext;

fn context(safe_to_trade: bool, risk_score: f64) -> RiskContext {
    let mut context = RiskContext::permissive();
    context.safe_to_trade = safe_to_trade;
    context.risk_score = risk_score;
    context
}

/// Test that a high-risk context blocks entry through the full gate path.
#[tokio::test]
async fn test_high_risk_context_blocks_entry() {
    use gating_engine::{StaticContextSource, TradeGate};

    let source = Arc::new(StaticContextSource::new(context(true, 0.9)));
    let gate = TradeGate::new(source);

    assert!(!gate.confirm_entry("BTC-USD").await);

    let cached = gate.last_decision("BTC-USD").expect("decision cached");
    assert!(!cached.allow_entry);
    assert!(cached.size_multiplier >= 0.3);
}

/// Test that the gate decision matches a direct policy evaluation.
#[tokio::test]
async fn test_gate_decision_matches_policy() {
    use gating_engine::{GatePolicy, StaticContextSource, TradeGate};

    let ctx = context(true, 0.55);
    let gate = TradeGate::new(Arc::new(StaticContextSource::new(ctx.clone())));

    let via_gate = gate.evaluate("ETH-USD").await;
    let via_policy = GatePolicy::default().decide(&ctx);

    assert_eq!(via_gate, via_policy);
}

/// Test fail-open behavior against a server that accepts but never responds.
#[tokio::test]
async fn test_gate_fails_open_when_oracle_hangs() {
    use gating_engine::{GatePolicy, TradeGate};
    use riskgate_core::api::OracleClient;
    use riskgate_core::config::OracleConfig;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept connections and hold them open without ever answering
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = OracleClient::new(OracleConfig {
        base_url: format!("http://{}", addr),
        api_key: Some("secret-token".to_string()),
        timeout: Duration::from_millis(250),
    })
    .unwrap();

    let gate = TradeGate::new(Arc::new(client));
    let decision = gate.evaluate("BTC-USD").await;

    let permissive = GatePolicy::default().decide(&RiskContext::permissive());
    assert_eq!(decision, permissive);
    assert!(decision.allow_entry);
    assert_eq!(decision.size_multiplier, 1.0);
}

/// Test the request wire format and response decoding against a real socket.
#[tokio::test]
async fn test_oracle_request_carries_auth_and_instrument() {
    use riskgate_core::api::OracleClient;
    use riskgate_core::config::OracleConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel();

    // One-shot responder: capture the request head, reply with a fixed context
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let body = r#"{"safe_to_trade":false,"risk_score":0.82,"reasoning":["funding spike"],"risk_class":"high"}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        let _ = tx.send(String::from_utf8_lossy(&request).to_string());
    });

    let client = OracleClient::new(OracleConfig {
        base_url: format!("http://{}", addr),
        api_key: Some("secret-token".to_string()),
        timeout: Duration::from_secs(1),
    })
    .unwrap();

    let fetched = client.fetch_context("BTC-USD").await.unwrap();
    assert!(!fetched.safe_to_trade);
    assert_eq!(fetched.risk_score, 0.82);
    assert_eq!(fetched.reasoning, vec!["funding spike".to_string()]);
    assert!(fetched.extra.contains_key("risk_class"));

    let request = rx.await.unwrap().to_lowercase();
    assert!(request.contains("get /context?instrument=btc-usd"));
    assert!(request.contains("authorization: bearer secret-token"));
}

/// Test that a missing credential is a fatal configuration error.
#[test]
fn test_missing_credential_is_fatal_config_error() {
    use riskgate_core::api::OracleClient;
    use riskgate_core::config::OracleConfig;
    use riskgate_core::Error;

    let err = OracleClient::new(OracleConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: None,
        timeout: Duration::from_millis(250),
    })
    .unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(err.is_fatal());
    assert!(err.to_string().contains("RISK_ORACLE_API_KEY"));
}

/// Test stake scaling through the gate with the host's sizing band applied.
#[tokio::test]
async fn test_scale_stake_respects_band() {
    use gating_engine::{StaticContextSource, TradeGate};
    use rust_decimal::Decimal;

    // Maximum risk floors the multiplier, then the band floor applies
    let gate = TradeGate::new(Arc::new(StaticContextSource::new(context(true, 1.0))));
    let scaled = gate
        .scale_stake(
            "BTC-USD",
            Decimal::from(100),
            Decimal::from(50),
            Decimal::from(200),
        )
        .await;
    assert_eq!(scaled, Decimal::from(50));

    // Mid risk scales without hitting either bound
    let gate = TradeGate::new(Arc::new(StaticContextSource::new(context(true, 0.5))));
    let scaled = gate
        .scale_stake(
            "BTC-USD",
            Decimal::from(100),
            Decimal::from(10),
            Decimal::from(200),
        )
        .await;
    assert!(scaled > Decimal::from(64) && scaled < Decimal::from(66));
}

/// Test the full comparison pipeline from summary files to rendered report.
#[test]
fn test_compare_pipeline_from_files() {
    use backtest_compare::{compare, load_summary, render_report};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();

    let with_path = dir.path().join("with_gating.json");
    let mut with_file = std::fs::File::create(&with_path).unwrap();
    write!(
        with_file,
        r#"{{"total_trades": 40, "win_rate": 0.55, "profit_total_pct": 0.12, "max_drawdown": 0.08}}"#
    )
    .unwrap();

    let without_path = dir.path().join("without_gating.json");
    let mut without_file = std::fs::File::create(&without_path).unwrap();
    write!(
        without_file,
        r#"{{"total_trades": 100, "win_rate": 0.50, "profit_total_pct": 0.09, "max_drawdown": 0.15}}"#
    )
    .unwrap();

    let with_gating = load_summary(&with_path).unwrap();
    let without_gating = load_summary(&without_path).unwrap();
    let result = compare(&with_gating, &without_gating);

    let insights = &result.insights;
    assert!((insights.trade_reduction_pct.value - 60.0).abs() < 1e-9);
    assert!((insights.win_rate_delta.value - 0.05).abs() < 1e-9);
    assert!((insights.profit_delta.value - 0.03).abs() < 1e-9);
    assert!((insights.drawdown_improvement.value - 0.07).abs() < 1e-9);
    assert!(insights.trade_reduction_pct.improved);
    assert!(insights.win_rate_delta.improved);
    assert!(insights.profit_delta.improved);
    assert!(insights.drawdown_improvement.improved);

    let report = render_report(&result);
    assert!(report.contains("total_trades"));
    assert!(report.contains("max_drawdown"));
    assert!(report.contains("Trade reduction"));
}

/// Test that a missing summary file surfaces the offending path.
#[test]
fn test_missing_summary_file_reports_path() {
    use backtest_compare::{load_summary, InputError};

    let err = load_summary("/nonexistent/with_gating.json").unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/with_gating.json"));
}
