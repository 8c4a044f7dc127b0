//! Command-line stand-in for the playground UI.
//!
//! Reads the dashboard, optionally submits a message, and re-reads the
//! dashboard after a successful mutation the way the UI refetches. On
//! validation failure the field-level detail from the error extensions is
//! printed instead of the top-level error text.
//!
//! ```bash
//! cargo run --example demo_client -- "hello from the CLI"
//! ```

use serde::Serialize;
use serde_json::{json, Value};

const DASHBOARD_QUERY: &str = "query DashboardData { hello messages serverTime }";
const ADD_MESSAGE: &str =
    "mutation AddMessage($message: String!) { addMessage(message: $message) }";

/// Request envelope accepted by the GraphQL endpoint.
#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

async fn execute(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    variables: Value,
) -> anyhow::Result<Value> {
    let response = client
        .post(endpoint)
        .json(&GraphQlRequest { query, variables })
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

fn print_dashboard(body: &Value) {
    println!("server time: {}", body["data"]["serverTime"].as_str().unwrap_or("?"));
    println!("greeting:    {}", body["data"]["hello"].as_str().unwrap_or("?"));
    println!("messages:");
    if let Some(messages) = body["data"]["messages"].as_array() {
        for message in messages {
            println!("  - {}", message.as_str().unwrap_or("?"));
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let endpoint = std::env::var("PLAYGROUND_URL")
        .unwrap_or_else(|_| "http://localhost:3001/api/graphql".to_string());
    let client = reqwest::Client::new();

    let dashboard = execute(&client, &endpoint, DASHBOARD_QUERY, json!({})).await?;
    print_dashboard(&dashboard);

    let Some(message) = std::env::args().nth(1) else {
        return Ok(());
    };

    println!();
    let body = execute(&client, &endpoint, ADD_MESSAGE, json!({ "message": message })).await?;
    if let Some(errors) = body["errors"].as_array() {
        for error in errors {
            let code = error["extensions"]["code"].as_str().unwrap_or("UNKNOWN");
            let detail = error["extensions"]["fields"]["message"]
                .as_str()
                .or_else(|| error["message"].as_str())
                .unwrap_or("unknown error");
            println!("rejected ({code}): {detail}");
        }
        return Ok(());
    }

    let dashboard = execute(&client, &endpoint, DASHBOARD_QUERY, json!({})).await?;
    print_dashboard(&dashboard);
    Ok(())
}
