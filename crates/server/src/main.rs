#[tokio::main]
async fn main() -> anyhow::Result<()> {
    playground_server::run().await
}
