#[tokio::main]
async fn main() -> anyhow::Result<()> {
    boardgamers::cli::run().await
}
