#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tile_match_terminal::run().await
}
