#[tokio::main]
async fn main() {
    availability_backend::run().await;
}
