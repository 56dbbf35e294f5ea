use mangashelf::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("mangashelf".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    mangashelf::run().await
}
