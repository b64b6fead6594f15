use tracing_subscriber::EnvFilter;

use std::error::Error;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_api=info,warn"));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    todo_api::rocket().launch().await?;

    Ok(())
}
