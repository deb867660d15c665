use imagedrop_core::Config;

// Use mimalloc as the global allocator for lower fragmentation, especially
// when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    imagedrop_api::init_tracing();

    // Load configuration; startup is fatal on missing required values.
    let config = Config::from_env()?;

    // Initialize the application (CA material, storage, recorder, routes)
    let (_state, router) = imagedrop_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    imagedrop_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
