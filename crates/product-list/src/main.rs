use anyhow::{Context, Result};
use product_list::{
    confirm::StdinConfirmation,
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::route::Route,
    handler::{Command, render_metrics, render_text},
    notifier::ChannelNotifier,
};
use prometheus_client::registry::Registry;
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use std::{io, sync::Arc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

const HELP: &str = "commands: list | refresh | delete <id> | edit <id> | new | metrics | quit";

#[tokio::main]
async fn main() -> Result<()> {
    let (config, telemetry) = setup().context("Failed to setup application")?;

    let (notifier, mut feedback_rx) = ChannelNotifier::new();
    let mut registry = Registry::default();

    let di = DependenciesInject::new(
        &config,
        DependenciesInjectDeps {
            confirmation: Arc::new(StdinConfirmation),
            notifier: Arc::new(notifier),
        },
        &mut registry,
    )
    .context("Failed to initialize dependency injection container")?;

    let feedback_task = tokio::spawn(async move {
        while let Some(event) = feedback_rx.recv().await {
            println!("[{}] {}", event.severity, event.message);
        }
    });

    let render_task = spawn_renderer(&di);

    di.query.refetch().await;

    println!("{HELP}");
    run_commands(&di, &registry).await?;

    info!("🛑 Shutting down product list...");

    di.controller.view_handle().teardown();
    render_task.abort();
    feedback_task.abort();

    if let Err(e) = telemetry.shutdown().await {
        error!("Failed to shutdown telemetry: {e}");
    }

    Ok(())
}

fn setup() -> Result<(Config, Telemetry)> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new("product-list", config.otel_endpoint.clone());
    let logger_provider = telemetry.init_logger()?;
    let _tracer_provider = telemetry.init_tracer()?;

    init_logger(
        logger_provider,
        "product-list",
        config.log.is_dev,
        config.log.enable_file,
    )?;

    info!("🚀 Product list starting against {}", config.api_url);

    Ok((config, telemetry))
}

/// Re-prints the list whenever the query publishes a new snapshot.
fn spawn_renderer(di: &DependenciesInject) -> JoinHandle<()> {
    let mut rx = di.query.subscribe();
    let controller = di.controller.clone();

    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            print!("{}", render_text(&controller.render(&snapshot)));
        }
    })
}

async fn read_line() -> Result<Option<String>> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        Ok::<_, io::Error>((read > 0).then_some(line))
    })
    .await
    .context("stdin reader task failed")?
    .context("Failed to read from stdin")
}

async fn run_commands(di: &DependenciesInject, registry: &Registry) -> Result<()> {
    while let Some(line) = read_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::List => {
                print!("{}", render_text(&di.controller.render(&di.query.snapshot())));
            }
            Command::Refresh => di.query.refetch().await,
            Command::Delete(id) => start_delete(di, id).await,
            Command::Edit(id) => println!("→ {}", Route::EditProduct(id)),
            Command::New => println!("→ {}", Route::CreateProduct),
            Command::Metrics => print!("{}", render_metrics(registry)),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}

async fn start_delete(di: &DependenciesInject, id: i32) {
    let snapshot = di.query.snapshot();
    let Some(product) = snapshot
        .products()
        .and_then(|products| products.iter().find(|p| p.product_id == id))
        .cloned()
    else {
        println!("no product #{id} in the current list");
        return;
    };

    let task = di.controller.spawn_delete(product);

    // the confirmation prompt owns stdin until it is answered
    if let Ok(confirmed) = task.confirmed.await {
        debug!("Delete of product ID={id} confirmed: {confirmed}");
    }

    let handle = task.handle;
    tokio::spawn(async move {
        match handle.await {
            Ok(outcome) => debug!("Delete of product ID={id} finished: {outcome:?}"),
            Err(e) => error!("Delete task for product ID={id} failed: {e}"),
        }
    });
}
