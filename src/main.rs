use clap::Parser;
use order_desk::utils::error::ErrorSeverity;
use order_desk::utils::{logger, validation::Validate};
use order_desk::{
    import_orders_file, CliConfig, OrderDeskError, OrderService, OrderStore, ScenarioScript,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting order-desk");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let script = match ScenarioScript::from_file(&config.script) {
        Ok(script) => script,
        Err(e) => {
            tracing::error!("Failed to load scenario '{}': {}", config.script, e);
            exit_with(&e);
        }
    };
    if let Err(e) = script.validate() {
        tracing::error!("Scenario validation failed: {}", e);
        exit_with(&e);
    }

    let strict = config.strict || script.settings.strict_assignment;
    tracing::info!(
        scenario = %script.settings.name,
        steps = script.steps.len(),
        strict,
        "Scenario loaded"
    );

    let mut store = OrderStore::new();
    if let Some(seed) = &config.seed {
        match import_orders_file(&mut store, seed) {
            Ok(summary) => tracing::info!("Seeded {} orders from {}", summary.orders, seed),
            Err(e) => {
                tracing::error!("Failed to seed from '{}': {}", seed, e);
                exit_with(&e);
            }
        }
    }

    let mut service = OrderService::new(store).with_strict_assignment(strict);

    for (index, step) in script.steps.into_iter().enumerate() {
        let op = step.name();
        match service.execute(step) {
            Ok(response) => match response.to_json(config.pretty) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    tracing::error!("Step {} ({}) output could not be rendered: {}", index, op, e);
                    exit_with(&e);
                }
            },
            Err(e) => {
                tracing::error!(
                    "Step {} ({}) failed: {} (Severity: {:?})",
                    index,
                    op,
                    e,
                    e.severity()
                );
                exit_with(&e);
            }
        }
    }

    let store = service.into_repository();
    tracing::info!(
        orders = store.order_count(),
        partners = store.partner_count(),
        unassigned = store.count_unassigned_orders(),
        "Scenario finished"
    );

    Ok(())
}

fn exit_with(e: &OrderDeskError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
