pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_import::{import_orders, import_orders_file, ImportSummary};
pub use config::ScenarioScript;
pub use crate::core::{
    command::{Command, Response},
    service::OrderService,
    shared::SharedOrderStore,
    store::OrderStore,
};
pub use domain::{
    model::{DeliveryTime, Order, Partner},
    ports::OrderRepository,
};
pub use utils::error::{OrderDeskError, Result};
