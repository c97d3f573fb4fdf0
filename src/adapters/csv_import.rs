use crate::domain::model::Order;
use crate::domain::ports::OrderRepository;
use crate::utils::error::{OrderDeskError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct OrderRow {
    order_id: String,
    delivery_time: String,
    #[serde(default)]
    partner_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub orders: usize,
    pub partners: usize,
    pub assignments: usize,
}

/// Seeds a repository from CSV with header `order_id,delivery_time[,partner_id]`.
///
/// Rows are checked up front: one blank order id or malformed time aborts the import before
/// anything is written.
pub fn import_orders<R: OrderRepository, T: Read>(
    repository: &mut R,
    reader: T,
) -> Result<ImportSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, record) in csv_reader.deserialize::<OrderRow>().enumerate() {
        let row = record?;
        validate_non_empty_string(&format!("row {}", line + 1), &row.order_id)?;
        let order = Order::new(row.order_id, &row.delivery_time).map_err(|e| {
            OrderDeskError::InvalidConfigValueError {
                field: format!("row {}", line + 1),
                value: row.delivery_time.clone(),
                reason: e.to_string(),
            }
        })?;
        let partner_id = row.partner_id.filter(|p| !p.is_empty());
        rows.push((order, partner_id));
    }

    let mut summary = ImportSummary::default();
    for (order, partner_id) in rows {
        let order_id = order.id().to_string();
        repository.add_order(order);
        summary.orders += 1;

        if let Some(partner_id) = partner_id {
            if repository.partner_by_id(&partner_id).is_none() {
                repository.add_partner(&partner_id);
                summary.partners += 1;
            }
            if repository.assign_order_to_partner(&order_id, &partner_id) {
                summary.assignments += 1;
            }
        }
    }

    tracing::info!(
        orders = summary.orders,
        partners = summary.partners,
        assignments = summary.assignments,
        "Imported orders from CSV"
    );
    Ok(summary)
}

pub fn import_orders_file<R: OrderRepository, P: AsRef<Path>>(
    repository: &mut R,
    path: P,
) -> Result<ImportSummary> {
    let file = std::fs::File::open(path)?;
    import_orders(repository, file)
}
