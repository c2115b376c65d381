//! Store order command handlers.

use tabled::Tabled;

use paddock_api::{Order, OrderStatus};
use paddock_core::Session;

use crate::cli::{GlobalOpts, OrderStatusArg, OrdersArgs, OrdersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<OrderStatusArg> for OrderStatus {
    fn from(arg: OrderStatusArg) -> Self {
        match arg {
            OrderStatusArg::Pending => Self::Pending,
            OrderStatusArg::Confirmed => Self::Confirmed,
            OrderStatusArg::Preparing => Self::Preparing,
            OrderStatusArg::OutForDelivery => Self::OutForDelivery,
            OrderStatusArg::Delivered => Self::Delivered,
            OrderStatusArg::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Zone")]
    zone: String,
}

impl From<&Order> for OrderRow {
    fn from(o: &Order) -> Self {
        Self {
            id: o.id.to_string(),
            number: o.order_number.clone().unwrap_or_default(),
            customer: o.customer_name.clone().unwrap_or_default(),
            status: o.status.as_str().into(),
            total: o.total.map(|t| format!("{t:.2}")).unwrap_or_default(),
            zone: o.zone_name.clone().unwrap_or_default(),
        }
    }
}

fn detail(o: &Order) -> String {
    let mut lines = vec![
        format!("ID:        {}", o.id),
        format!("Number:    {}", o.order_number.as_deref().unwrap_or("-")),
        format!("Customer:  {}", o.customer_name.as_deref().unwrap_or("-")),
        format!("Status:    {}", o.status.as_str()),
        format!(
            "Total:     {}",
            o.total.map_or_else(|| "-".into(), |t| format!("{t:.2}"))
        ),
        format!("Zone:      {}", o.zone_name.as_deref().unwrap_or("-")),
    ];
    if let Some(created) = o.created_at {
        lines.push(format!("Placed:    {}", created.to_rfc3339()));
    }
    lines.join("\n")
}

pub async fn handle(
    session: &Session,
    args: OrdersArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        OrdersCommand::List { list, status } => {
            let req = util::list_request(&list).opt_param(
                "status",
                status.map(|s| OrderStatus::from(s).as_str().to_owned()),
            );
            let page = client.list_orders(&req).await.map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| OrderRow::from(x),
                |o| o.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        OrdersCommand::Get { id } => {
            let id = util::parse_id("id", &id)?;
            let order = client.get_order(&id).await.map_err(err)?;
            let out = output::render_single(&global.output, &order, detail, |o| o.id.to_string())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::SetStatus { id, status } => {
            let order_id = util::parse_id("id", &id)?;
            let status = OrderStatus::from(status);
            if matches!(status, OrderStatus::Cancelled)
                && !util::confirm(&format!("Cancel order {id}?"), global.yes)?
            {
                return Ok(());
            }
            let ack = client
                .set_order_status(&order_id, status)
                .await
                .map_err(err)?;
            util::print_ack(&ack, &format!("Order moved to {}", status.as_str()), global);
            Ok(())
        }
    }
}
