//! Delivery zone command handlers.

use tabled::Tabled;

use paddock_api::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};
use paddock_core::Session;

use crate::cli::{GlobalOpts, ZonesArgs, ZonesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name (EN)")]
    name_en: String,
    #[tabled(rename = "Name (AR)")]
    name_ar: String,
    #[tabled(rename = "Fee")]
    fee: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&DeliveryZone> for ZoneRow {
    fn from(z: &DeliveryZone) -> Self {
        Self {
            id: z.id.to_string(),
            name_en: z.name_en.clone(),
            name_ar: z.name_ar.clone().unwrap_or_default(),
            fee: z.delivery_fee.map(|f| format!("{f:.2}")).unwrap_or_default(),
            active: if z.is_active { "yes" } else { "no" }.into(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: ZonesArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        ZonesCommand::List(list) => {
            let page = client
                .list_delivery_zones(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| ZoneRow::from(x),
                |z| z.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        ZonesCommand::Create {
            name_en,
            name_ar,
            fee,
        } => {
            util::required("name_en", &name_en)?;
            let body = DeliveryZoneCreate {
                name_en,
                name_ar,
                delivery_fee: fee,
            };
            let ack = client.create_delivery_zone(&body).await.map_err(err)?;
            util::print_ack(&ack, "Delivery zone created", global);
            Ok(())
        }

        ZonesCommand::Update {
            id,
            name_en,
            name_ar,
            fee,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = DeliveryZoneUpdate {
                name_en,
                name_ar,
                delivery_fee: fee,
            };
            let ack = client.update_delivery_zone(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Delivery zone updated", global);
            Ok(())
        }

        ZonesCommand::Enable { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client
                .set_delivery_zone_active(&id, true)
                .await
                .map_err(err)?;
            util::print_ack(&ack, "Delivery zone enabled", global);
            Ok(())
        }

        ZonesCommand::Disable { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client
                .set_delivery_zone_active(&id, false)
                .await
                .map_err(err)?;
            util::print_ack(&ack, "Delivery zone disabled", global);
            Ok(())
        }

        ZonesCommand::Delete { id } => {
            let zone_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete delivery zone {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_delivery_zone(&zone_id).await.map_err(err)?;
            util::print_ack(&ack, "Delivery zone deleted", global);
            Ok(())
        }
    }
}
