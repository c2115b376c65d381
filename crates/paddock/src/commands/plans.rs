//! Subscription plan command handlers.

use tabled::Tabled;

use paddock_api::{SubscriptionPlan, SubscriptionPlanCreate};
use paddock_core::Session;

use crate::cli::{GlobalOpts, PlansArgs, PlansCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name (EN)")]
    name_en: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Visible")]
    visible: String,
}

impl From<&SubscriptionPlan> for PlanRow {
    fn from(p: &SubscriptionPlan) -> Self {
        Self {
            id: p.id.to_string(),
            name_en: p.name_en.clone(),
            price: format!("{:.2}", p.price),
            duration: p
                .duration_days
                .map(|d| format!("{d} days"))
                .unwrap_or_default(),
            visible: if p.is_visible { "yes" } else { "no" }.into(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: PlansArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        PlansCommand::List(list) => {
            let page = client
                .list_plans(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| PlanRow::from(x),
                |p| p.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        PlansCommand::Create {
            name_en,
            name_ar,
            price,
            duration,
        } => {
            util::required("name_en", &name_en)?;
            let body = SubscriptionPlanCreate {
                name_en,
                name_ar,
                price,
                duration_days: duration,
            };
            let ack = client.create_plan(&body).await.map_err(err)?;
            util::print_ack(&ack, "Plan created", global);
            Ok(())
        }

        PlansCommand::Update {
            id,
            name_en,
            name_ar,
            price,
            duration,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = SubscriptionPlanCreate {
                name_en,
                name_ar,
                price,
                duration_days: duration,
            };
            let ack = client.update_plan(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Plan updated", global);
            Ok(())
        }

        PlansCommand::Show { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_plan_visible(&id, true).await.map_err(err)?;
            util::print_ack(&ack, "Plan is now visible", global);
            Ok(())
        }

        PlansCommand::Hide { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_plan_visible(&id, false).await.map_err(err)?;
            util::print_ack(&ack, "Plan is now hidden", global);
            Ok(())
        }

        PlansCommand::Delete { id } => {
            let plan_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete plan {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_plan(&plan_id).await.map_err(err)?;
            util::print_ack(&ack, "Plan deleted", global);
            Ok(())
        }
    }
}
