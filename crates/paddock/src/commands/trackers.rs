//! GPS tracker command handlers.

use tabled::Tabled;

use paddock_api::{Tracker, TrackerCreate, TrackerUpdate};
use paddock_core::Session;

use crate::cli::{GlobalOpts, TrackersArgs, TrackersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct TrackerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Animal")]
    animal: String,
    #[tabled(rename = "Battery")]
    battery: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Tracker> for TrackerRow {
    fn from(t: &Tracker) -> Self {
        Self {
            id: t.id.to_string(),
            serial: t.serial_number.clone(),
            model: t.model.clone().unwrap_or_default(),
            animal: t.animal_name.clone().unwrap_or_default(),
            battery: t.battery_pct.map(|p| format!("{p}%")).unwrap_or_default(),
            active: if t.is_active { "yes" } else { "no" }.into(),
        }
    }
}

fn detail(t: &Tracker) -> String {
    let mut lines = vec![
        format!("ID:        {}", t.id),
        format!("Serial:    {}", t.serial_number),
        format!("Model:     {}", t.model.as_deref().unwrap_or("-")),
        format!("Active:    {}", t.is_active),
        format!("Animal:    {}", t.animal_name.as_deref().unwrap_or("-")),
    ];
    if let Some(pct) = t.battery_pct {
        lines.push(format!("Battery:   {pct}%"));
    }
    if let Some(seen) = t.last_seen_at {
        lines.push(format!("Last seen: {}", seen.to_rfc3339()));
    }
    lines.join("\n")
}

pub async fn handle(
    session: &Session,
    args: TrackersArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        TrackersCommand::List(list) => {
            let page = client
                .list_trackers(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| TrackerRow::from(x),
                |t| t.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        TrackersCommand::Get { id } => {
            let id = util::parse_id("id", &id)?;
            let tracker = client.get_tracker(&id).await.map_err(err)?;
            let out =
                output::render_single(&global.output, &tracker, detail, |t| t.id.to_string())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TrackersCommand::Create { serial, model } => {
            util::required("serial", &serial)?;
            let body = TrackerCreate {
                serial_number: serial,
                model,
            };
            let ack = client.create_tracker(&body).await.map_err(err)?;
            util::print_ack(&ack, "Tracker registered", global);
            Ok(())
        }

        TrackersCommand::Update { id, model, animal } => {
            let id = util::parse_id("id", &id)?;
            let body = TrackerUpdate {
                model,
                animal_id: util::parse_opt_id("animal", animal.as_deref())?,
            };
            let ack = client.update_tracker(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Tracker updated", global);
            Ok(())
        }

        TrackersCommand::Enable { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_tracker_active(&id, true).await.map_err(err)?;
            util::print_ack(&ack, "Tracker activated", global);
            Ok(())
        }

        TrackersCommand::Disable { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_tracker_active(&id, false).await.map_err(err)?;
            util::print_ack(&ack, "Tracker deactivated", global);
            Ok(())
        }

        TrackersCommand::Delete { id } => {
            let tracker_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete tracker {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_tracker(&tracker_id).await.map_err(err)?;
            util::print_ack(&ack, "Tracker deleted", global);
            Ok(())
        }
    }
}
