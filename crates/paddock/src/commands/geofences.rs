//! Geofence command handlers.

use tabled::Tabled;

use paddock_api::{GeoPoint, Geofence, GeofenceCreate};
use paddock_core::Session;

use crate::cli::{GeofencesArgs, GeofencesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct GeofenceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Vertices")]
    vertices: usize,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Geofence> for GeofenceRow {
    fn from(g: &Geofence) -> Self {
        Self {
            id: g.id.to_string(),
            name: g.name.clone(),
            vertices: g.points.len(),
            active: if g.is_active { "yes" } else { "no" }.into(),
        }
    }
}

/// Parse and sanity-check a vertices file. A polygon needs at least
/// three points.
fn load_points(path: &std::path::Path) -> Result<Vec<GeoPoint>, CliError> {
    let points: Vec<GeoPoint> = util::read_json_file("points", path)?;
    if points.len() < 3 {
        return Err(CliError::Validation {
            field: "points".into(),
            reason: format!("a geofence needs at least 3 vertices, got {}", points.len()),
        });
    }
    Ok(points)
}

pub async fn handle(
    session: &Session,
    args: GeofencesArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        GeofencesCommand::List(list) => {
            let page = client
                .list_geofences(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| GeofenceRow::from(x),
                |g| g.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        GeofencesCommand::Create {
            name,
            owner,
            points,
        } => {
            util::required("name", &name)?;
            let body = GeofenceCreate {
                name,
                owner_id: util::parse_opt_id("owner", owner.as_deref())?,
                points: load_points(&points)?,
            };
            let ack = client.create_geofence(&body).await.map_err(err)?;
            util::print_ack(&ack, "Geofence created", global);
            Ok(())
        }

        GeofencesCommand::Update {
            id,
            name,
            owner,
            points,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = GeofenceCreate {
                name,
                owner_id: util::parse_opt_id("owner", owner.as_deref())?,
                points: load_points(&points)?,
            };
            let ack = client.update_geofence(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Geofence updated", global);
            Ok(())
        }

        GeofencesCommand::Delete { id } => {
            let fence_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete geofence {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_geofence(&fence_id).await.map_err(err)?;
            util::print_ack(&ack, "Geofence deleted", global);
            Ok(())
        }
    }
}
