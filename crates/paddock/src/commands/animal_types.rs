//! Animal type command handlers.

use tabled::Tabled;

use paddock_api::{AnimalType, AnimalTypeCreate};
use paddock_core::Session;

use crate::cli::{AnimalTypesArgs, AnimalTypesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct AnimalTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name (EN)")]
    name_en: String,
    #[tabled(rename = "Name (AR)")]
    name_ar: String,
}

impl From<&AnimalType> for AnimalTypeRow {
    fn from(t: &AnimalType) -> Self {
        Self {
            id: t.id.to_string(),
            name_en: t.name_en.clone(),
            name_ar: t.name_ar.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: AnimalTypesArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        AnimalTypesCommand::List(list) => {
            let page = client
                .list_animal_types(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| AnimalTypeRow::from(x),
                |t| t.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        AnimalTypesCommand::Create { name_en, name_ar } => {
            util::required("name_en", &name_en)?;
            let body = AnimalTypeCreate { name_en, name_ar };
            let ack = client.create_animal_type(&body).await.map_err(err)?;
            util::print_ack(&ack, "Animal type created", global);
            Ok(())
        }

        AnimalTypesCommand::Update {
            id,
            name_en,
            name_ar,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = AnimalTypeCreate { name_en, name_ar };
            let ack = client.update_animal_type(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Animal type updated", global);
            Ok(())
        }

        AnimalTypesCommand::Delete { id } => {
            let type_id = util::parse_id("id", &id)?;
            if !util::confirm(
                &format!("Delete animal type {id}? Breeds under it will be orphaned."),
                global.yes,
            )? {
                return Ok(());
            }
            let ack = client.delete_animal_type(&type_id).await.map_err(err)?;
            util::print_ack(&ack, "Animal type deleted", global);
            Ok(())
        }
    }
}
