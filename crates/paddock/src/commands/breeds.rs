//! Breed command handlers.

use tabled::Tabled;

use paddock_api::{Breed, BreedCreate, BreedUpdate};
use paddock_core::Session;

use crate::cli::{BreedsArgs, BreedsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct BreedRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name (EN)")]
    name_en: String,
    #[tabled(rename = "Name (AR)")]
    name_ar: String,
    #[tabled(rename = "Type")]
    animal_type: String,
}

impl From<&Breed> for BreedRow {
    fn from(b: &Breed) -> Self {
        Self {
            id: b.id.to_string(),
            name_en: b.name_en.clone(),
            name_ar: b.name_ar.clone().unwrap_or_default(),
            animal_type: b.animal_type_name.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: BreedsArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        BreedsCommand::List(list) => {
            let page = client
                .list_breeds(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| BreedRow::from(x),
                |b| b.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        BreedsCommand::Create {
            name_en,
            name_ar,
            animal_type,
        } => {
            util::required("name_en", &name_en)?;
            let body = BreedCreate {
                name_en,
                name_ar,
                animal_type_id: util::parse_id("type", &animal_type)?,
            };
            let ack = client.create_breed(&body).await.map_err(err)?;
            util::print_ack(&ack, "Breed created", global);
            Ok(())
        }

        BreedsCommand::Update {
            id,
            name_en,
            name_ar,
            animal_type,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = BreedUpdate {
                name_en,
                name_ar,
                animal_type_id: util::parse_opt_id("type", animal_type.as_deref())?,
            };
            let ack = client.update_breed(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Breed updated", global);
            Ok(())
        }

        BreedsCommand::Delete { id } => {
            let breed_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete breed {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_breed(&breed_id).await.map_err(err)?;
            util::print_ack(&ack, "Breed deleted", global);
            Ok(())
        }
    }
}
