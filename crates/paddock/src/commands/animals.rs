//! Animal command handlers, including CSV bulk import.

use tabled::Tabled;

use paddock_api::{Animal, AnimalCreate, AnimalUpdate};
use paddock_core::Session;

use crate::cli::{AnimalsArgs, AnimalsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AnimalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Type")]
    animal_type: String,
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Owner")]
    owner: String,
}

impl From<&Animal> for AnimalRow {
    fn from(a: &Animal) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone().unwrap_or_default(),
            tag: a.tag_number.clone().unwrap_or_default(),
            animal_type: a.animal_type_name.clone().unwrap_or_default(),
            breed: a.breed_name.clone().unwrap_or_default(),
            owner: a.owner_name.clone().unwrap_or_default(),
        }
    }
}

fn detail(a: &Animal) -> String {
    let mut lines = vec![
        format!("ID:       {}", a.id),
        format!("Name:     {}", a.name.as_deref().unwrap_or("-")),
        format!("Tag:      {}", a.tag_number.as_deref().unwrap_or("-")),
        format!("Type:     {}", a.animal_type_name.as_deref().unwrap_or("-")),
        format!("Breed:    {}", a.breed_name.as_deref().unwrap_or("-")),
        format!("Owner:    {}", a.owner_name.as_deref().unwrap_or("-")),
        format!("Gender:   {}", a.gender.as_deref().unwrap_or("-")),
    ];
    if let Some(birth) = a.birth_date {
        lines.push(format!("Born:     {}", birth.format("%Y-%m-%d")));
    }
    if let Some(tracker) = a.tracker_id {
        lines.push(format!("Tracker:  {tracker}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: AnimalsArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        AnimalsCommand::List {
            list,
            animal_type,
            breed,
            owner,
        } => {
            let req = util::list_request(&list)
                .opt_param("animalTypeId", animal_type)
                .opt_param("breedId", breed)
                .opt_param("ownerId", owner);
            let page = client.list_animals(&req).await.map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| AnimalRow::from(x),
                |a| a.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        AnimalsCommand::Get { id } => {
            let id = util::parse_id("id", &id)?;
            let animal = client.get_animal(&id).await.map_err(err)?;
            let out = output::render_single(&global.output, &animal, detail, |a| a.id.to_string())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AnimalsCommand::Create {
            name,
            animal_type,
            breed,
            owner,
            tag,
            gender,
        } => {
            util::required("name", &name)?;
            let body = AnimalCreate {
                name,
                animal_type_id: util::parse_id("type", &animal_type)?,
                breed_id: util::parse_opt_id("breed", breed.as_deref())?,
                owner_id: util::parse_opt_id("owner", owner.as_deref())?,
                tag_number: tag,
                gender,
                birth_date: None,
            };
            let ack = client.create_animal(&body).await.map_err(err)?;
            util::print_ack(&ack, "Animal registered", global);
            Ok(())
        }

        AnimalsCommand::Update {
            id,
            name,
            breed,
            tag,
            gender,
            tracker,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = AnimalUpdate {
                name,
                breed_id: util::parse_opt_id("breed", breed.as_deref())?,
                tag_number: tag,
                gender,
                tracker_id: util::parse_opt_id("tracker", tracker.as_deref())?,
            };
            let ack = client.update_animal(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "Animal updated", global);
            Ok(())
        }

        AnimalsCommand::Delete { id } => {
            let animal_id = util::parse_id("id", &id)?;
            if !util::confirm(
                &format!("Delete animal {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            let ack = client.delete_animal(&animal_id).await.map_err(err)?;
            util::print_ack(&ack, "Animal deleted", global);
            Ok(())
        }

        AnimalsCommand::Import { file } => {
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "import.csv".into());
            let bytes = std::fs::read(&file)?;
            let ack = client
                .import_animals_csv(&filename, bytes)
                .await
                .map_err(err)?;
            util::print_ack(&ack, "Import complete", global);
            Ok(())
        }
    }
}
