//! User account command handlers.

use tabled::Tabled;

use paddock_api::{User, UserCreate, UserUpdate};
use paddock_core::Session;

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email.clone(),
            name: u.name.clone().unwrap_or_default(),
            role: u.role.clone().unwrap_or_default(),
            active: if u.is_active { "yes" } else { "no" }.into(),
        }
    }
}

fn detail(u: &User) -> String {
    let mut lines = vec![
        format!("ID:       {}", u.id),
        format!("Email:    {}", u.email),
        format!("Name:     {}", u.name.as_deref().unwrap_or("-")),
        format!("Phone:    {}", u.phone.as_deref().unwrap_or("-")),
        format!("Role:     {}", u.role.as_deref().unwrap_or("-")),
        format!("Active:   {}", u.is_active),
    ];
    if let Some(created) = u.created_at {
        lines.push(format!("Created:  {}", created.to_rfc3339()));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: UsersArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        UsersCommand::List(list) => {
            let page = client.list_users(&util::list_request(&list)).await.map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| UserRow::from(x),
                |u| u.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        UsersCommand::Get { id } => {
            let id = util::parse_id("id", &id)?;
            let user = client.get_user(&id).await.map_err(err)?;
            let out = output::render_single(&global.output, &user, detail, |u| u.id.to_string())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            email,
            name,
            phone,
            role,
        } => {
            util::required("email", &email)?;
            let password = rpassword::prompt_password("Initial password: ")?;
            let body = UserCreate {
                email,
                name,
                phone,
                role,
                password,
            };
            let ack = client.create_user(&body).await.map_err(err)?;
            util::print_ack(&ack, "User created", global);
            Ok(())
        }

        UsersCommand::Update {
            id,
            email,
            name,
            phone,
            role,
        } => {
            let id = util::parse_id("id", &id)?;
            let body = UserUpdate {
                email,
                name,
                phone,
                role,
            };
            let ack = client.update_user(&id, &body).await.map_err(err)?;
            util::print_ack(&ack, "User updated", global);
            Ok(())
        }

        UsersCommand::Enable { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_user_active(&id, true).await.map_err(err)?;
            util::print_ack(&ack, "User enabled", global);
            Ok(())
        }

        UsersCommand::Disable { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_user_active(&id, false).await.map_err(err)?;
            util::print_ack(&ack, "User disabled", global);
            Ok(())
        }

        UsersCommand::Delete { id } => {
            let user_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete user {id}? This cannot be undone."), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_user(&user_id).await.map_err(err)?;
            util::print_ack(&ack, "User deleted", global);
            Ok(())
        }
    }
}
