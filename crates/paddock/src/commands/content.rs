//! Legal content page command handlers.

use paddock_api::LegalPage;
use paddock_core::Session;

use crate::cli::{ContentArgs, ContentCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(page: &LegalPage) -> String {
    let mut out = format!("Slug: {}  Lang: {}", page.slug, page.lang);
    if let Some(updated) = page.updated_at {
        out.push_str(&format!("  Updated: {}", updated.to_rfc3339()));
    }
    out.push_str("\n\n");
    out.push_str(&page.body);
    out
}

pub async fn handle(
    session: &Session,
    args: ContentArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        ContentCommand::Get { slug, lang } => {
            let page = client.get_legal_page(&slug, &lang).await.map_err(err)?;
            let out =
                output::render_single(&global.output, &page, detail, |p| p.slug.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ContentCommand::Set { slug, lang, file } => {
            let body = std::fs::read_to_string(&file)?;
            if body.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "file".into(),
                    reason: "page body is empty".into(),
                });
            }
            let ack = client
                .put_legal_page(&slug, &lang, &body)
                .await
                .map_err(err)?;
            util::print_ack(&ack, &format!("Page '{slug}' ({lang}) updated"), global);
            Ok(())
        }
    }
}
