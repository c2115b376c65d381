//! Home page slide command handlers.

use tabled::Tabled;

use paddock_api::{Slide, SlideFields};
use paddock_core::Session;

use crate::cli::{GlobalOpts, SlidesArgs, SlidesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SlideRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title (EN)")]
    title_en: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Order")]
    sort_order: u32,
    #[tabled(rename = "Visible")]
    visible: String,
}

impl From<&Slide> for SlideRow {
    fn from(s: &Slide) -> Self {
        Self {
            id: s.id.to_string(),
            title_en: s.title_en.clone().unwrap_or_default(),
            link: s.link_url.clone().unwrap_or_default(),
            sort_order: s.sort_order,
            visible: if s.is_visible { "yes" } else { "no" }.into(),
        }
    }
}

pub async fn handle(
    session: &Session,
    args: SlidesArgs,
    profile: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = session.client();
    let err = |e| CliError::from_api(e, profile, global.timeout);

    match args.command {
        SlidesCommand::List(list) => {
            let page = client
                .list_slides(&util::list_request(&list))
                .await
                .map_err(err)?;
            let out = output::render_list(
                &global.output,
                &page.rows,
                |x| SlideRow::from(x),
                |s| s.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            output::print_page_footer(global, &page.meta);
            Ok(())
        }

        SlidesCommand::Create {
            image,
            title_en,
            title_ar,
            link,
            sort,
        } => {
            let image_name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "slide".into());
            let bytes = std::fs::read(&image)?;
            let fields = SlideFields {
                title_en,
                title_ar,
                link_url: link,
                sort_order: sort,
            };
            let ack = client
                .create_slide(fields, &image_name, bytes)
                .await
                .map_err(err)?;
            util::print_ack(&ack, "Slide created", global);
            Ok(())
        }

        SlidesCommand::Update {
            id,
            title_en,
            title_ar,
            link,
            sort,
        } => {
            let id = util::parse_id("id", &id)?;
            let fields = SlideFields {
                title_en,
                title_ar,
                link_url: link,
                sort_order: sort,
            };
            let ack = client.update_slide(&id, fields).await.map_err(err)?;
            util::print_ack(&ack, "Slide updated", global);
            Ok(())
        }

        SlidesCommand::Show { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_slide_visible(&id, true).await.map_err(err)?;
            util::print_ack(&ack, "Slide is now visible", global);
            Ok(())
        }

        SlidesCommand::Hide { id } => {
            let id = util::parse_id("id", &id)?;
            let ack = client.set_slide_visible(&id, false).await.map_err(err)?;
            util::print_ack(&ack, "Slide is now hidden", global);
            Ok(())
        }

        SlidesCommand::Delete { id } => {
            let slide_id = util::parse_id("id", &id)?;
            if !util::confirm(&format!("Delete slide {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_slide(&slide_id).await.map_err(err)?;
            util::print_ack(&ack, "Slide deleted", global);
            Ok(())
        }
    }
}
