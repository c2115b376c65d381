//! Legal page content (terms, privacy) stored per slug and language.

use crate::envelope::MutationAck;
use crate::types::LegalPage;
use crate::{AdminClient, Error};

impl AdminClient {
    /// Fetch a legal page body for one language.
    pub async fn get_legal_page(&self, slug: &str, lang: &str) -> Result<LegalPage, Error> {
        self.get_one(&format!("content/{slug}?lang={lang}")).await
    }

    /// Replace a legal page body for one language.
    pub async fn put_legal_page(
        &self,
        slug: &str,
        lang: &str,
        body: &str,
    ) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            lang: &'a str,
            body: &'a str,
        }
        self.put(&format!("content/{slug}"), &Body { lang, body })
            .await
    }
}
