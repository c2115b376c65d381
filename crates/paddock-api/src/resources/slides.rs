//! Site slide endpoints. Creation is multipart because every slide
//! carries an image.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::Slide;
use crate::{AdminClient, Error};

/// Text fields of a slide create/update, sent alongside the image part.
#[derive(Debug, Clone, Default)]
pub struct SlideFields {
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: Option<u32>,
}

impl SlideFields {
    fn apply(self, mut form: reqwest::multipart::Form) -> reqwest::multipart::Form {
        if let Some(v) = self.title_en {
            form = form.text("titleEn", v);
        }
        if let Some(v) = self.title_ar {
            form = form.text("titleAr", v);
        }
        if let Some(v) = self.link_url {
            form = form.text("linkUrl", v);
        }
        if let Some(v) = self.sort_order {
            form = form.text("sortOrder", v.to_string());
        }
        form
    }
}

impl AdminClient {
    pub async fn list_slides(&self, req: &ListRequest) -> Result<ListPage<Slide>, Error> {
        self.get_list("slides", &req.encode(), req.page, req.limit)
            .await
    }

    /// Create a slide from text fields plus an image file.
    pub async fn create_slide(
        &self,
        fields: SlideFields,
        image_name: &str,
        image_bytes: Vec<u8>,
    ) -> Result<MutationAck, Error> {
        let part = reqwest::multipart::Part::bytes(image_bytes)
            .file_name(image_name.to_owned());
        let form = fields.apply(reqwest::multipart::Form::new().part("image", part));
        self.post_multipart("slides", form).await
    }

    /// Update a slide's text fields (image unchanged).
    pub async fn update_slide(&self, id: &Uuid, fields: SlideFields) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            #[serde(skip_serializing_if = "Option::is_none")]
            title_en: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            title_ar: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            link_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<u32>,
        }
        self.put(
            &format!("slides/{id}"),
            &Body {
                title_en: fields.title_en,
                title_ar: fields.title_ar,
                link_url: fields.link_url,
                sort_order: fields.sort_order,
            },
        )
        .await
    }

    pub async fn set_slide_visible(&self, id: &Uuid, visible: bool) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            is_visible: bool,
        }
        self.patch(&format!("slides/{id}"), &Body { is_visible: visible })
            .await
    }

    pub async fn delete_slide(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("slides/{id}")).await
    }
}
