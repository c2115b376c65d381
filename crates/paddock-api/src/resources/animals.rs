//! Animal endpoints, including the bulk CSV import.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{Animal, AnimalCreate, AnimalUpdate};
use crate::{AdminClient, Error};

impl AdminClient {
    pub async fn list_animals(&self, req: &ListRequest) -> Result<ListPage<Animal>, Error> {
        self.get_list("animals", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn get_animal(&self, id: &Uuid) -> Result<Animal, Error> {
        self.get_one(&format!("animals/{id}")).await
    }

    pub async fn create_animal(&self, body: &AnimalCreate) -> Result<MutationAck, Error> {
        self.post("animals", body).await
    }

    pub async fn update_animal(
        &self,
        id: &Uuid,
        body: &AnimalUpdate,
    ) -> Result<MutationAck, Error> {
        self.put(&format!("animals/{id}"), body).await
    }

    pub async fn delete_animal(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("animals/{id}")).await
    }

    /// Bulk-import animals from a CSV file. The returned ack carries an
    /// upload summary (created / skipped / per-row errors).
    pub async fn import_animals_csv(
        &self,
        filename: &str,
        csv_bytes: Vec<u8>,
    ) -> Result<MutationAck, Error> {
        let part = reqwest::multipart::Part::bytes(csv_bytes)
            .file_name(filename.to_owned())
            .mime_str("text/csv")
            .map_err(Error::Transport)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart("animals/import", form).await
    }
}
