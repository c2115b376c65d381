//! Breed and animal-type endpoints.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{AnimalType, AnimalTypeCreate, Breed, BreedCreate, BreedUpdate};
use crate::{AdminClient, Error};

impl AdminClient {
    // ── Breeds ───────────────────────────────────────────────────────

    pub async fn list_breeds(&self, req: &ListRequest) -> Result<ListPage<Breed>, Error> {
        self.get_list("breeds", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn create_breed(&self, body: &BreedCreate) -> Result<MutationAck, Error> {
        self.post("breeds", body).await
    }

    pub async fn update_breed(&self, id: &Uuid, body: &BreedUpdate) -> Result<MutationAck, Error> {
        self.put(&format!("breeds/{id}"), body).await
    }

    pub async fn delete_breed(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("breeds/{id}")).await
    }

    // ── Animal types ─────────────────────────────────────────────────

    pub async fn list_animal_types(&self, req: &ListRequest) -> Result<ListPage<AnimalType>, Error> {
        self.get_list("animal-types", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn create_animal_type(&self, body: &AnimalTypeCreate) -> Result<MutationAck, Error> {
        self.post("animal-types", body).await
    }

    pub async fn update_animal_type(
        &self,
        id: &Uuid,
        body: &AnimalTypeCreate,
    ) -> Result<MutationAck, Error> {
        self.put(&format!("animal-types/{id}"), body).await
    }

    pub async fn delete_animal_type(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("animal-types/{id}")).await
    }
}
