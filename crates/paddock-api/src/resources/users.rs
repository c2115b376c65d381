//! User endpoints.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{User, UserCreate, UserUpdate};
use crate::{AdminClient, Error};

impl AdminClient {
    pub async fn list_users(&self, req: &ListRequest) -> Result<ListPage<User>, Error> {
        self.get_list("users", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn get_user(&self, id: &Uuid) -> Result<User, Error> {
        self.get_one(&format!("users/{id}")).await
    }

    pub async fn create_user(&self, body: &UserCreate) -> Result<MutationAck, Error> {
        self.post("users", body).await
    }

    pub async fn update_user(&self, id: &Uuid, body: &UserUpdate) -> Result<MutationAck, Error> {
        self.put(&format!("users/{id}"), body).await
    }

    /// Activate or deactivate a user account.
    pub async fn set_user_active(&self, id: &Uuid, active: bool) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            is_active: bool,
        }
        self.patch(&format!("users/{id}"), &Body { is_active: active })
            .await
    }

    pub async fn delete_user(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("users/{id}")).await
    }
}
