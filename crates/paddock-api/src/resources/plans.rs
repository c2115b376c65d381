//! Subscription plan endpoints.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{SubscriptionPlan, SubscriptionPlanCreate};
use crate::{AdminClient, Error};

impl AdminClient {
    pub async fn list_plans(&self, req: &ListRequest) -> Result<ListPage<SubscriptionPlan>, Error> {
        self.get_list("plans", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn create_plan(&self, body: &SubscriptionPlanCreate) -> Result<MutationAck, Error> {
        self.post("plans", body).await
    }

    pub async fn update_plan(
        &self,
        id: &Uuid,
        body: &SubscriptionPlanCreate,
    ) -> Result<MutationAck, Error> {
        self.put(&format!("plans/{id}"), body).await
    }

    /// Show or hide a plan on the storefront.
    pub async fn set_plan_visible(&self, id: &Uuid, visible: bool) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            is_visible: bool,
        }
        self.patch(&format!("plans/{id}"), &Body { is_visible: visible })
            .await
    }

    pub async fn delete_plan(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("plans/{id}")).await
    }
}
