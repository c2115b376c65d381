//! Delivery zone endpoints.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};
use crate::{AdminClient, Error};

impl AdminClient {
    pub async fn list_delivery_zones(
        &self,
        req: &ListRequest,
    ) -> Result<ListPage<DeliveryZone>, Error> {
        self.get_list("delivery-zones", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn create_delivery_zone(
        &self,
        body: &DeliveryZoneCreate,
    ) -> Result<MutationAck, Error> {
        self.post("delivery-zones", body).await
    }

    pub async fn update_delivery_zone(
        &self,
        id: &Uuid,
        body: &DeliveryZoneUpdate,
    ) -> Result<MutationAck, Error> {
        self.put(&format!("delivery-zones/{id}"), body).await
    }

    /// Flip a zone's active flag. Sends a single PUT carrying the
    /// desired boolean.
    pub async fn set_delivery_zone_active(
        &self,
        id: &Uuid,
        active: bool,
    ) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            is_active: bool,
        }
        self.put(&format!("delivery-zones/{id}"), &Body { is_active: active })
            .await
    }

    pub async fn delete_delivery_zone(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("delivery-zones/{id}")).await
    }
}
