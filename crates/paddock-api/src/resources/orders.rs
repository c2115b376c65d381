//! Order endpoints (read + status transitions only -- orders are
//! created by customers, never by the admin console).

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{Order, OrderStatus};
use crate::{AdminClient, Error};

impl AdminClient {
    pub async fn list_orders(&self, req: &ListRequest) -> Result<ListPage<Order>, Error> {
        self.get_list("orders", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn get_order(&self, id: &Uuid) -> Result<Order, Error> {
        self.get_one(&format!("orders/{id}")).await
    }

    pub async fn set_order_status(
        &self,
        id: &Uuid,
        status: OrderStatus,
    ) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        struct Body {
            status: OrderStatus,
        }
        self.patch(&format!("orders/{id}"), &Body { status }).await
    }
}
