//! GPS tracker and geofence endpoints.

use uuid::Uuid;

use crate::envelope::{ListPage, MutationAck};
use crate::request::ListRequest;
use crate::types::{Geofence, GeofenceCreate, Tracker, TrackerCreate, TrackerUpdate};
use crate::{AdminClient, Error};

impl AdminClient {
    // ── Trackers ─────────────────────────────────────────────────────

    pub async fn list_trackers(&self, req: &ListRequest) -> Result<ListPage<Tracker>, Error> {
        self.get_list("trackers", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn get_tracker(&self, id: &Uuid) -> Result<Tracker, Error> {
        self.get_one(&format!("trackers/{id}")).await
    }

    pub async fn create_tracker(&self, body: &TrackerCreate) -> Result<MutationAck, Error> {
        self.post("trackers", body).await
    }

    pub async fn update_tracker(
        &self,
        id: &Uuid,
        body: &TrackerUpdate,
    ) -> Result<MutationAck, Error> {
        self.put(&format!("trackers/{id}"), body).await
    }

    /// Activate or deactivate a tracker.
    pub async fn set_tracker_active(&self, id: &Uuid, active: bool) -> Result<MutationAck, Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            is_active: bool,
        }
        self.patch(&format!("trackers/{id}"), &Body { is_active: active })
            .await
    }

    pub async fn delete_tracker(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("trackers/{id}")).await
    }

    // ── Geofences ────────────────────────────────────────────────────

    pub async fn list_geofences(&self, req: &ListRequest) -> Result<ListPage<Geofence>, Error> {
        self.get_list("geofences", &req.encode(), req.page, req.limit)
            .await
    }

    pub async fn create_geofence(&self, body: &GeofenceCreate) -> Result<MutationAck, Error> {
        self.post("geofences", body).await
    }

    pub async fn update_geofence(
        &self,
        id: &Uuid,
        body: &GeofenceCreate,
    ) -> Result<MutationAck, Error> {
        self.put(&format!("geofences/{id}"), body).await
    }

    pub async fn delete_geofence(&self, id: &Uuid) -> Result<MutationAck, Error> {
        self.delete(&format!("geofences/{id}")).await
    }
}
