// ── Session ──
//
// One Session per signed-in admin: the shared API client plus the
// process-wide loader gauge and alert queue. Screens and commands ask
// it for per-resource list controllers and a mutation executor; all of
// them share the same gauge, so concurrent operations aggregate into
// one busy indicator.

use futures_util::FutureExt;
use secrecy::SecretString;
use tracing::info;

use paddock_api::types::{
    Animal, AnimalType, Breed, DeliveryZone, Geofence, Order, SessionInfo, Slide,
    SubscriptionPlan, Tracker, User,
};
use paddock_api::{AdminClient, ListRequest, TlsMode, TransportConfig};

use crate::error::CoreError;
use crate::list::{ListController, ResourceLister};
use crate::mutation::MutationExecutor;
use crate::notify::{AlertQueue, LoaderGauge};

/// Connection parameters resolved from a profile.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub base_url: String,
    pub tls: TlsMode,
    pub timeout: std::time::Duration,
}

impl SessionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let defaults = TransportConfig::default();
        Self {
            base_url: base_url.into(),
            tls: defaults.tls,
            timeout: defaults.timeout,
        }
    }

    fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls.clone(),
            timeout: self.timeout,
        }
    }
}

/// Shared services for one signed-in admin. Cheap to clone.
#[derive(Clone)]
pub struct Session {
    client: AdminClient,
    gauge: LoaderGauge,
    alerts: AlertQueue,
}

impl Session {
    /// Build an unauthenticated session.
    pub fn new(config: &SessionConfig) -> Result<Self, CoreError> {
        let client = AdminClient::new(&config.base_url, &config.transport())?;
        Ok(Self::from_client(client))
    }

    /// Wrap an existing client (token already seeded, or tests).
    pub fn from_client(client: AdminClient) -> Self {
        Self {
            client,
            gauge: LoaderGauge::new(),
            alerts: AlertQueue::new(),
        }
    }

    /// Sign in; the bearer token stays inside the client.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SessionInfo, CoreError> {
        let info = self.client.login(email, password).await?;
        info!(role = ?info.role, "signed in");
        Ok(info)
    }

    pub async fn logout(&self) -> Result<(), CoreError> {
        self.client.logout().await?;
        Ok(())
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn gauge(&self) -> &LoaderGauge {
        &self.gauge
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn executor(&self) -> MutationExecutor {
        MutationExecutor::new(self.gauge.clone(), self.alerts.clone())
    }

    fn controller<T, L>(&self, lister: L) -> ListController<T>
    where
        T: Send + Sync + 'static,
        L: ResourceLister<T> + 'static,
    {
        ListController::new(Box::new(lister), self.gauge.clone(), self.alerts.clone())
    }

    // ── Per-resource controllers ────────────────────────────────────

    pub fn users(&self) -> ListController<User> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_users(&req).await }.boxed()
        })
    }

    pub fn animals(&self) -> ListController<Animal> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_animals(&req).await }.boxed()
        })
    }

    pub fn breeds(&self) -> ListController<Breed> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_breeds(&req).await }.boxed()
        })
    }

    pub fn animal_types(&self) -> ListController<AnimalType> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_animal_types(&req).await }.boxed()
        })
    }

    pub fn trackers(&self) -> ListController<Tracker> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_trackers(&req).await }.boxed()
        })
    }

    pub fn geofences(&self) -> ListController<Geofence> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_geofences(&req).await }.boxed()
        })
    }

    pub fn delivery_zones(&self) -> ListController<DeliveryZone> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_delivery_zones(&req).await }.boxed()
        })
    }

    pub fn orders(&self) -> ListController<Order> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_orders(&req).await }.boxed()
        })
    }

    pub fn plans(&self) -> ListController<SubscriptionPlan> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_plans(&req).await }.boxed()
        })
    }

    pub fn slides(&self) -> ListController<Slide> {
        let client = self.client.clone();
        self.controller(move |req: ListRequest| {
            let client = client.clone();
            async move { client.list_slides(&req).await }.boxed()
        })
    }
}
