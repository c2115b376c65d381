//! Screen registry: one resource screen per admin endpoint, all built
//! from the shared [`ResourceConfig`] shape, plus the legal-content
//! preview.

pub mod content;
pub mod resource;

use std::sync::Arc;

use futures_util::FutureExt;

use paddock_api::types::{
    Animal, AnimalType, Breed, DeliveryZone, Geofence, Order, OrderStatus, Slide,
    SubscriptionPlan, Tracker, User,
};
use paddock_core::{Column, ColumnWidth, Session};

use crate::component::Component;
use crate::screen::ScreenId;
use crate::screens::content::ContentScreen;
use crate::screens::resource::{ResourceConfig, ResourceScreen, RowCommand};

/// Build every screen for a signed-in session, in tab order.
pub fn create_screens(session: &Session) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Animals, animals_screen(session)),
        (ScreenId::Users, users_screen(session)),
        (ScreenId::Breeds, breeds_screen(session)),
        (ScreenId::Types, animal_types_screen(session)),
        (ScreenId::Trackers, trackers_screen(session)),
        (ScreenId::Fences, geofences_screen(session)),
        (ScreenId::Zones, zones_screen(session)),
        (ScreenId::Orders, orders_screen(session)),
        (ScreenId::Plans, plans_screen(session)),
        (ScreenId::Slides, slides_screen(session)),
        (ScreenId::Pages, Box::new(ContentScreen::new(session))),
    ]
}

// ── Formatting helpers ──────────────────────────────────────────────

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_owned())
}

fn date(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value.map_or_else(|| "-".to_owned(), |t| t.format("%Y-%m-%d").to_string())
}

fn yes_no(value: bool) -> String {
    if value { "yes".to_owned() } else { "no".to_owned() }
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

// ── Per-resource screens ────────────────────────────────────────────

fn animals_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let config = ResourceConfig::<Animal> {
        id: ScreenId::Animals,
        columns: vec![
            Column::new("name", "Name"),
            Column::new("tagNumber", "Tag").width(ColumnWidth::Fixed(12)),
            Column::new("animalTypeName", "Type"),
            Column::new("breedName", "Breed"),
            Column::new("ownerName", "Owner"),
        ],
        sort_keys: vec!["name", "createdAt"],
        empty_message: "no animals match the current filters",
        label: Arc::new(|a: &Animal| {
            a.name
                .clone()
                .or_else(|| a.tag_number.clone())
                .unwrap_or_else(|| a.id.to_string())
        }),
        detail: Arc::new(|a: &Animal| {
            vec![
                ("ID".to_owned(), a.id.to_string()),
                ("Name".to_owned(), text(&a.name)),
                ("Tag".to_owned(), text(&a.tag_number)),
                ("Type".to_owned(), text(&a.animal_type_name)),
                ("Breed".to_owned(), text(&a.breed_name)),
                ("Owner".to_owned(), text(&a.owner_name)),
                ("Gender".to_owned(), text(&a.gender)),
                ("Born".to_owned(), date(a.birth_date)),
                (
                    "Tracker".to_owned(),
                    a.tracker_id
                        .map_or_else(|| "-".to_owned(), |id| id.to_string()),
                ),
                ("Created".to_owned(), date(a.created_at)),
            ]
        }),
        delete: Some(Arc::new(move |a: Animal| {
            let client = del.clone();
            async move { client.delete_animal(&a.id).await }.boxed()
        })),
        toggle: None,
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.animals(),
        session.executor(),
    ))
}

fn users_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let tog = session.client().clone();
    let config = ResourceConfig::<User> {
        id: ScreenId::Users,
        columns: vec![
            Column::new("email", "Email"),
            Column::new("name", "Name"),
            Column::new("role", "Role").width(ColumnWidth::Fixed(10)),
            Column::new("isActive", "Active").width(ColumnWidth::Fixed(6)),
        ],
        sort_keys: vec!["email", "name", "createdAt"],
        empty_message: "no users match the current filters",
        label: Arc::new(|u: &User| u.email.clone()),
        detail: Arc::new(|u: &User| {
            vec![
                ("ID".to_owned(), u.id.to_string()),
                ("Email".to_owned(), u.email.clone()),
                ("Name".to_owned(), text(&u.name)),
                ("Phone".to_owned(), text(&u.phone)),
                ("Role".to_owned(), text(&u.role)),
                ("Active".to_owned(), yes_no(u.is_active)),
                ("Created".to_owned(), date(u.created_at)),
            ]
        }),
        delete: Some(Arc::new(move |u: User| {
            let client = del.clone();
            async move { client.delete_user(&u.id).await }.boxed()
        })),
        toggle: Some(RowCommand {
            verb: "toggle active",
            done: "User updated",
            run: Arc::new(move |u: &User| {
                let client = tog.clone();
                let id = u.id;
                let active = u.is_active;
                async move { client.set_user_active(&id, !active).await }.boxed()
            }),
        }),
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.users(),
        session.executor(),
    ))
}

fn breeds_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let config = ResourceConfig::<Breed> {
        id: ScreenId::Breeds,
        columns: vec![
            Column::new("nameEn", "Name (EN)"),
            Column::new("nameAr", "Name (AR)"),
            Column::new("animalTypeName", "Type"),
        ],
        sort_keys: vec!["nameEn"],
        empty_message: "no breeds match the current filters",
        label: Arc::new(|b: &Breed| b.name_en.clone()),
        detail: Arc::new(|b: &Breed| {
            vec![
                ("ID".to_owned(), b.id.to_string()),
                ("Name (EN)".to_owned(), b.name_en.clone()),
                ("Name (AR)".to_owned(), text(&b.name_ar)),
                ("Type".to_owned(), text(&b.animal_type_name)),
            ]
        }),
        delete: Some(Arc::new(move |b: Breed| {
            let client = del.clone();
            async move { client.delete_breed(&b.id).await }.boxed()
        })),
        toggle: None,
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.breeds(),
        session.executor(),
    ))
}

fn animal_types_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let config = ResourceConfig::<AnimalType> {
        id: ScreenId::Types,
        columns: vec![
            Column::new("nameEn", "Name (EN)"),
            Column::new("nameAr", "Name (AR)"),
        ],
        sort_keys: vec!["nameEn"],
        empty_message: "no animal types defined",
        label: Arc::new(|t: &AnimalType| t.name_en.clone()),
        detail: Arc::new(|t: &AnimalType| {
            vec![
                ("ID".to_owned(), t.id.to_string()),
                ("Name (EN)".to_owned(), t.name_en.clone()),
                ("Name (AR)".to_owned(), text(&t.name_ar)),
            ]
        }),
        delete: Some(Arc::new(move |t: AnimalType| {
            let client = del.clone();
            async move { client.delete_animal_type(&t.id).await }.boxed()
        })),
        toggle: None,
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.animal_types(),
        session.executor(),
    ))
}

fn trackers_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let tog = session.client().clone();
    let config = ResourceConfig::<Tracker> {
        id: ScreenId::Trackers,
        columns: vec![
            Column::new("serialNumber", "Serial"),
            Column::new("model", "Model"),
            Column::new("animalName", "Animal"),
            Column::new("batteryPct", "Battery")
                .width(ColumnWidth::Fixed(8))
                .render(|t: &Tracker| {
                    t.battery_pct
                        .map_or_else(|| "-".to_owned(), |pct| format!("{pct}%"))
                }),
            Column::new("isActive", "Active").width(ColumnWidth::Fixed(6)),
        ],
        sort_keys: vec!["serialNumber", "lastSeenAt"],
        empty_message: "no trackers match the current filters",
        label: Arc::new(|t: &Tracker| t.serial_number.clone()),
        detail: Arc::new(|t: &Tracker| {
            vec![
                ("ID".to_owned(), t.id.to_string()),
                ("Serial".to_owned(), t.serial_number.clone()),
                ("Model".to_owned(), text(&t.model)),
                ("Animal".to_owned(), text(&t.animal_name)),
                (
                    "Battery".to_owned(),
                    t.battery_pct
                        .map_or_else(|| "-".to_owned(), |pct| format!("{pct}%")),
                ),
                ("Active".to_owned(), yes_no(t.is_active)),
                ("Last seen".to_owned(), date(t.last_seen_at)),
            ]
        }),
        delete: Some(Arc::new(move |t: Tracker| {
            let client = del.clone();
            async move { client.delete_tracker(&t.id).await }.boxed()
        })),
        toggle: Some(RowCommand {
            verb: "toggle active",
            done: "Tracker updated",
            run: Arc::new(move |t: &Tracker| {
                let client = tog.clone();
                let id = t.id;
                let active = t.is_active;
                async move { client.set_tracker_active(&id, !active).await }.boxed()
            }),
        }),
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.trackers(),
        session.executor(),
    ))
}

fn geofences_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let config = ResourceConfig::<Geofence> {
        id: ScreenId::Fences,
        columns: vec![
            Column::new("name", "Name"),
            Column::new("points", "Vertices")
                .width(ColumnWidth::Fixed(10))
                .render(|g: &Geofence| g.points.len().to_string()),
            Column::new("isActive", "Active").width(ColumnWidth::Fixed(6)),
        ],
        sort_keys: vec!["name"],
        empty_message: "no geofences match the current filters",
        label: Arc::new(|g: &Geofence| g.name.clone()),
        detail: Arc::new(|g: &Geofence| {
            vec![
                ("ID".to_owned(), g.id.to_string()),
                ("Name".to_owned(), g.name.clone()),
                (
                    "Owner".to_owned(),
                    g.owner_id
                        .map_or_else(|| "-".to_owned(), |id| id.to_string()),
                ),
                ("Vertices".to_owned(), g.points.len().to_string()),
                ("Active".to_owned(), yes_no(g.is_active)),
            ]
        }),
        delete: Some(Arc::new(move |g: Geofence| {
            let client = del.clone();
            async move { client.delete_geofence(&g.id).await }.boxed()
        })),
        toggle: None,
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.geofences(),
        session.executor(),
    ))
}

fn zones_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let tog = session.client().clone();
    let config = ResourceConfig::<DeliveryZone> {
        id: ScreenId::Zones,
        columns: vec![
            Column::new("nameEn", "Name (EN)"),
            Column::new("nameAr", "Name (AR)"),
            Column::new("deliveryFee", "Fee")
                .width(ColumnWidth::Fixed(8))
                .render(|z: &DeliveryZone| money(z.delivery_fee)),
            Column::new("isActive", "Active").width(ColumnWidth::Fixed(6)),
        ],
        sort_keys: vec!["nameEn", "deliveryFee"],
        empty_message: "no delivery zones match the current filters",
        label: Arc::new(|z: &DeliveryZone| z.name_en.clone()),
        detail: Arc::new(|z: &DeliveryZone| {
            vec![
                ("ID".to_owned(), z.id.to_string()),
                ("Name (EN)".to_owned(), z.name_en.clone()),
                ("Name (AR)".to_owned(), text(&z.name_ar)),
                ("Fee".to_owned(), money(z.delivery_fee)),
                ("Active".to_owned(), yes_no(z.is_active)),
            ]
        }),
        delete: Some(Arc::new(move |z: DeliveryZone| {
            let client = del.clone();
            async move { client.delete_delivery_zone(&z.id).await }.boxed()
        })),
        toggle: Some(RowCommand {
            verb: "toggle active",
            done: "Delivery zone updated",
            run: Arc::new(move |z: &DeliveryZone| {
                let client = tog.clone();
                let id = z.id;
                let active = z.is_active;
                async move { client.set_delivery_zone_active(&id, !active).await }.boxed()
            }),
        }),
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.delivery_zones(),
        session.executor(),
    ))
}

fn orders_screen(session: &Session) -> Box<dyn Component> {
    let cancel = session.client().clone();
    let config = ResourceConfig::<Order> {
        id: ScreenId::Orders,
        columns: vec![
            Column::new("orderNumber", "Number").width(ColumnWidth::Fixed(12)),
            Column::new("customerName", "Customer"),
            Column::new("status", "Status")
                .width(ColumnWidth::Fixed(16))
                .render(|o: &Order| o.status.as_str().to_owned()),
            Column::new("total", "Total")
                .width(ColumnWidth::Fixed(10))
                .render(|o: &Order| money(o.total)),
            Column::new("zoneName", "Zone"),
        ],
        sort_keys: vec!["createdAt", "total", "status"],
        empty_message: "no orders match the current filters",
        label: Arc::new(|o: &Order| {
            o.order_number
                .clone()
                .unwrap_or_else(|| o.id.to_string())
        }),
        detail: Arc::new(|o: &Order| {
            vec![
                ("ID".to_owned(), o.id.to_string()),
                ("Number".to_owned(), text(&o.order_number)),
                ("Customer".to_owned(), text(&o.customer_name)),
                ("Status".to_owned(), o.status.as_str().to_owned()),
                ("Total".to_owned(), money(o.total)),
                ("Zone".to_owned(), text(&o.zone_name)),
                ("Placed".to_owned(), date(o.created_at)),
            ]
        }),
        delete: None,
        toggle: None,
        confirm: Some(RowCommand {
            verb: "Cancel order",
            done: "Order cancelled",
            run: Arc::new(move |o: &Order| {
                let client = cancel.clone();
                let id = o.id;
                async move { client.set_order_status(&id, OrderStatus::Cancelled).await }
                    .boxed()
            }),
        }),
    };
    Box::new(ResourceScreen::new(
        config,
        session.orders(),
        session.executor(),
    ))
}

fn plans_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let tog = session.client().clone();
    let config = ResourceConfig::<SubscriptionPlan> {
        id: ScreenId::Plans,
        columns: vec![
            Column::new("nameEn", "Name (EN)"),
            Column::new("price", "Price")
                .width(ColumnWidth::Fixed(10))
                .render(|p: &SubscriptionPlan| format!("{:.2}", p.price)),
            Column::new("durationDays", "Duration")
                .width(ColumnWidth::Fixed(10))
                .render(|p: &SubscriptionPlan| {
                    p.duration_days
                        .map_or_else(|| "-".to_owned(), |d| format!("{d} days"))
                }),
            Column::new("isVisible", "Visible").width(ColumnWidth::Fixed(8)),
        ],
        sort_keys: vec!["nameEn", "price"],
        empty_message: "no subscription plans defined",
        label: Arc::new(|p: &SubscriptionPlan| p.name_en.clone()),
        detail: Arc::new(|p: &SubscriptionPlan| {
            vec![
                ("ID".to_owned(), p.id.to_string()),
                ("Name (EN)".to_owned(), p.name_en.clone()),
                ("Name (AR)".to_owned(), text(&p.name_ar)),
                ("Price".to_owned(), format!("{:.2}", p.price)),
                (
                    "Duration".to_owned(),
                    p.duration_days
                        .map_or_else(|| "-".to_owned(), |d| format!("{d} days")),
                ),
                ("Visible".to_owned(), yes_no(p.is_visible)),
            ]
        }),
        delete: Some(Arc::new(move |p: SubscriptionPlan| {
            let client = del.clone();
            async move { client.delete_plan(&p.id).await }.boxed()
        })),
        toggle: Some(RowCommand {
            verb: "toggle visible",
            done: "Plan updated",
            run: Arc::new(move |p: &SubscriptionPlan| {
                let client = tog.clone();
                let id = p.id;
                let visible = p.is_visible;
                async move { client.set_plan_visible(&id, !visible).await }.boxed()
            }),
        }),
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.plans(),
        session.executor(),
    ))
}

fn slides_screen(session: &Session) -> Box<dyn Component> {
    let del = session.client().clone();
    let tog = session.client().clone();
    let config = ResourceConfig::<Slide> {
        id: ScreenId::Slides,
        columns: vec![
            Column::new("titleEn", "Title (EN)"),
            Column::new("linkUrl", "Link"),
            Column::new("sortOrder", "Order").width(ColumnWidth::Fixed(7)),
            Column::new("isVisible", "Visible").width(ColumnWidth::Fixed(8)),
        ],
        sort_keys: vec!["sortOrder", "titleEn"],
        empty_message: "no slides uploaded",
        label: Arc::new(|s: &Slide| {
            s.title_en.clone().unwrap_or_else(|| s.id.to_string())
        }),
        detail: Arc::new(|s: &Slide| {
            vec![
                ("ID".to_owned(), s.id.to_string()),
                ("Title (EN)".to_owned(), text(&s.title_en)),
                ("Title (AR)".to_owned(), text(&s.title_ar)),
                ("Image".to_owned(), text(&s.image_url)),
                ("Link".to_owned(), text(&s.link_url)),
                ("Order".to_owned(), s.sort_order.to_string()),
                ("Visible".to_owned(), yes_no(s.is_visible)),
            ]
        }),
        delete: Some(Arc::new(move |s: Slide| {
            let client = del.clone();
            async move { client.delete_slide(&s.id).await }.boxed()
        })),
        toggle: Some(RowCommand {
            verb: "toggle visible",
            done: "Slide updated",
            run: Arc::new(move |s: &Slide| {
                let client = tog.clone();
                let id = s.id;
                let visible = s.is_visible;
                async move { client.set_slide_visible(&id, !visible).await }.boxed()
            }),
        }),
        confirm: None,
    };
    Box::new(ResourceScreen::new(
        config,
        session.slides(),
        session.executor(),
    ))
}
