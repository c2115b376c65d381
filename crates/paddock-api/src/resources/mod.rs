//! Typed endpoint groups, one file per admin resource.
//!
//! Every list call funnels through [`AdminClient::get_list`] and comes
//! back as a normalized [`ListPage`](crate::envelope::ListPage);
//! mutations come back as a [`MutationAck`](crate::envelope::MutationAck).

mod animals;
mod breeds;
mod content;
mod orders;
mod plans;
pub mod slides;
mod trackers;
mod users;
mod zones;
