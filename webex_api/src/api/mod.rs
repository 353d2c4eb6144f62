//! Endpoint wrappers, one per resource family.

use crate::{
    factory::{Construct, Raw},
    pagination::ItemList,
};

mod people;
pub use self::people::PeopleApi;

mod devices;
pub use self::devices::DevicesApi;

mod workspaces;
pub use self::workspaces::WorkspacesApi;

mod locations;
pub use self::locations::LocationsApi;

mod telephony;
pub use self::telephony::{TelephonyApi, TelephonyFeature};

mod skills;
pub use self::skills::SkillsApi;

mod contact_center;
pub use self::contact_center::ContactCenterApi;

mod csdm;
pub use self::csdm::{csdm_search, CsdmApi};

/// A lazy list whose items go through the object factory.
pub type Records<'a, T, F> = ItemList<'a, T, Construct<'a, F>>;

/// A lazy list of untouched JSON items.
pub type RawItems<'a, T> = ItemList<'a, T, Raw>;
