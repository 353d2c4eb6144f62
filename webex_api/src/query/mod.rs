mod common;
pub use self::common::{Payload, Query, QueryCommon};
pub(crate) use self::common::{flag, list, number, text};

mod people;
pub use self::people::{PeopleQuery, PersonPayload};

mod device;
pub use self::device::DeviceQuery;

mod workspace;
pub use self::workspace::{WorkspacePayload, WorkspaceQuery};

mod location;
pub use self::location::{LocationPayload, LocationQuery};

mod telephony;
pub use self::telephony::TelephonyQuery;

mod feature;
pub use self::feature::FeatureQuery;
