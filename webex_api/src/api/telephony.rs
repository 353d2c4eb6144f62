use serde_json::{Map, Value};

use crate::{
    factory::{Construct, ObjectFactory},
    params::Params,
    query::{Query, TelephonyQuery},
    request::ItemsKey,
    resource::{expand, Resource},
    transport::Transport,
    Error,
};

use super::Records;

const OBJECT_TYPE: &str = "telephony";

/// Telephony configuration collections served by the same wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TelephonyFeature {
    AutoAttendants,
    HuntGroups,
    Numbers,
}

impl TelephonyFeature {
    /// Organization-wide collection path.
    pub fn path(&self) -> &'static str {
        match self {
            TelephonyFeature::AutoAttendants => "telephony/config/autoAttendants",
            TelephonyFeature::HuntGroups => "telephony/config/huntGroups",
            TelephonyFeature::Numbers => "telephony/config/numbers",
        }
    }

    /// Field each page keeps its items under.
    pub fn items_key(&self) -> ItemsKey {
        match self {
            TelephonyFeature::AutoAttendants => ItemsKey::Field("autoAttendants"),
            TelephonyFeature::HuntGroups => ItemsKey::Field("huntGroups"),
            TelephonyFeature::Numbers => ItemsKey::Field("phoneNumbers"),
        }
    }

    /// Template for a single member, scoped to its location. Numbers are only
    /// listed.
    pub fn item_template(&self) -> Option<&'static str> {
        match self {
            TelephonyFeature::AutoAttendants => {
                Some("telephony/config/locations/{locationId}/autoAttendants/{id}")
            }
            TelephonyFeature::HuntGroups => {
                Some("telephony/config/locations/{locationId}/huntGroups/{id}")
            }
            TelephonyFeature::Numbers => None,
        }
    }
}

impl std::fmt::Display for TelephonyFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TelephonyFeature::AutoAttendants => "autoAttendants",
                TelephonyFeature::HuntGroups => "huntGroups",
                TelephonyFeature::Numbers => "numbers",
            }
        )
    }
}

impl std::str::FromStr for TelephonyFeature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "autoAttendants" | "auto-attendants" => Ok(TelephonyFeature::AutoAttendants),
            "huntGroups" | "hunt-groups" => Ok(TelephonyFeature::HuntGroups),
            "numbers" | "phoneNumbers" => Ok(TelephonyFeature::Numbers),
            other => Err(Error::invalid_argument(
                "feature",
                format!("unknown telephony feature `{}`", other),
            )),
        }
    }
}

pub struct TelephonyApi<'a, T, F> {
    transport: &'a T,
    factory: &'a F,
}

impl<'a, T, F> TelephonyApi<'a, T, F>
where
    T: Transport,
    F: ObjectFactory,
{
    pub fn new(transport: &'a T, factory: &'a F) -> Self {
        Self { transport, factory }
    }

    fn construct(&self) -> Construct<'a, F> {
        Construct::new(self.factory, OBJECT_TYPE)
    }

    /// Lists one telephony collection across the organization.
    pub fn list(
        &self,
        feature: TelephonyFeature,
        query: &TelephonyQuery,
    ) -> Result<Records<'a, T, F>, Error> {
        let params = query.to_params()?;
        Ok(Resource::new(self.transport, feature.path(), self.construct())
            .with_items_key(feature.items_key())
            .list(params))
    }

    /// Fetches one member of a location-scoped telephony collection.
    pub async fn get(
        &self,
        feature: TelephonyFeature,
        location_id: &str,
        id: &str,
        org_id: Option<&str>,
    ) -> Result<F::Record, Error> {
        let template = feature.item_template().ok_or_else(|| {
            Error::invalid_argument("feature", format!("{} cannot be fetched by id", feature))
        })?;
        let params = Params::from_items(&Map::new(), [("orgId", org_id.map(Value::from))]);
        let path = expand(template, &[("locationId", location_id), ("id", id)], &[])?;
        Resource::new(self.transport, path, self.construct())
            .fetch(params)
            .await
    }

    pub fn list_auto_attendants(&self, query: &TelephonyQuery) -> Result<Records<'a, T, F>, Error> {
        self.list(TelephonyFeature::AutoAttendants, query)
    }

    pub async fn get_auto_attendant(
        &self,
        location_id: &str,
        auto_attendant_id: &str,
        org_id: Option<&str>,
    ) -> Result<F::Record, Error> {
        self.get(
            TelephonyFeature::AutoAttendants,
            location_id,
            auto_attendant_id,
            org_id,
        )
        .await
    }

    pub fn list_hunt_groups(&self, query: &TelephonyQuery) -> Result<Records<'a, T, F>, Error> {
        self.list(TelephonyFeature::HuntGroups, query)
    }

    pub async fn get_hunt_group(
        &self,
        location_id: &str,
        hunt_group_id: &str,
        org_id: Option<&str>,
    ) -> Result<F::Record, Error> {
        self.get(TelephonyFeature::HuntGroups, location_id, hunt_group_id, org_id)
            .await
    }

    pub fn list_numbers(&self, query: &TelephonyQuery) -> Result<Records<'a, T, F>, Error> {
        self.list(TelephonyFeature::Numbers, query)
    }
}
