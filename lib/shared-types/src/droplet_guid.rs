use serde::{Deserialize, Serialize};

use crate::macros::impls_for_guid_newtype;

#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DropletGuid(String);

impls_for_guid_newtype!(DropletGuid);
