//! Data-center regions

use serde::{Deserialize, Serialize};

/// CleverTap data-center region an account is provisioned in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "eu1")]
    Europe,
    #[serde(rename = "in1")]
    India,
    #[serde(rename = "sg1")]
    Singapore,
    #[serde(rename = "us1")]
    Us,
}

crate::impl_wire_name_conversions!(Region {
    Europe => "eu1",
    India => "in1",
    Singapore => "sg1",
    Us => "us1",
});

impl Region {
    /// Every region accepted by the API.
    pub const ALL: [Self; 4] = [Self::Europe, Self::India, Self::Singapore, Self::Us];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_region_token() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>().unwrap(), region);
        }
        assert!("ap1".parse::<Region>().is_err());
    }

    #[test]
    fn serde_uses_region_tokens() {
        assert_eq!(serde_json::to_value(Region::Singapore).unwrap(), "sg1");
        let region: Region = serde_json::from_value(serde_json::json!("us1")).unwrap();
        assert_eq!(region, Region::Us);
    }
}
