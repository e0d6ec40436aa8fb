//! Type definitions for segmentgend

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use fabgen_common::Record;

use crate::schema::{defaults, fields, roles, VNI_OFFSET};

/// Segment service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentType {
    /// Layer-2 only overlay, no routing
    L2Only,
    /// Routed overlay with an SVI gateway per leaf
    L3Gateway,
    /// Routed overlay with a dedicated VRF instance
    L3Vrf,
}

impl FromStr for SegmentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "l2_only" => SegmentType::L2Only,
            "l3_gateway" => SegmentType::L3Gateway,
            "l3_vrf" => SegmentType::L3Vrf,
            _ => SegmentType::L2Only, // Default to l2_only
        })
    }
}

impl SegmentType {
    /// Convert to string
    pub fn as_str(&self) -> &str {
        match self {
            SegmentType::L2Only => "l2_only",
            SegmentType::L3Gateway => "l3_gateway",
            SegmentType::L3Vrf => "l3_vrf",
        }
    }
}

/// Derived VXLAN parameters for a segment
///
/// `vni` is always `vlan_id + 10000`; no collision detection and no bounds
/// check against the 24-bit VNI space is performed, so out-of-range VLAN
/// IDs silently produce implausible VNIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VxlanParams {
    /// VLAN ID the parameters were derived from
    pub vlan_id: u32,
    /// VXLAN Network Identifier
    pub vni: u32,
    /// Route Distinguisher
    pub rd: String,
}

impl VxlanParams {
    /// Derive the VXLAN parameters for a VLAN ID
    pub fn derive(vlan_id: u32) -> Self {
        Self {
            vlan_id,
            vni: vlan_id + VNI_OFFSET,
            rd: vlan_id.to_string(),
        }
    }
}

/// A device belonging to a deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Device name
    pub name: String,
    /// Device role in the fabric (e.g. "leaf", "spine")
    pub role: String,
}

impl Device {
    /// Build a device from a cleaned record
    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            name: record
                .get_str_or(fields::NAME, defaults::DEVICE_NAME)
                .to_string(),
            role: record.get_str_or(fields::ROLE, "").to_string(),
        }
    }

    /// Returns true if the device role is eligible for VXLAN configuration
    pub fn is_eligible(&self) -> bool {
        roles::ELIGIBLE.contains(&self.role.as_str())
    }
}

/// The deployment a segment is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Deployment name
    pub name: String,
    /// Devices in the deployment, order as delivered
    pub devices: Vec<Device>,
}

impl Deployment {
    /// Build a deployment from a cleaned record
    pub fn from_record(record: &Record<'_>) -> Self {
        let devices = record
            .get_array(fields::DEVICES)
            .iter()
            .filter_map(Record::from_value)
            .map(|device| Device::from_record(&device))
            .collect();

        Self {
            name: record
                .get_str_or(fields::NAME, defaults::DEPLOYMENT_NAME)
                .to_string(),
            devices,
        }
    }

    /// Devices eligible for VXLAN configuration, order preserved, no dedup
    pub fn eligible_devices(&self) -> Vec<&Device> {
        self.devices.iter().filter(|d| d.is_eligible()).collect()
    }
}

/// One network segment record, defaults applied at ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSegment {
    /// Segment name
    pub name: String,
    /// Customer the segment belongs to
    pub customer_name: String,
    /// VLAN ID; `None` when absent or zero (zero is treated as unset)
    pub vlan_id: Option<u32>,
    /// Segment service type
    pub segment_type: SegmentType,
    /// Whether the VNI is advertised to external peers
    pub external_routing: bool,
    /// Tenant isolation mode
    pub tenant_isolation: String,
    /// Displayed prefix of the associated prefix record, if any
    pub prefix: Option<String>,
    /// Deployment the segment is bound to, if any
    pub deployment: Option<Deployment>,
}

impl NetworkSegment {
    /// Build a segment from a cleaned record, applying all defaults once
    pub fn from_record(record: &Record<'_>) -> Self {
        let segment_type = record
            .get_str_or(fields::SEGMENT_TYPE, SegmentType::L2Only.as_str())
            .parse()
            .unwrap_or(SegmentType::L2Only);

        Self {
            name: record.get_str_or(fields::NAME, defaults::NAME).to_string(),
            customer_name: record
                .get_str_or(fields::CUSTOMER_NAME, defaults::CUSTOMER_NAME)
                .to_string(),
            vlan_id: record.get_u32(fields::VLAN_ID).filter(|id| *id != 0),
            segment_type,
            external_routing: record.get_bool_or(fields::EXTERNAL_ROUTING, false),
            tenant_isolation: record
                .get_str_or(fields::TENANT_ISOLATION, defaults::TENANT_ISOLATION)
                .to_string(),
            prefix: record.get_object(fields::PREFIX).map(|prefix| {
                prefix
                    .get_str_or(fields::PREFIX, defaults::PREFIX_DISPLAY)
                    .to_string()
            }),
            deployment: record
                .get_object(fields::DEPLOYMENT)
                .map(|deployment| Deployment::from_record(&deployment)),
        }
    }
}
