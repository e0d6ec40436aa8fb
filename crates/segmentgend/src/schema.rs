//! Schema constants for segmentgend

/// Object kind resolved by the generator's query
pub const SERVICE_NETWORK_SEGMENT_KIND: &str = "ServiceNetworkSegment";

/// Offset added to a VLAN ID to derive its VNI
pub const VNI_OFFSET: u32 = 10_000;

/// Field names
pub mod fields {
    /// Segment name field
    pub const NAME: &str = "name";

    /// Customer name field
    pub const CUSTOMER_NAME: &str = "customer_name";

    /// VLAN ID field
    pub const VLAN_ID: &str = "vlan_id";

    /// Segment type field
    pub const SEGMENT_TYPE: &str = "segment_type";

    /// External routing flag field
    pub const EXTERNAL_ROUTING: &str = "external_routing";

    /// Tenant isolation field
    pub const TENANT_ISOLATION: &str = "tenant_isolation";

    /// Associated prefix relation field
    pub const PREFIX: &str = "prefix";

    /// Deployment relation field
    pub const DEPLOYMENT: &str = "deployment";

    /// Deployment devices relation field
    pub const DEVICES: &str = "devices";

    /// Device role field
    pub const ROLE: &str = "role";
}

/// Device roles
pub mod roles {
    /// Leaf switch role
    pub const LEAF: &str = "leaf";

    /// Border leaf switch role
    pub const BORDER_LEAF: &str = "border_leaf";

    /// Roles eligible for VXLAN configuration
    pub const ELIGIBLE: &[&str] = &[LEAF, BORDER_LEAF];
}

/// Default values applied at ingestion
pub mod defaults {
    /// Default segment name
    pub const NAME: &str = "unknown";

    /// Default customer name
    pub const CUSTOMER_NAME: &str = "unknown";

    /// Default device name
    pub const DEVICE_NAME: &str = "unknown";

    /// Default deployment name
    pub const DEPLOYMENT_NAME: &str = "unknown";

    /// Default tenant isolation mode
    pub const TENANT_ISOLATION: &str = "customer_dedicated";

    /// Displayed prefix when the prefix record has no prefix field
    pub const PREFIX_DISPLAY: &str = "N/A";
}
