//! Payload fixtures for generator testing
//!
//! Builds raw query-result payloads in the GraphQL shape the platform
//! delivers (edges/node connections, attribute value wrappers), so tests
//! exercise the cleaning pass and the processing pass together.

use serde_json::{json, Value};

/// A device entry in a deployment fixture
#[derive(Debug, Clone)]
pub struct DeviceFixture {
    /// Device name
    pub name: String,
    /// Device role
    pub role: String,
}

/// Shorthand for a device fixture
pub fn device(name: impl Into<String>, role: impl Into<String>) -> DeviceFixture {
    DeviceFixture {
        name: name.into(),
        role: role.into(),
    }
}

/// Builder for one raw `ServiceNetworkSegment` query-result payload
#[derive(Debug, Clone, Default)]
pub struct SegmentPayload {
    name: Option<String>,
    customer_name: Option<String>,
    vlan_id: Option<u32>,
    segment_type: Option<String>,
    external_routing: Option<bool>,
    tenant_isolation: Option<String>,
    prefix: Option<String>,
    deployment: Option<(String, Vec<DeviceFixture>)>,
}

impl SegmentPayload {
    /// Create a named segment payload
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the customer name
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer_name = Some(customer.into());
        self
    }

    /// Set the VLAN ID
    pub fn with_vlan(mut self, vlan_id: u32) -> Self {
        self.vlan_id = Some(vlan_id);
        self
    }

    /// Set the segment type
    pub fn with_segment_type(mut self, segment_type: impl Into<String>) -> Self {
        self.segment_type = Some(segment_type.into());
        self
    }

    /// Set the external routing flag
    pub fn with_external_routing(mut self, enabled: bool) -> Self {
        self.external_routing = Some(enabled);
        self
    }

    /// Set the tenant isolation mode
    pub fn with_tenant_isolation(mut self, isolation: impl Into<String>) -> Self {
        self.tenant_isolation = Some(isolation.into());
        self
    }

    /// Attach an associated prefix record
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Attach a deployment with devices
    pub fn with_deployment(
        mut self,
        name: impl Into<String>,
        devices: Vec<DeviceFixture>,
    ) -> Self {
        self.deployment = Some((name.into(), devices));
        self
    }

    /// Build the raw payload as the platform would deliver it
    pub fn build(&self) -> Value {
        let mut node = serde_json::Map::new();

        if let Some(name) = &self.name {
            node.insert("name".into(), json!({"value": name}));
        }
        if let Some(customer) = &self.customer_name {
            node.insert("customer_name".into(), json!({"value": customer}));
        }
        if let Some(vlan_id) = self.vlan_id {
            node.insert("vlan_id".into(), json!({"value": vlan_id}));
        }
        if let Some(segment_type) = &self.segment_type {
            node.insert("segment_type".into(), json!({"value": segment_type}));
        }
        if let Some(external_routing) = self.external_routing {
            node.insert("external_routing".into(), json!({"value": external_routing}));
        }
        if let Some(isolation) = &self.tenant_isolation {
            node.insert("tenant_isolation".into(), json!({"value": isolation}));
        }
        if let Some(prefix) = &self.prefix {
            node.insert(
                "prefix".into(),
                json!({"node": {"prefix": {"value": prefix}}}),
            );
        }
        if let Some((deployment_name, devices)) = &self.deployment {
            let device_edges: Vec<Value> = devices
                .iter()
                .map(|d| {
                    json!({
                        "node": {
                            "name": {"value": d.name},
                            "role": {"value": d.role}
                        }
                    })
                })
                .collect();
            node.insert(
                "deployment".into(),
                json!({
                    "node": {
                        "name": {"value": deployment_name},
                        "devices": {"edges": device_edges}
                    }
                }),
            );
        }

        json!({
            "ServiceNetworkSegment": {
                "edges": [{"node": Value::Object(node)}]
            }
        })
    }
}

/// Payload whose segment list is empty
pub fn empty_payload() -> Value {
    json!({"ServiceNetworkSegment": {"edges": []}})
}

/// Canned segment scenarios
pub mod segment_fixtures {
    use super::*;

    /// Plain L2 segment on a single-leaf deployment
    pub fn l2_segment(vlan_id: u32) -> Value {
        SegmentPayload::new("l2-seg")
            .with_customer("acme")
            .with_vlan(vlan_id)
            .with_deployment("dc1", vec![device("leaf1", "leaf")])
            .build()
    }

    /// L3 gateway segment with external routing on a mixed deployment
    pub fn l3_gateway_segment(vlan_id: u32) -> Value {
        SegmentPayload::new("gw-seg")
            .with_customer("acme")
            .with_vlan(vlan_id)
            .with_segment_type("l3_gateway")
            .with_external_routing(true)
            .with_deployment(
                "dc1",
                vec![device("leaf1", "leaf"), device("spine1", "spine")],
            )
            .build()
    }

    /// L3 VRF segment without external routing
    pub fn l3_vrf_segment(vlan_id: u32) -> Value {
        SegmentPayload::new("vrf-seg")
            .with_vlan(vlan_id)
            .with_segment_type("l3_vrf")
            .with_deployment("dc1", vec![device("bleaf1", "border_leaf")])
            .build()
    }

    /// Segment whose deployment holds only spine devices
    pub fn spine_only_segment(vlan_id: u32) -> Value {
        SegmentPayload::new("spine-seg")
            .with_vlan(vlan_id)
            .with_deployment(
                "dc1",
                vec![device("spine1", "spine"), device("spine2", "spine")],
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabgen_common::clean_data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_builder_shape() {
        let raw = SegmentPayload::new("web-tier")
            .with_vlan(100)
            .with_prefix("10.1.0.0/24")
            .with_deployment("dc1", vec![device("leaf1", "leaf")])
            .build();

        let cleaned = clean_data(&raw);
        let segments = cleaned["ServiceNetworkSegment"].as_array().unwrap();
        assert_eq!(segments.len(), 1);

        let segment = &segments[0];
        assert_eq!(segment["name"], "web-tier");
        assert_eq!(segment["vlan_id"], 100);
        assert_eq!(segment["prefix"]["prefix"], "10.1.0.0/24");
        assert_eq!(segment["deployment"]["name"], "dc1");
        assert_eq!(segment["deployment"]["devices"][0]["role"], "leaf");
    }

    #[test]
    fn test_empty_payload_shape() {
        let cleaned = clean_data(&empty_payload());
        assert!(cleaned["ServiceNetworkSegment"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
