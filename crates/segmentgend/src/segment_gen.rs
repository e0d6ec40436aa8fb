//! SegmentGenerator - VXLAN segment processing implementation

use async_trait::async_trait;
use serde_json::{Map, Value};

use fabgen_common::{clean_data, ensure_object, Generator, GeneratorResult, Record, Trace};

use crate::schema::SERVICE_NETWORK_SEGMENT_KIND;
use crate::types::{Device, NetworkSegment, SegmentType, VxlanParams};

/// SegmentGenerator derives and emits VXLAN configuration for one segment
///
/// Processing flow:
/// 1. Clean the raw query result and take the first segment record
/// 2. Validate VLAN ID and deployment, deriving VNI and RD
/// 3. Emit the per-device configuration trace for eligible leaf devices
///
/// The per-device step is log-only: no configuration object is created or
/// pushed. The generator runs once per segment; extra records in the
/// payload are ignored.
pub struct SegmentGenerator {
    /// Trace of the current invocation
    trace: Trace,
}

impl SegmentGenerator {
    /// Creates a new SegmentGenerator instance
    pub fn new() -> Self {
        Self {
            trace: Trace::new(),
        }
    }

    /// Trace emitted by the most recent invocation
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Takes the trace of the most recent invocation
    pub fn take_trace(&mut self) -> Trace {
        std::mem::take(&mut self.trace)
    }

    /// Process the cleaned query result
    fn process(&mut self, cleaned: &Map<String, Value>) {
        let segments = cleaned
            .get(SERVICE_NETWORK_SEGMENT_KIND)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let Some(first) = segments.first() else {
            self.trace.warning("No segment data found in query result");
            return;
        };

        // Generator runs per-segment; extra records are ignored.
        let Some(record) = Record::from_value(first) else {
            self.trace.warning("No segment data found in query result");
            return;
        };

        let segment = NetworkSegment::from_record(&record);
        self.process_segment(&segment);
    }

    /// Validate one segment and emit its configuration trace
    fn process_segment(&mut self, segment: &NetworkSegment) {
        let Some(vlan_id) = segment.vlan_id else {
            self.trace
                .error(format!("Segment {} has no VLAN ID, skipping", segment.name));
            return;
        };

        let params = VxlanParams::derive(vlan_id);

        self.trace
            .info(format!("Processing segment: {}", segment.name));
        self.trace
            .info(format!("  Customer: {}", segment.customer_name));
        self.trace.info(format!("  VLAN ID: {}", params.vlan_id));
        self.trace.info(format!("  VNI: {}", params.vni));
        self.trace.info(format!("  RD: {}", params.rd));
        self.trace
            .info(format!("  Type: {}", segment.segment_type.as_str()));
        self.trace
            .info(format!("  External Routing: {}", segment.external_routing));
        self.trace
            .info(format!("  Tenant Isolation: {}", segment.tenant_isolation));

        let Some(deployment) = &segment.deployment else {
            self.trace.warning(format!(
                "Segment {} has no deployment, skipping",
                segment.name
            ));
            return;
        };

        self.trace
            .info(format!("  Deployment: {}", deployment.name));

        if let Some(prefix) = &segment.prefix {
            self.trace.info(format!("  Prefix: {}", prefix));
        }

        let leaf_devices = deployment.eligible_devices();
        if leaf_devices.is_empty() {
            self.trace.info(format!(
                "No leaf devices found in deployment {}, \
                 VxLAN configuration will be applied when devices are available",
                deployment.name
            ));
            return;
        }

        self.trace.info(format!(
            "Found {} leaf devices for VxLAN configuration",
            leaf_devices.len()
        ));

        self.configure_vxlan_on_leaves(&leaf_devices, segment, &params);
    }

    /// Emit the VXLAN configuration that would be applied to each leaf
    ///
    /// Log-only: creating VxlanVniMapping / VxlanEvpnInstance objects is
    /// deferred until the platform carries a schema for them.
    fn configure_vxlan_on_leaves(
        &mut self,
        leaf_devices: &[&Device],
        segment: &NetworkSegment,
        params: &VxlanParams,
    ) {
        for device in leaf_devices {
            self.trace.info(format!(
                "  Configuring VxLAN on {}: VLAN {} -> VNI {} (RD: {})",
                device.name, params.vlan_id, params.vni, params.rd
            ));

            match segment.segment_type {
                SegmentType::L3Gateway => {
                    self.trace.info(format!(
                        "    L3 Gateway: Creating SVI for VLAN {} on {}",
                        params.vlan_id, device.name
                    ));
                }
                SegmentType::L3Vrf => {
                    self.trace.info(format!(
                        "    L3 VRF: Creating VRF instance for segment on {}",
                        device.name
                    ));
                }
                SegmentType::L2Only => {}
            }

            if segment.external_routing {
                self.trace.info(format!(
                    "    External routing enabled: Advertising VNI {} to external peers",
                    params.vni
                ));
            }
        }

        self.trace.info(format!(
            "VxLAN configuration complete for segment {}",
            segment.name
        ));
    }
}

impl Default for SegmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generator trait implementation
#[async_trait]
impl Generator for SegmentGenerator {
    fn name(&self) -> &str {
        "segmentgen"
    }

    fn query_kinds(&self) -> &[&str] {
        &[SERVICE_NETWORK_SEGMENT_KIND]
    }

    async fn generate(&mut self, data: &Value) -> GeneratorResult<()> {
        // Fresh trace per invocation; repeated runs over identical input
        // produce identical traces.
        self.trace.clear();

        let cleaned = clean_data(data);
        let root = ensure_object(&cleaned)?;
        self.process(root);

        Ok(())
    }
}
