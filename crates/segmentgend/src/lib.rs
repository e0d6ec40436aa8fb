//! segmentgend - VXLAN network-segment generator daemon
//!
//! Reacts to the creation of a `ServiceNetworkSegment` record by deriving
//! the segment's VXLAN parameters (VNI = VLAN ID + 10000, RD = VLAN ID)
//! and emitting the configuration that would be applied to the leaf
//! devices of the segment's deployment. No configuration is pushed; the
//! per-device step is log-only.

mod payload;
mod schema;
mod segment_gen;
mod types;

pub use payload::load_payload;
pub use schema::*;
pub use segment_gen::SegmentGenerator;
pub use types::*;
